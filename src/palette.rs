//! Background colour palette and the cycling cursor.
//!
//! Six fixed colours, visited in order and wrapping around:
//!
//! | Index | Colour  | RGB           |
//! |-------|---------|---------------|
//! | 0     | Blue    | (0, 0, 255)   |
//! | 1     | Green   | (0, 255, 0)   |
//! | 2     | Red     | (255, 0, 0)   |
//! | 3     | Yellow  | (255, 255, 0) |
//! | 4     | Cyan    | (0, 255, 255) |
//! | 5     | Magenta | (255, 0, 255) |

use serde::Serialize;

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Blue,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta,
}

impl Colour {
    /// The palette, in cycling order.
    pub const ALL: [Colour; 6] = [
        Colour::Blue,
        Colour::Green,
        Colour::Red,
        Colour::Yellow,
        Colour::Cyan,
        Colour::Magenta,
    ];

    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Blue => (0, 0, 255),
            Self::Green => (0, 255, 0),
            Self::Red => (255, 0, 0),
            Self::Yellow => (255, 255, 0),
            Self::Cyan => (0, 255, 255),
            Self::Magenta => (255, 0, 255),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
        }
    }
}

/// Cursor into [`Colour::ALL`].  The index is private and only ever moved
/// modulo the palette length, so it is always valid.
#[derive(Debug, Clone, Default)]
pub struct ColourCycler {
    index: usize,
}

impl ColourCycler {
    /// Starts on the first palette entry (blue).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Colour {
        Colour::ALL[self.index]
    }

    /// Step to the next colour and return it.
    pub fn advance(&mut self) -> Colour {
        self.index = (self.index + 1) % Colour::ALL.len();
        self.current()
    }
}
