//! RGB backlight driver.
//!
//! Three LEDC PWM channels (CH0-2) drive discrete R/G/B LEDs behind the
//! diffuser that forms the "view".
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives three LEDC PWM channels via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::palette::Rgb;

/// Dimmed output is the colour scaled down by this shift (1/8 brightness).
const DIM_SHIFT: u8 = 3;

#[derive(Default)]
pub struct StatusLed {
    colour: Rgb,
    dimmed: bool,
}

impl StatusLed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_colour(&mut self, r: u8, g: u8, b: u8) {
        self.colour = (r, g, b);
        self.refresh();
    }

    /// Keep the colour but lower (or restore) its brightness.
    pub fn set_dimmed(&mut self, dimmed: bool) {
        self.dimmed = dimmed;
        self.refresh();
    }

    /// Colour as requested, ignoring dimming.
    pub fn current_colour(&self) -> Rgb {
        self.colour
    }

    pub fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    /// The duty values actually on the PWM channels.
    pub fn output(&self) -> Rgb {
        let (r, g, b) = self.colour;
        if self.dimmed {
            (r >> DIM_SHIFT, g >> DIM_SHIFT, b >> DIM_SHIFT)
        } else {
            self.colour
        }
    }

    fn refresh(&self) {
        let (r, g, b) = self.output();
        hw_init::ledc_set(hw_init::LEDC_CH_LED_R, r);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_G, g);
        hw_init::ledc_set(hw_init::LEDC_CH_LED_B, b);
    }
}
