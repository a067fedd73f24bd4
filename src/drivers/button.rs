//! ISR-debounced wake button with short and long press detection.
//!
//! ## Hardware
//!
//! Active-low momentary switch with external pull-up. GPIO fires on
//! falling edge; ISR records the raw timestamp into an atomic, and the
//! `tick()` method (called from the main loop every iteration) runs the
//! debounce + gesture state machine.
//!
//! ## Gesture detection
//!
//! | Gesture     | Condition                        | Meaning               |
//! |-------------|----------------------------------|-----------------------|
//! | Short press | Released before 2 s              | wake the screen       |
//! | Long press  | Held >= 2 s                      | toggle foreground     |

use core::sync::atomic::{AtomicU32, Ordering};

const DEBOUNCE_MS: u32 = 50;
const LONG_PRESS_MS: u32 = 2000;

/// Raw ISR timestamp (milliseconds since boot, truncated to u32).
/// Written by the ISR, read by the main loop.
static BUTTON_ISR_TIMESTAMP: AtomicU32 = AtomicU32::new(0);

/// Button events emitted after gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    ShortPress,
    LongPress,
}

/// Internal state machine for gesture detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    DebounceWait { since_ms: u32 },
    Pressed { since_ms: u32 },
}

pub struct ButtonDriver {
    state: GestureState,
    last_isr_ms: u32,
}

impl ButtonDriver {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            last_isr_ms: 0,
        }
    }

    /// Call from the main loop every iteration.
    /// `now_ms` is the current monotonic time in milliseconds.
    /// Returns a classified gesture event, if any.
    pub fn tick(&mut self, now_ms: u32) -> Option<ButtonEvent> {
        self.tick_with_level(now_ms, Self::is_pressed_hw())
    }

    fn tick_with_level(&mut self, now_ms: u32, pressed: bool) -> Option<ButtonEvent> {
        let isr_ms = BUTTON_ISR_TIMESTAMP.load(Ordering::Acquire);
        let new_press = isr_ms != self.last_isr_ms && isr_ms != 0;

        match self.state {
            GestureState::Idle => {
                if new_press {
                    self.last_isr_ms = isr_ms;
                    self.state = GestureState::DebounceWait { since_ms: now_ms };
                }
                None
            }

            GestureState::DebounceWait { since_ms } => {
                // Contact bounce belongs to the press being classified.
                self.last_isr_ms = isr_ms;
                if now_ms.wrapping_sub(since_ms) >= DEBOUNCE_MS {
                    self.state = GestureState::Pressed { since_ms };
                }
                None
            }

            GestureState::Pressed { since_ms } => {
                self.last_isr_ms = isr_ms;
                let held_ms = now_ms.wrapping_sub(since_ms);

                if held_ms >= LONG_PRESS_MS {
                    self.state = GestureState::Idle;
                    return Some(ButtonEvent::LongPress);
                }

                if !pressed {
                    self.state = GestureState::Idle;
                    return Some(ButtonEvent::ShortPress);
                }

                None
            }
        }
    }

    #[cfg(target_os = "espidf")]
    fn is_pressed_hw() -> bool {
        !crate::drivers::hw_init::gpio_read(crate::pins::BUTTON_GPIO)
    }

    #[cfg(not(target_os = "espidf"))]
    fn is_pressed_hw() -> bool {
        false
    }
}

impl Default for ButtonDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// ISR handler — register this on the button GPIO falling edge.
/// Safe to call from interrupt context (lock-free atomic store).
pub fn button_isr_handler(now_ms: u32) {
    BUTTON_ISR_TIMESTAMP.store(now_ms, Ordering::Release);
}
