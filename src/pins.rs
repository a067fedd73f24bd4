//! GPIO / peripheral pin assignments for the ShakeColour board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  The I²C pins are also taken as typed
//! `esp_idf_hal` pins in `main`; keep both in step.

// ---------------------------------------------------------------------------
// Backlight (discrete RGB LEDs behind the diffuser)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 11;
pub const LED_G_GPIO: i32 = 12;
pub const LED_B_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// I²C bus (LIS3DH accelerometer, SA0 low → 0x18)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC frequency for the RGB backlight (1 kHz).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;

// ---------------------------------------------------------------------------
// Wake button (active-low with external pull-up)
// ---------------------------------------------------------------------------

/// Short press wakes the screen; long press toggles foreground.
pub const BUTTON_GPIO: i32 = 16;
