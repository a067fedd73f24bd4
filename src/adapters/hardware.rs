//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the accelerometer driver and the backlight, exposing them
//! through [`AccelerometerPort`] and [`DisplayPort`].  This is the only
//! module in the system that touches actual hardware.  On non-espidf
//! targets the backlight writes are no-ops and the accelerometer runs on
//! whatever I²C implementation it is given.

use embedded_hal::i2c::I2c;

use crate::app::ports::{AccelerometerPort, DisplayPort};
use crate::drivers::status_led::StatusLed;
use crate::error::SensorError;
use crate::palette::Colour;
use crate::sensors::AccelSample;
use crate::sensors::accelerometer::Lis3dh;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I2C> {
    accel: Lis3dh<I2C>,
    led: StatusLed,
}

impl<I2C: I2c> HardwareAdapter<I2C> {
    pub fn new(accel: Lis3dh<I2C>, led: StatusLed) -> Self {
        Self { accel, led }
    }

    /// Backlight, for status queries.
    pub fn led(&self) -> &StatusLed {
        &self.led
    }
}

// ── AccelerometerPort implementation ─────────────────────────

impl<I2C: I2c> AccelerometerPort for HardwareAdapter<I2C> {
    fn probe(&mut self) -> Result<(), SensorError> {
        self.accel.probe()
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), SensorError> {
        self.accel.set_enabled(enabled)
    }

    fn read_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
        self.accel.read_sample()
    }
}

// ── DisplayPort implementation ───────────────────────────────

impl<I2C: I2c> DisplayPort for HardwareAdapter<I2C> {
    fn set_background(&mut self, colour: Colour) {
        let (r, g, b) = colour.rgb();
        self.led.set_colour(r, g, b);
    }

    fn set_dimmed(&mut self, dimmed: bool) {
        self.led.set_dimmed(dimmed);
    }
}
