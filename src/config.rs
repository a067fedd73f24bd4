//! System configuration parameters
//!
//! Board and timing parameters for the ShakeColour firmware.  The shake
//! threshold and cooldown are deliberately absent: they are fixed in
//! [`crate::shake`].  Values come from [`SystemConfig::default`] unless a
//! JSON override was baked in at build time (`SHAKECOLOUR_CONFIG`).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sensors::accelerometer::{DataRate, FullScale};

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Accelerometer ---
    /// 7-bit I2C address of the accelerometer
    pub i2c_address: u8,
    /// I2C bus clock (kHz)
    pub i2c_frequency_khz: u32,
    /// Output data rate while listening (Hz); one of 1/10/25/50/100/200/400
    pub accel_data_rate_hz: u16,
    /// Measurement range (±g); one of 2/4/8/16
    pub accel_full_scale_g: u8,

    // --- Screen ---
    /// Inactivity before the screen dims (seconds)
    pub screen_dim_timeout_secs: u32,

    // --- Timing ---
    /// Main loop period; also the sensor poll period (milliseconds)
    pub loop_interval_ms: u32,
    /// Status report interval (seconds)
    pub status_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Accelerometer
            i2c_address: 0x18,
            i2c_frequency_khz: 400,
            accel_data_rate_hz: 25,
            accel_full_scale_g: 8,

            // Screen
            screen_dim_timeout_secs: 15,

            // Timing
            loop_interval_ms: 40,     // 25 Hz, matches the ODR
            status_interval_secs: 60, // 1/min
        }
    }
}

impl SystemConfig {
    /// Parse a JSON override.  Missing fields keep their defaults; the
    /// result is validated before it is returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the hardware or the event loop cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.i2c_address > 0x7F {
            return Err(ConfigError::ValidationFailed("i2c_address must be 7-bit"));
        }
        if self.i2c_frequency_khz == 0 || self.i2c_frequency_khz > 1000 {
            return Err(ConfigError::ValidationFailed(
                "i2c_frequency_khz must be in 1..=1000",
            ));
        }
        if self.data_rate().is_none() {
            return Err(ConfigError::ValidationFailed(
                "accel_data_rate_hz must be one of 1/10/25/50/100/200/400",
            ));
        }
        if self.full_scale().is_none() {
            return Err(ConfigError::ValidationFailed(
                "accel_full_scale_g must be one of 2/4/8/16",
            ));
        }
        if self.loop_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("loop_interval_ms must be > 0"));
        }
        if self.screen_dim_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "screen_dim_timeout_secs must be > 0",
            ));
        }
        if self.status_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "status_interval_secs must be > 0",
            ));
        }
        Ok(())
    }

    pub fn data_rate(&self) -> Option<DataRate> {
        DataRate::from_hz(self.accel_data_rate_hz)
    }

    pub fn full_scale(&self) -> Option<FullScale> {
        FullScale::from_g(self.accel_full_scale_g)
    }

    /// Screen dim timeout in milliseconds.
    pub fn screen_dim_timeout_ms(&self) -> u64 {
        u64::from(self.screen_dim_timeout_secs) * 1000
    }

    /// Number of loop iterations between status reports (at least one).
    pub fn status_every_loops(&self) -> u64 {
        let loops = u64::from(self.status_interval_secs) * 1000 / u64::from(self.loop_interval_ms.max(1));
        loops.max(1)
    }
}
