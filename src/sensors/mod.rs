//! Sensor subsystem — the accelerometer driver and its sample type.
//!
//! [`AccelSample`] is the only thing the domain ever sees; the driver in
//! [`accelerometer`] turns raw register counts into it.

pub mod accelerometer;

/// Standard gravitational acceleration (m/s²) used to normalise samples.
pub const GRAVITY_EARTH: f32 = 9.806_65;

/// One three-axis acceleration reading in m/s².
///
/// Transient: produced per data-ready event and consumed immediately by
/// the shake detector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccelSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AccelSample {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared magnitude of the force vector, in (m/s²)².
    pub fn magnitude_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}
