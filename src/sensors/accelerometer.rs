//! LIS3DH-compatible three-axis accelerometer on I2C.
//!
//! ## Hardware
//!
//! Any part with the ST LIS3DH / LIS2DH register map: WHO_AM_I reads
//! `0x33`, data is 12-bit left-justified in high-resolution mode.  The
//! driver is generic over [`embedded_hal::i2c::I2c`], so on the device it
//! runs on `esp_idf_hal::i2c::I2cDriver` and in tests on an in-memory bus.
//!
//! ## Power
//!
//! Subscribing means programming an output data rate; unsubscribing writes
//! ODR = 0 (power-down, ~0.5 µA).  Nothing else in the system keeps the
//! part awake, so this is the whole power-saving story.

use embedded_hal::i2c::{Error as _, I2c};
use log::{debug, info, warn};

use super::{AccelSample, GRAVITY_EARTH};
use crate::error::SensorError;

/// 7-bit address with SDO/SA0 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x18;

const EXPECTED_WHO_AM_I: u8 = 0x33;

const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL_REG1: u8 = 0x20;
const REG_CTRL_REG4: u8 = 0x23;
const REG_STATUS: u8 = 0x27;
const REG_OUT_X_L: u8 = 0x28;

/// Sub-address MSB: auto-increment across multi-byte reads.
const AUTO_INCREMENT: u8 = 0x80;

// CTRL_REG1
const AXES_ENABLE: u8 = 0b0000_0111;
const ODR_SHIFT: u8 = 4;

// CTRL_REG4
const BLOCK_DATA_UPDATE: u8 = 0b1000_0000;
const HIGH_RESOLUTION: u8 = 0b0000_1000;
const FS_SHIFT: u8 = 4;

// STATUS_REG
const ZYX_DATA_AVAILABLE: u8 = 0b0000_1000;

/// Output data rate while subscribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataRate {
    Hz1 = 0b0001,
    Hz10 = 0b0010,
    Hz25 = 0b0011,
    Hz50 = 0b0100,
    Hz100 = 0b0101,
    Hz200 = 0b0110,
    Hz400 = 0b0111,
}

impl DataRate {
    /// Map a rate in Hz onto a supported ODR setting.
    pub fn from_hz(hz: u16) -> Option<Self> {
        match hz {
            1 => Some(Self::Hz1),
            10 => Some(Self::Hz10),
            25 => Some(Self::Hz25),
            50 => Some(Self::Hz50),
            100 => Some(Self::Hz100),
            200 => Some(Self::Hz200),
            400 => Some(Self::Hz400),
            _ => None,
        }
    }

    pub fn hz(self) -> u16 {
        match self {
            Self::Hz1 => 1,
            Self::Hz10 => 10,
            Self::Hz25 => 25,
            Self::Hz50 => 50,
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
        }
    }
}

/// Measurement range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FullScale {
    G2 = 0b00,
    G4 = 0b01,
    G8 = 0b10,
    G16 = 0b11,
}

impl FullScale {
    pub fn from_g(g: u8) -> Option<Self> {
        match g {
            2 => Some(Self::G2),
            4 => Some(Self::G4),
            8 => Some(Self::G8),
            16 => Some(Self::G16),
            _ => None,
        }
    }

    /// Sensitivity in high-resolution mode (milli-g per 12-bit count).
    fn mg_per_digit(self) -> f32 {
        match self {
            Self::G2 => 1.0,
            Self::G4 => 2.0,
            Self::G8 => 4.0,
            Self::G16 => 12.0,
        }
    }
}

/// Convert one little-endian, left-justified output pair to m/s².
fn counts_to_ms2(lo: u8, hi: u8, scale: FullScale) -> f32 {
    let counts = i16::from_le_bytes([lo, hi]) >> 4;
    f32::from(counts) * scale.mg_per_digit() * GRAVITY_EARTH / 1000.0
}

pub struct Lis3dh<I2C> {
    i2c: I2C,
    address: u8,
    rate: DataRate,
    scale: FullScale,
    probed: bool,
    enabled: bool,
}

impl<I2C: I2c> Lis3dh<I2C> {
    pub fn new(i2c: I2C, address: u8, rate: DataRate, scale: FullScale) -> Self {
        Self {
            i2c,
            address,
            rate,
            scale,
            probed: false,
            enabled: false,
        }
    }

    /// Give the bus back (e.g. to share it with another driver).
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Check the part is present and configure its range.
    ///
    /// Leaves the device powered down; call [`set_enabled`](Self::set_enabled)
    /// to start sampling.  Any bus error or a foreign WHO_AM_I value is
    /// reported as [`SensorError::Unavailable`].
    pub fn probe(&mut self) -> Result<(), SensorError> {
        let id = self.read_reg(REG_WHO_AM_I).map_err(|_| SensorError::Unavailable)?;
        if id != EXPECTED_WHO_AM_I {
            warn!("lis3dh: unexpected WHO_AM_I 0x{:02x} at 0x{:02x}", id, self.address);
            return Err(SensorError::Unavailable);
        }

        let ctrl4 = BLOCK_DATA_UPDATE | ((self.scale as u8) << FS_SHIFT) | HIGH_RESOLUTION;
        self.write_reg(REG_CTRL_REG4, ctrl4)
            .map_err(|_| SensorError::Unavailable)?;
        self.write_reg(REG_CTRL_REG1, 0)
            .map_err(|_| SensorError::Unavailable)?;

        self.probed = true;
        self.enabled = false;
        info!(
            "lis3dh: found at 0x{:02x} ({:?}, {} Hz when enabled)",
            self.address,
            self.scale,
            self.rate.hz()
        );
        Ok(())
    }

    /// Start (`true`) or stop (`false`) sampling.
    ///
    /// Repeating the current setting is a no-op and never touches the bus.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<(), SensorError> {
        if !self.probed {
            return Err(SensorError::NotProbed);
        }
        if enabled == self.enabled {
            debug!("lis3dh: already {}", if enabled { "enabled" } else { "powered down" });
            return Ok(());
        }

        let ctrl1 = if enabled {
            ((self.rate as u8) << ODR_SHIFT) | AXES_ENABLE
        } else {
            0
        };
        self.write_reg(REG_CTRL_REG1, ctrl1)?;
        self.enabled = enabled;
        debug!("lis3dh: CTRL_REG1=0x{:02x}", ctrl1);
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fetch the newest sample, or `None` if none is pending (or the
    /// device is powered down).
    pub fn read_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
        if !self.probed {
            return Err(SensorError::NotProbed);
        }
        if !self.enabled {
            return Ok(None);
        }
        if self.read_reg(REG_STATUS)? & ZYX_DATA_AVAILABLE == 0 {
            return Ok(None);
        }

        let mut raw = [0u8; 6];
        self.i2c
            .write_read(self.address, &[REG_OUT_X_L | AUTO_INCREMENT], &mut raw)
            .map_err(|e| {
                warn!("lis3dh: output read failed: {:?}", e.kind());
                SensorError::BusFault
            })?;

        Ok(Some(AccelSample {
            x: counts_to_ms2(raw[0], raw[1], self.scale),
            y: counts_to_ms2(raw[2], raw[3], self.scale),
            z: counts_to_ms2(raw[4], raw[5], self.scale),
        }))
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn read_reg(&mut self, reg: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(|e| {
                debug!("lis3dh: read 0x{:02x} failed: {:?}", reg, e.kind());
                SensorError::BusFault
            })?;
        Ok(buf[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c.write(self.address, &[reg, value]).map_err(|e| {
            warn!("lis3dh: write 0x{:02x} failed: {:?}", reg, e.kind());
            SensorError::BusFault
        })
    }
}
