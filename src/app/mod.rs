//! Application core — pure domain logic, zero I/O.
//!
//! Shake detection, colour cycling and the power-aware listener lifecycle.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
