//! ShakeColour firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod palette;
pub mod pins;
pub mod power;
pub mod screen;
pub mod shake;

pub mod adapters;
pub mod drivers;
pub mod sensors;
