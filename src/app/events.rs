//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use serde::Serialize;

use crate::error::SensorError;
use crate::palette::Colour;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started and painted its initial colour.
    Started(Colour),

    /// A shake was accepted and the background moved to `colour`.
    ShakeAccepted {
        force: f32,
        index: usize,
        colour: Colour,
    },

    /// Accelerometer subscription was turned on or off.
    ListeningChanged(bool),

    /// The accelerometer is missing or failed; shake detection is off.
    SensorUnavailable(SensorError),

    /// Periodic status snapshot.
    Status(StatusData),
}

/// A point-in-time status snapshot suitable for logging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusData {
    pub listening: bool,
    pub foreground: bool,
    pub screen_on: bool,
    pub sensor_available: bool,
    pub colour: Colour,
    pub colour_index: usize,
    pub samples_seen: u64,
    pub shakes_accepted: u64,
    pub shakes_suppressed: u64,
}
