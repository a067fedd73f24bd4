//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (accelerometer, display, event sinks) implement these
//! traits.  The [`AppService`](super::service::AppService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::SensorError;
use crate::palette::Colour;
use crate::sensors::AccelSample;

// ───────────────────────────────────────────────────────────────
// Accelerometer port (driven adapter: hardware ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Subscription-style access to the accelerometer.
pub trait AccelerometerPort {
    /// Check the sensor exists.  Called once at start-up; an error means the
    /// shake feature is disabled for this session.
    fn probe(&mut self) -> Result<(), SensorError>;

    /// Subscribe (`true`) or unsubscribe (`false`).
    ///
    /// Must be idempotent: repeating the current setting is not an error.
    fn set_enabled(&mut self, enabled: bool) -> Result<(), SensorError>;

    /// Next pending sample, or `None` if nothing new arrived.
    fn read_sample(&mut self) -> Result<Option<AccelSample>, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The single visible element whose background colour we drive.
pub trait DisplayPort {
    /// Paint the background.
    fn set_background(&mut self, colour: Colour);

    /// Lower (`true`) or restore (`false`) brightness with the screen state.
    fn set_dimmed(&mut self, dimmed: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
