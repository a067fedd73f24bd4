//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the shake detector, the colour cursor and the
//! listener lifecycle.  It is the single state-update function that both
//! input channels (lifecycle commands and sensor samples) feed into.  All
//! I/O flows through port traits passed in at call sites, so the whole
//! service runs against mock adapters in tests.
//!
//! ```text
//!  AccelerometerPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                        │          AppService          │
//!      DisplayPort ◀──── │ Detector · Palette · Lifecycle│
//!                        └──────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::events::Event;
use crate::palette::{Colour, ColourCycler};
use crate::power::{ListenState, ListenerLifecycle, SubscriptionChange};
use crate::sensors::AccelSample;
use crate::shake::{ShakeDetector, ShakeVerdict};

use super::commands::AppCommand;
use super::events::{AppEvent, StatusData};
use super::ports::{AccelerometerPort, DisplayPort, EventSink};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
#[derive(Default)]
pub struct AppService {
    detector: ShakeDetector,
    palette: ColourCycler,
    lifecycle: ListenerLifecycle,
    samples_seen: u64,
    shakes_accepted: u64,
    /// Above-threshold samples swallowed by the cooldown.
    shakes_suppressed: u64,
}

impl AppService {
    /// Construct the service.  Nothing is painted or probed until [`start`](Self::start).
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Paint the initial colour and probe the accelerometer.
    ///
    /// A missing sensor is not fatal: the view keeps its colour, a
    /// [`AppEvent::SensorUnavailable`] is emitted and later `Resume` /
    /// `ScreenOn` commands never try to subscribe.
    pub fn start(
        &mut self,
        hw: &mut (impl AccelerometerPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        let colour = self.palette.current();
        hw.set_background(colour);
        sink.emit(&AppEvent::Started(colour));
        info!("AppService started on {}", colour.name());

        if let Err(e) = hw.probe() {
            warn!("Accelerometer probe failed ({}), shake detection disabled", e);
            self.lifecycle.mark_unavailable();
            sink.emit(&AppEvent::SensorUnavailable(e));
        }
    }

    // ── Input channel 1: lifecycle commands ───────────────────

    /// Apply a foreground/background or screen power notification.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        hw: &mut (impl AccelerometerPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        if self.lifecycle.is_stopped() {
            debug!("Ignoring {:?} after shutdown", cmd);
            return;
        }

        match cmd {
            AppCommand::ScreenDimmed => hw.set_dimmed(true),
            AppCommand::ScreenOn => hw.set_dimmed(false),
            AppCommand::Resume | AppCommand::Pause | AppCommand::Shutdown => {}
        }

        if let Some(change) = self.lifecycle.apply(cmd) {
            self.apply_subscription(change, hw, sink);
        }
    }

    // ── Input channel 2: sensor samples ───────────────────────

    /// Feed one sample observed at `now_ms`.  Returns `true` if it was
    /// accepted as a shake (and the background changed).
    ///
    /// Samples that arrive while not listening are dropped untouched.
    pub fn on_sample(
        &mut self,
        sample: AccelSample,
        now_ms: u64,
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) -> bool {
        if !self.lifecycle.is_listening() {
            debug!("Sample while not listening, dropped");
            return false;
        }
        self.samples_seen += 1;

        match self.detector.check(&sample, now_ms) {
            ShakeVerdict::Accepted { force } => {
                let colour = self.palette.advance();
                display.set_background(colour);
                self.shakes_accepted += 1;
                info!("Shake ({:.2} g²) -> {}", force, colour.name());
                sink.emit(&AppEvent::ShakeAccepted {
                    force,
                    index: self.palette.index(),
                    colour,
                });
                true
            }
            ShakeVerdict::CoolingDown => {
                self.shakes_suppressed += 1;
                debug!("Shake suppressed by cooldown");
                false
            }
            ShakeVerdict::BelowThreshold => false,
        }
    }

    /// Read one pending sample from the accelerometer and process it.
    ///
    /// Read errors are logged and skipped; a flaky bus must not stop the loop.
    pub fn poll_sensor(
        &mut self,
        hw: &mut (impl AccelerometerPort + DisplayPort),
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> bool {
        if !self.lifecycle.is_listening() {
            return false;
        }
        match hw.read_sample() {
            Ok(Some(sample)) => self.on_sample(sample, now_ms, hw, sink),
            Ok(None) => false,
            Err(e) => {
                warn!("Accelerometer read failed: {}", e);
                false
            }
        }
    }

    /// Route one queued [`Event`].  Returns `true` if a shake was accepted.
    pub fn dispatch(
        &mut self,
        event: Event,
        hw: &mut (impl AccelerometerPort + DisplayPort),
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> bool {
        match event {
            Event::Lifecycle(cmd) => {
                self.handle_command(cmd, hw, sink);
                false
            }
            Event::SampleTick => self.poll_sensor(hw, now_ms, sink),
            Event::StatusTick => {
                sink.emit(&AppEvent::Status(self.build_status()));
                false
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a status snapshot from the current state.
    pub fn build_status(&self) -> StatusData {
        StatusData {
            listening: self.lifecycle.is_listening(),
            foreground: self.lifecycle.is_foreground(),
            screen_on: self.lifecycle.is_screen_on(),
            sensor_available: self.lifecycle.is_sensor_available(),
            colour: self.palette.current(),
            colour_index: self.palette.index(),
            samples_seen: self.samples_seen,
            shakes_accepted: self.shakes_accepted,
            shakes_suppressed: self.shakes_suppressed,
        }
    }

    pub fn is_listening(&self) -> bool {
        self.lifecycle.is_listening()
    }

    pub fn listen_state(&self) -> ListenState {
        self.lifecycle.state()
    }

    pub fn colour(&self) -> Colour {
        self.palette.current()
    }

    pub fn colour_index(&self) -> usize {
        self.palette.index()
    }

    pub fn shakes_accepted(&self) -> u64 {
        self.shakes_accepted
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply_subscription(
        &mut self,
        change: SubscriptionChange,
        hw: &mut impl AccelerometerPort,
        sink: &mut impl EventSink,
    ) {
        let enable = change == SubscriptionChange::Subscribe;
        match hw.set_enabled(enable) {
            Ok(()) => {
                info!(
                    "Accelerometer {}",
                    if enable { "subscribed" } else { "unsubscribed" }
                );
                sink.emit(&AppEvent::ListeningChanged(enable));
            }
            Err(e) => {
                warn!("Accelerometer set_enabled({}) failed: {}", enable, e);
                self.lifecycle.mark_unavailable();
                sink.emit(&AppEvent::SensorUnavailable(e));
            }
        }
    }
}
