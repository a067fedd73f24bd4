//! Mock hardware adapter for integration tests.
//!
//! Records every port call so tests can assert on the full history
//! without an accelerometer or an LED attached.

use std::collections::VecDeque;

use shakecolour::app::events::AppEvent;
use shakecolour::app::ports::{AccelerometerPort, DisplayPort, EventSink};
use shakecolour::error::SensorError;
use shakecolour::palette::Colour;
use shakecolour::sensors::AccelSample;

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    Probe,
    Subscribe,
    Unsubscribe,
    SetBackground(Colour),
    SetDimmed(bool),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<HwCall>,
    /// Samples handed out one per `read_sample`.
    pub script: VecDeque<AccelSample>,
    /// Simulate a device with no accelerometer fitted.
    pub missing: bool,
    /// Make every `set_enabled` fail with a bus fault.
    pub bus_fault: bool,
    enabled: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            script: VecDeque::new(),
            missing: false,
            bus_fault: false,
            enabled: false,
        }
    }

    pub fn without_sensor() -> Self {
        Self {
            missing: true,
            ..Self::new()
        }
    }

    pub fn queue_sample(&mut self, x: f32, y: f32, z: f32) {
        self.script.push_back(AccelSample::new(x, y, z));
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn background(&self) -> Option<Colour> {
        self.calls.iter().rev().find_map(|c| match c {
            HwCall::SetBackground(colour) => Some(*colour),
            _ => None,
        })
    }

    pub fn subscription_calls(&self) -> Vec<HwCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, HwCall::Subscribe | HwCall::Unsubscribe))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelerometerPort for MockHardware {
    fn probe(&mut self) -> Result<(), SensorError> {
        self.calls.push(HwCall::Probe);
        if self.missing {
            Err(SensorError::Unavailable)
        } else {
            Ok(())
        }
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), SensorError> {
        if self.bus_fault {
            return Err(SensorError::BusFault);
        }
        self.calls.push(if enabled {
            HwCall::Subscribe
        } else {
            HwCall::Unsubscribe
        });
        self.enabled = enabled;
        Ok(())
    }

    fn read_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
        if !self.enabled {
            return Ok(None);
        }
        Ok(self.script.pop_front())
    }
}

impl DisplayPort for MockHardware {
    fn set_background(&mut self, colour: Colour) {
        self.calls.push(HwCall::SetBackground(colour));
    }

    fn set_dimmed(&mut self, dimmed: bool) {
        self.calls.push(HwCall::SetDimmed(dimmed));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// Event sink that keeps every emitted event.
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn shakes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ShakeAccepted { .. }))
            .count()
    }

    pub fn listening_changes(&self) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ListeningChanged(on) => Some(*on),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
