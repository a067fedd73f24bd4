//! Fuzz target: `AppService` event sequences
//!
//! Decodes the input into an interleaving of lifecycle commands and
//! accelerometer samples and checks after every step:
//! - No panics under arbitrary byte inputs
//! - The sensor is subscribed exactly while the service reports listening
//! - Listening implies foreground and screen on
//! - The colour index equals accepted shakes mod 6
//!
//! cargo fuzz run fuzz_event_sequence

#![no_main]

use libfuzzer_sys::fuzz_target;
use shakecolour::app::commands::AppCommand;
use shakecolour::app::events::AppEvent;
use shakecolour::app::ports::{AccelerometerPort, DisplayPort, EventSink};
use shakecolour::app::service::AppService;
use shakecolour::error::SensorError;
use shakecolour::events::Event;
use shakecolour::palette::Colour;
use shakecolour::sensors::AccelSample;

// ── In-memory hardware for fuzz testing ───────────────────────

struct FuzzHw {
    enabled: bool,
    pending: Option<AccelSample>,
    background: Option<Colour>,
}

impl AccelerometerPort for FuzzHw {
    fn probe(&mut self) -> Result<(), SensorError> {
        Ok(())
    }

    fn set_enabled(&mut self, enabled: bool) -> Result<(), SensorError> {
        self.enabled = enabled;
        Ok(())
    }

    fn read_sample(&mut self) -> Result<Option<AccelSample>, SensorError> {
        Ok(self.pending.take())
    }
}

impl DisplayPort for FuzzHw {
    fn set_background(&mut self, colour: Colour) {
        self.background = Some(colour);
    }

    fn set_dimmed(&mut self, _dimmed: bool) {}
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

// ── Fuzz target ───────────────────────────────────────────────

fuzz_target!(|data: &[u8]| {
    let mut app = AppService::new();
    let mut hw = FuzzHw {
        enabled: false,
        pending: None,
        background: None,
    };
    let mut sink = NullSink;
    app.start(&mut hw, &mut sink);

    let mut now_ms: u64 = 0;
    let mut accepted: usize = 0;

    for pair in data.chunks(2) {
        let op = pair[0];
        let arg = pair.get(1).copied().unwrap_or(0);

        let event = match op % 8 {
            0 => Event::Lifecycle(AppCommand::Resume),
            1 => Event::Lifecycle(AppCommand::Pause),
            2 => Event::Lifecycle(AppCommand::ScreenOn),
            3 => Event::Lifecycle(AppCommand::ScreenDimmed),
            // Keep shutdown rare so most inputs explore the live states.
            4 if op == 4 => Event::Lifecycle(AppCommand::Shutdown),
            7 => Event::StatusTick,
            _ => {
                // Signed axis value up to ±31.75 m/s², time step up to 1020 ms.
                let axis = f32::from(arg as i8) / 4.0;
                hw.pending = Some(AccelSample::new(axis, f32::from(op >> 3), 9.8));
                now_ms += u64::from(arg) * 4;
                Event::SampleTick
            }
        };

        if app.dispatch(event, &mut hw, now_ms, &mut sink) {
            accepted += 1;
        }

        assert_eq!(hw.enabled, app.is_listening(), "subscription out of sync");
        let status = app.build_status();
        if status.listening {
            assert!(status.foreground && status.screen_on, "listening without both conditions");
        }
        assert_eq!(app.colour_index(), accepted % Colour::ALL.len());
        if accepted > 0 {
            assert_eq!(hw.background, Some(app.colour()));
        }
    }
});
