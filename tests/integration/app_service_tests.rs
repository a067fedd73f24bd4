//! Integration tests for the sample → detector → palette → display pipeline.
//!
//! Samples are scripted into the mock accelerometer and pulled through
//! `AppService::dispatch(Event::SampleTick, ..)`, the same path the
//! firmware event loop uses.

use super::mock_hw::{HwCall, MockHardware, RecordingSink};

use shakecolour::app::commands::AppCommand;
use shakecolour::app::events::AppEvent;
use shakecolour::app::service::AppService;
use shakecolour::events::{Event, EventQueue};
use shakecolour::palette::Colour;
use shakecolour::power::ListenState;

/// Started and resumed, screen on: listening.
fn make_listening_app() -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    assert!(app.is_listening());
    (app, hw, sink)
}

fn tick(app: &mut AppService, hw: &mut MockHardware, sink: &mut RecordingSink, now_ms: u64) -> bool {
    app.dispatch(Event::SampleTick, hw, now_ms, sink)
}

// ── Start-up ──────────────────────────────────────────────────

#[test]
fn start_paints_blue_and_probes() {
    let mut app = AppService::new();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);

    assert_eq!(hw.calls, vec![HwCall::SetBackground(Colour::Blue), HwCall::Probe]);
    assert_eq!(sink.events, vec![AppEvent::Started(Colour::Blue)]);
    assert!(!app.is_listening(), "not listening before the first Resume");
}

// ── Detection ─────────────────────────────────────────────────

#[test]
fn resting_device_never_shakes() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    for i in 0..20 {
        hw.queue_sample(0.0, 0.0, 9.8);
        assert!(!tick(&mut app, &mut hw, &mut sink, i * 1000));
    }
    assert_eq!(app.colour(), Colour::Blue);
    assert_eq!(sink.shakes(), 0);
}

#[test]
fn jolt_moves_blue_to_green() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    hw.queue_sample(20.0, 0.0, 0.0);

    assert!(tick(&mut app, &mut hw, &mut sink, 1_000));
    assert_eq!(app.colour(), Colour::Green);
    assert_eq!(hw.background(), Some(Colour::Green));

    let Some(AppEvent::ShakeAccepted { force, index, colour }) = sink.events.last().cloned() else {
        panic!("expected ShakeAccepted, got {:?}", sink.events.last());
    };
    assert!(force > 4.0 && force < 4.3, "force = {}", force);
    assert_eq!(index, 1);
    assert_eq!(colour, Colour::Green);
}

#[test]
fn two_jolts_within_cooldown_advance_once() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    hw.queue_sample(20.0, 0.0, 0.0);
    hw.queue_sample(0.0, 20.0, 0.0);

    assert!(tick(&mut app, &mut hw, &mut sink, 1_000));
    assert!(!tick(&mut app, &mut hw, &mut sink, 1_100));

    assert_eq!(app.colour(), Colour::Green);
    assert_eq!(app.build_status().shakes_suppressed, 1);
}

#[test]
fn suppressed_jolt_does_not_extend_cooldown() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    for _ in 0..3 {
        hw.queue_sample(20.0, 0.0, 0.0);
    }

    assert!(tick(&mut app, &mut hw, &mut sink, 1_000));
    assert!(!tick(&mut app, &mut hw, &mut sink, 1_400));
    // 501 ms after the accepted shake, only 101 ms after the suppressed one.
    assert!(tick(&mut app, &mut hw, &mut sink, 1_501));
    assert_eq!(app.colour(), Colour::Red);
}

#[test]
fn exactly_cooldown_apart_is_still_suppressed() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    hw.queue_sample(20.0, 0.0, 0.0);
    hw.queue_sample(20.0, 0.0, 0.0);

    assert!(tick(&mut app, &mut hw, &mut sink, 2_000));
    assert!(!tick(&mut app, &mut hw, &mut sink, 2_500));
}

#[test]
fn six_shakes_wrap_back_to_blue() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    let expected = [
        Colour::Green,
        Colour::Red,
        Colour::Yellow,
        Colour::Cyan,
        Colour::Magenta,
        Colour::Blue,
    ];

    for (i, colour) in expected.iter().enumerate() {
        hw.queue_sample(-20.0, 5.0, 0.0);
        assert!(tick(&mut app, &mut hw, &mut sink, 1_000 + i as u64 * 600));
        assert_eq!(app.colour(), *colour);
    }
    assert_eq!(app.colour_index(), 0);
    assert_eq!(app.shakes_accepted(), 6);
}

// ── Power awareness ───────────────────────────────────────────

#[test]
fn dimmed_screen_stops_colour_changes() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    app.handle_command(AppCommand::ScreenDimmed, &mut hw, &mut sink);

    assert!(!app.is_listening());
    assert!(!hw.is_enabled());
    assert!(hw.calls.contains(&HwCall::SetDimmed(true)));

    hw.queue_sample(20.0, 0.0, 0.0);
    assert!(!tick(&mut app, &mut hw, &mut sink, 5_000));
    assert_eq!(app.colour(), Colour::Blue);

    app.handle_command(AppCommand::ScreenOn, &mut hw, &mut sink);
    assert!(app.is_listening());
    assert!(tick(&mut app, &mut hw, &mut sink, 6_000), "queued sample is read after resubscribe");
    assert_eq!(app.colour(), Colour::Green);
}

#[test]
fn missing_sensor_keeps_blue_and_never_subscribes() {
    let mut app = AppService::new();
    let mut hw = MockHardware::without_sensor();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);

    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    app.handle_command(AppCommand::ScreenOn, &mut hw, &mut sink);

    assert!(hw.subscription_calls().is_empty());
    assert_eq!(app.listen_state(), ListenState::Unavailable);
    assert_eq!(hw.background(), Some(Colour::Blue));
    assert!(sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::SensorUnavailable(_))));
}

#[test]
fn subscribe_failure_disables_feature() {
    let mut app = AppService::new();
    let mut hw = MockHardware::new();
    hw.bus_fault = true;
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);

    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);

    assert!(!app.is_listening());
    assert_eq!(app.listen_state(), ListenState::Unavailable);

    // A later bus recovery does not bring listening back this session.
    hw.bus_fault = false;
    app.handle_command(AppCommand::Pause, &mut hw, &mut sink);
    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    assert!(hw.subscription_calls().is_empty());
}

#[test]
fn shutdown_unsubscribes_and_ignores_later_commands() {
    let (mut app, mut hw, mut sink) = make_listening_app();
    hw.clear();

    app.handle_command(AppCommand::Shutdown, &mut hw, &mut sink);
    assert_eq!(hw.subscription_calls(), vec![HwCall::Unsubscribe]);
    assert_eq!(app.listen_state(), ListenState::Stopped);

    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    app.handle_command(AppCommand::ScreenDimmed, &mut hw, &mut sink);
    assert_eq!(hw.calls, vec![HwCall::Unsubscribe], "no port calls after shutdown");
}

// ── Event queue path ──────────────────────────────────────────

#[test]
fn queued_events_drive_the_service() {
    let mut app = AppService::new();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);

    hw.queue_sample(20.0, 0.0, 0.0);
    let mut queue = EventQueue::new();
    assert!(queue.push(Event::Lifecycle(AppCommand::Resume)));
    assert!(queue.push(Event::SampleTick));
    assert!(queue.push(Event::StatusTick));

    let mut accepted = 0;
    queue.drain(|event| {
        if app.dispatch(event, &mut hw, 1_000, &mut sink) {
            accepted += 1;
        }
    });

    assert_eq!(accepted, 1);
    assert!(queue.is_empty());
    let Some(AppEvent::Status(status)) = sink.events.last() else {
        panic!("expected a trailing status event");
    };
    assert!(status.listening);
    assert_eq!(status.colour, Colour::Green);
    assert_eq!(status.shakes_accepted, 1);
}
