//! Integration tests for the foreground / screen-power subscription rules.
//!
//! The accelerometer must be subscribed exactly while the view is in the
//! foreground *and* the screen is on, and each flip must reach the
//! hardware once.

use super::mock_hw::{HwCall, MockHardware, RecordingSink};

use shakecolour::app::commands::AppCommand;
use shakecolour::app::service::AppService;
use shakecolour::events::Event;
use shakecolour::power::ListenState;
use shakecolour::screen::{ScreenPowerMonitor, ScreenTransition};

fn make_app() -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new();
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    hw.clear();
    (app, hw, sink)
}

#[test]
fn repeated_resume_subscribes_once() {
    let (mut app, mut hw, mut sink) = make_app();
    for _ in 0..3 {
        app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    }
    assert_eq!(hw.subscription_calls(), vec![HwCall::Subscribe]);
    assert_eq!(sink.listening_changes(), vec![true]);
}

#[test]
fn dim_then_pause_unsubscribes_once() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    app.handle_command(AppCommand::ScreenDimmed, &mut hw, &mut sink);
    app.handle_command(AppCommand::Pause, &mut hw, &mut sink);
    app.handle_command(AppCommand::ScreenDimmed, &mut hw, &mut sink);

    assert_eq!(
        hw.subscription_calls(),
        vec![HwCall::Subscribe, HwCall::Unsubscribe]
    );
    assert_eq!(app.listen_state(), ListenState::Background);
}

#[test]
fn screen_on_while_backgrounded_does_not_subscribe() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    app.handle_command(AppCommand::Pause, &mut hw, &mut sink);
    app.handle_command(AppCommand::ScreenDimmed, &mut hw, &mut sink);
    app.handle_command(AppCommand::ScreenOn, &mut hw, &mut sink);

    assert!(!app.is_listening());
    assert!(!hw.is_enabled());
    assert_eq!(
        hw.subscription_calls(),
        vec![HwCall::Subscribe, HwCall::Unsubscribe]
    );
}

#[test]
fn resume_while_dimmed_waits_for_screen() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::ScreenDimmed, &mut hw, &mut sink);
    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);
    assert_eq!(app.listen_state(), ListenState::ScreenOff);
    assert!(hw.subscription_calls().is_empty());

    app.handle_command(AppCommand::ScreenOn, &mut hw, &mut sink);
    assert_eq!(app.listen_state(), ListenState::Listening);
    assert_eq!(hw.subscription_calls(), vec![HwCall::Subscribe]);
}

#[test]
fn screen_commands_drive_backlight_brightness() {
    let (mut app, mut hw, mut sink) = make_app();
    app.handle_command(AppCommand::ScreenDimmed, &mut hw, &mut sink);
    app.handle_command(AppCommand::ScreenOn, &mut hw, &mut sink);
    assert_eq!(
        hw.calls,
        vec![HwCall::SetDimmed(true), HwCall::SetDimmed(false)]
    );
}

#[test]
fn screen_monitor_timeout_pauses_listening() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut screen = ScreenPowerMonitor::new(15_000, 0);
    app.dispatch(Event::Lifecycle(AppCommand::Resume), &mut hw, 0, &mut sink);
    assert!(app.is_listening());

    assert_eq!(screen.tick(14_999), None);
    let Some(transition) = screen.tick(15_000) else {
        panic!("screen should dim at the timeout");
    };
    assert_eq!(transition, ScreenTransition::Dimmed);
    app.dispatch(Event::Lifecycle(transition.command()), &mut hw, 15_000, &mut sink);
    assert!(!app.is_listening());

    let Some(woken) = screen.wake(20_000) else {
        panic!("wake should light a dimmed screen");
    };
    app.dispatch(Event::Lifecycle(woken.command()), &mut hw, 20_000, &mut sink);
    assert!(app.is_listening());
    assert_eq!(sink.listening_changes(), vec![true, false, true]);
}

#[test]
fn shake_activity_postpones_dimming() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut screen = ScreenPowerMonitor::new(15_000, 0);
    app.handle_command(AppCommand::Resume, &mut hw, &mut sink);

    hw.queue_sample(20.0, 0.0, 0.0);
    if app.dispatch(Event::SampleTick, &mut hw, 10_000, &mut sink) {
        screen.touch(10_000);
    }

    assert_eq!(screen.tick(15_000), None, "accepted shake counts as activity");
    assert_eq!(screen.tick(25_000), Some(ScreenTransition::Dimmed));
}
