//! Inbound lifecycle commands to the application service.
//!
//! These are the platform notifications that decide whether the
//! accelerometer should be listened to.  The screen pair comes from the
//! [`ScreenPowerMonitor`](crate::screen::ScreenPowerMonitor); the
//! foreground pair from boot, the wake button, and shutdown.

/// Commands that external sources can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// The view came to the foreground.
    Resume,

    /// The view went to the background.
    Pause,

    /// The screen turned on.
    ScreenOn,

    /// The screen dimmed; the device is about to sleep.
    ScreenDimmed,

    /// Tear down: stop listening and ignore every later command.
    Shutdown,
}
