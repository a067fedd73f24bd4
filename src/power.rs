//! Power-aware listener lifecycle.
//!
//! The accelerometer is only subscribed while **both** hold:
//!
//! - the view is in the foreground, and
//! - the screen is on.
//!
//! Each trigger flips its own flag; the subscription is their conjunction
//! (and is forced off once the sensor is known to be missing or the
//! service has shut down).  [`ListenerLifecycle::apply`] reports a change
//! only when that conjunction flips, so repeated or racing triggers
//! (screen dims while already backgrounded, a second `Resume`, ...) never
//! reach the hardware twice.
//!
//! ```text
//!            Resume / ScreenOn               Pause / ScreenDimmed
//!  Idle ───────────────────────▶ Listening ─────────────────────▶ Idle
//!   (needs the other flag too)
//! ```

use log::debug;

use crate::app::commands::AppCommand;

/// What the caller must do to the sensor subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionChange {
    Subscribe,
    Unsubscribe,
}

/// Coarse lifecycle state, mainly for status reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenState {
    /// Subscribed to sensor updates.
    Listening,
    /// Backgrounded (screen state irrelevant).
    Background,
    /// Foregrounded but the screen is off.
    ScreenOff,
    /// No sensor; listening is disabled for good.
    Unavailable,
    /// Shut down; commands are ignored.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct ListenerLifecycle {
    foreground: bool,
    screen_on: bool,
    sensor_available: bool,
    stopped: bool,
    listening: bool,
}

impl Default for ListenerLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerLifecycle {
    /// Boot state: screen on, not yet foregrounded, not listening.
    pub fn new() -> Self {
        Self {
            foreground: false,
            screen_on: true,
            sensor_available: true,
            stopped: false,
            listening: false,
        }
    }

    /// Apply one trigger.  Returns the subscription change it causes, if any.
    pub fn apply(&mut self, cmd: AppCommand) -> Option<SubscriptionChange> {
        if self.stopped {
            debug!("lifecycle: {:?} ignored after shutdown", cmd);
            return None;
        }

        match cmd {
            AppCommand::Resume => self.foreground = true,
            AppCommand::Pause => self.foreground = false,
            AppCommand::ScreenOn => self.screen_on = true,
            AppCommand::ScreenDimmed => self.screen_on = false,
            AppCommand::Shutdown => {
                self.foreground = false;
                self.stopped = true;
            }
        }

        self.reconcile()
    }

    /// The sensor is gone; stop listening and never resubscribe.
    pub fn mark_unavailable(&mut self) -> Option<SubscriptionChange> {
        self.sensor_available = false;
        self.reconcile()
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn is_foreground(&self) -> bool {
        self.foreground
    }

    pub fn is_screen_on(&self) -> bool {
        self.screen_on
    }

    pub fn is_sensor_available(&self) -> bool {
        self.sensor_available
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn state(&self) -> ListenState {
        if self.stopped {
            ListenState::Stopped
        } else if !self.sensor_available {
            ListenState::Unavailable
        } else if self.listening {
            ListenState::Listening
        } else if !self.foreground {
            ListenState::Background
        } else {
            ListenState::ScreenOff
        }
    }

    fn reconcile(&mut self) -> Option<SubscriptionChange> {
        let want = self.foreground && self.screen_on && self.sensor_available && !self.stopped;
        if want == self.listening {
            debug!("lifecycle: no change (listening={})", self.listening);
            return None;
        }
        self.listening = want;
        Some(if want {
            SubscriptionChange::Subscribe
        } else {
            SubscriptionChange::Unsubscribe
        })
    }
}
