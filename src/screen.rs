//! Screen power source.
//!
//! On this board nothing else tells us when the screen dims, so the
//! firmware keeps its own inactivity timer and produces the same two
//! notifications a phone platform would broadcast.  The monitor is pure:
//! the main loop feeds it time and activity, and forwards whatever it
//! returns as [`AppCommand`]s.

use log::info;

use crate::app::commands::AppCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    On,
    Dimmed,
}

impl ScreenTransition {
    /// The lifecycle command this transition is announced as.
    pub fn command(self) -> AppCommand {
        match self {
            Self::On => AppCommand::ScreenOn,
            Self::Dimmed => AppCommand::ScreenDimmed,
        }
    }
}

pub struct ScreenPowerMonitor {
    timeout_ms: u64,
    last_activity_ms: u64,
    on: bool,
}

impl ScreenPowerMonitor {
    /// Screen starts on, with the inactivity timer running from `now_ms`.
    pub fn new(timeout_ms: u64, now_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_activity_ms: now_ms,
            on: true,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Call every loop.  Dims once the timeout has elapsed without activity.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScreenTransition> {
        if self.on && now_ms.saturating_sub(self.last_activity_ms) >= self.timeout_ms {
            self.on = false;
            info!("screen: dimmed after {} ms idle", self.timeout_ms);
            return Some(ScreenTransition::Dimmed);
        }
        None
    }

    /// User woke the device (button).  Turns the screen on if it was off.
    pub fn wake(&mut self, now_ms: u64) -> Option<ScreenTransition> {
        self.last_activity_ms = now_ms;
        if self.on {
            return None;
        }
        self.on = true;
        info!("screen: on");
        Some(ScreenTransition::On)
    }

    /// Activity that keeps an already-lit screen awake (an accepted shake).
    /// Does not turn a dimmed screen back on.
    pub fn touch(&mut self, now_ms: u64) {
        if self.on {
            self.last_activity_ms = now_ms;
        }
    }
}
