//! Input event queue.
//!
//! Events are produced by:
//! - the screen power monitor (screen on / dimmed)
//! - the wake button (foreground / background)
//! - the loop timer (sensor poll, status report)
//!
//! and consumed by the main loop, which hands them one at a time, in FIFO
//! order, to [`AppService::dispatch`](crate::app::service::AppService::dispatch).
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Screen timer │────▶│              │     │              │
//! │ Wake button  │────▶│  EventQueue  │────▶│  AppService  │
//! │ Loop timer   │────▶│  (owned)     │     │  dispatch()  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The queue is an owned value living in `main`, not a static: every
//! producer runs on the main loop, so nothing needs to reach it from an
//! interrupt.

use heapless::Deque;
use log::warn;

use crate::app::commands::AppCommand;

/// Maximum number of pending events.
pub const EVENT_QUEUE_CAP: usize = 16;

/// The two input channels plus housekeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Foreground/background or screen power notification.
    Lifecycle(AppCommand),
    /// Time to poll the accelerometer for a new sample.
    SampleTick,
    /// Status report timer fired.
    StatusTick,
}

#[derive(Default)]
pub struct EventQueue {
    queue: Deque<Event, EVENT_QUEUE_CAP>,
    dropped: u32,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&mut self, event: Event) -> bool {
        match self.queue.push_back(event) {
            Ok(()) => true,
            Err(lost) => {
                self.dropped = self.dropped.saturating_add(1);
                warn!("event queue full, dropped {:?}", lost);
                false
            }
        }
    }

    /// Dequeue the oldest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    /// Drain all pending events into a callback, oldest first.
    pub fn drain(&mut self, mut handler: impl FnMut(Event)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Events lost to overflow since boot.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
