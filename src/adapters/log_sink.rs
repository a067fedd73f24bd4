//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (ESP-IDF logger → UART / USB-CDC in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(colour) => {
                info!("START | colour={}", colour.name());
            }
            AppEvent::ShakeAccepted {
                force,
                index,
                colour,
            } => {
                info!(
                    "SHAKE | force={:.2}g\u{00b2} | colour[{}]={}",
                    force,
                    index,
                    colour.name()
                );
            }
            AppEvent::ListeningChanged(on) => {
                info!("LISTEN | {}", if *on { "on" } else { "off" });
            }
            AppEvent::SensorUnavailable(e) => {
                warn!("SENSOR | {} | shake detection disabled", e);
            }
            AppEvent::Status(status) => match serde_json::to_string(status) {
                Ok(json) => info!("STATUS | {}", json),
                Err(e) => warn!("STATUS | unserialisable: {}", e),
            },
        }
    }
}
