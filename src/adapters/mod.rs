//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements          | Connects to                 |
//! |------------|---------------------|-----------------------------|
//! | `hardware` | AccelerometerPort   | LIS3DH over I²C             |
//! |            | DisplayPort         | RGB backlight (LEDC PWM)    |
//! | `log_sink` | EventSink           | Serial log output           |
//! | `time`     | —                   | ESP32 system timer          |

pub mod hardware;
pub mod log_sink;
pub mod time;
