//! ShakeColour Firmware — Main Entry Point
//!
//! Shake the board, the backlight steps to the next colour.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          LogEventSink       MonotonicClock    │
//! │  (Accelerometer+Display)  (EventSink)                          │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  ShakeDetector · ColourCycler · ListenerLifecycle      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  EventQueue ◀── ScreenPowerMonitor · ButtonDriver · loop timer │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::{info, warn};

use shakecolour::adapters::hardware::HardwareAdapter;
use shakecolour::adapters::log_sink::LogEventSink;
use shakecolour::adapters::time::MonotonicClock;
use shakecolour::app::commands::AppCommand;
use shakecolour::app::service::AppService;
use shakecolour::config::SystemConfig;
use shakecolour::drivers::button::{ButtonDriver, ButtonEvent};
use shakecolour::drivers::status_led::StatusLed;
use shakecolour::error::Error;
use shakecolour::events::{Event, EventQueue};
use shakecolour::pins;
use shakecolour::screen::ScreenPowerMonitor;
use shakecolour::sensors::accelerometer::{DataRate, FullScale, Lis3dh};

/// The baked-in JSON override if there is one, else defaults.
fn load_config() -> shakecolour::error::Result<SystemConfig> {
    match option_env!("SHAKECOLOUR_CONFIG") {
        Some(json) => {
            let cfg = SystemConfig::from_json(json)?;
            info!("Config: build-time override");
            Ok(cfg)
        }
        None => Ok(SystemConfig::default()),
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  ShakeColour v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    // Without the backlight there is nothing to show.
    shakecolour::drivers::hw_init::init_peripherals().map_err(Error::from)?;
    if let Err(e) = shakecolour::drivers::hw_init::init_isr_service() {
        log::error!("ISR service init failed: {}, continuing without wake button", e);
    }

    // ── 3. Config ─────────────────────────────────────────────
    let config = load_config().unwrap_or_else(|e| {
        warn!("Config override rejected ({}), using defaults", e);
        SystemConfig::default()
    });

    // ── 4. Construct adapters ─────────────────────────────────
    // The typed pins below must match the GPIO map.
    const _: () = assert!(pins::I2C_SDA_GPIO == 14 && pins::I2C_SCL_GPIO == 15);
    let peripherals = Peripherals::take()?;
    let i2c_config = I2cConfig::new().baudrate(Hertz(config.i2c_frequency_khz * 1000));
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14,
        peripherals.pins.gpio15,
        &i2c_config,
    )?;

    let accel = Lis3dh::new(
        i2c,
        config.i2c_address,
        config.data_rate().unwrap_or(DataRate::Hz25),
        config.full_scale().unwrap_or(FullScale::G8),
    );
    let mut hw = HardwareAdapter::new(accel, StatusLed::new());
    let mut log_sink = LogEventSink::new();
    let clock = MonotonicClock::new();

    let mut queue = EventQueue::new();
    let mut screen = ScreenPowerMonitor::new(config.screen_dim_timeout_ms(), clock.uptime_ms());
    let mut button = ButtonDriver::new();
    let mut foreground = true;

    // ── 5. Construct app service ──────────────────────────────
    let mut app = AppService::new();
    app.start(&mut hw, &mut log_sink);
    queue.push(Event::Lifecycle(AppCommand::Resume));

    info!("System ready. Entering event loop.");

    // ── 6. Event loop ─────────────────────────────────────────
    let status_every = config.status_every_loops();
    let mut status_counter: u64 = 0;

    loop {
        FreeRtos::delay_ms(config.loop_interval_ms);
        let now_ms = clock.uptime_ms();

        // Wake button: short press lights the screen, long press flips
        // foreground/background.
        if let Some(gesture) = button.tick(now_ms as u32) {
            if let Some(t) = screen.wake(now_ms) {
                queue.push(Event::Lifecycle(t.command()));
            }
            if gesture == ButtonEvent::LongPress {
                foreground = !foreground;
                info!("Button: long press → {}", if foreground { "foreground" } else { "background" });
                let cmd = if foreground { AppCommand::Resume } else { AppCommand::Pause };
                queue.push(Event::Lifecycle(cmd));
            }
        }

        if let Some(t) = screen.tick(now_ms) {
            queue.push(Event::Lifecycle(t.command()));
        }

        queue.push(Event::SampleTick);

        status_counter += 1;
        if status_counter >= status_every {
            queue.push(Event::StatusTick);
            status_counter = 0;
        }

        queue.drain(|event| {
            if app.dispatch(event, &mut hw, now_ms, &mut log_sink) {
                screen.touch(now_ms);
            }
        });
    }
}
