//! LampLink Firmware — Main Entry Point
//!
//! One remote function, one LED, one notification event.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  CloudLink          LedDriver        LogPublisher          │
//! │  (platform bridge)  (OutputDriver)   (EventPublisher)      │
//! │                                                            │
//! │  ──────────────── Port Trait Boundary ────────────────     │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────┐      │
//! │  │            LedService (pure logic)               │      │
//! │  │       normalize · transition · announce          │      │
//! │  └──────────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod pins;

pub mod app;
mod adapters;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::cloud::CloudLink;
use adapters::device_id;
use adapters::led::LedDriver;
use app::service::LedService;
use config::SystemConfig;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("LampLink v{}", env!("CARGO_PKG_VERSION"));

    // Compiled-in defaults — nothing is persisted across reboots.
    let config = SystemConfig::default();

    // ── 2. Device identity ────────────────────────────────────
    // Scopes every cloud topic to this unit.
    let mac = device_id::read_mac();
    let dev_id = device_id::device_id(&mac);
    info!("Device ID: {}", dev_id);

    // ── 3. LED output pin ─────────────────────────────────────
    let mut led = LedDriver::new()?;

    // ── 4. Platform bridge ────────────────────────────────────
    // Registers the remote function and carries `led_state` outward.
    let mut cloud = CloudLink::connect(&config, &dev_id)?;

    // ── 5. Command handler ────────────────────────────────────
    // Drives the pin to its initial level and announces OFF.
    let mut service = LedService::new();
    service.start(&mut led, &mut cloud);

    info!("System ready. Entering idle loop.");

    // ── 6. Idle loop ──────────────────────────────────────────
    // No continuous work; the loop only dispatches remote invocations,
    // one at a time, and keeps the process alive between them.
    loop {
        while let Some(invocation) = cloud.poll() {
            let code = service.handle_set_led(invocation.arg.as_str(), &mut led, &mut cloud);
            cloud.respond(code);
        }

        std::thread::sleep(std::time::Duration::from_millis(
            config.idle_loop_interval_ms as u64,
        ));
    }
}
