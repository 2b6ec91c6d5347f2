//! Application service — the domain core.
//!
//! [`LedService`] owns the LED state boolean and implements the remote
//! command handler.  All I/O flows through port traits injected at call
//! sites, making the whole service testable without hardware or
//! connectivity.
//!
//! ```text
//!                  ┌────────────────────────┐
//!   raw argument ─▶│       LedService        │──▶ EventPublisher
//!                  │  normalize · transition │
//!  OutputDriver ◀──│                         │
//!                  └────────────────────────┘
//! ```

use log::{info, warn};

use super::commands::{LedCommand, SET_LED_FUNCTION};
use super::events::{AppEvent, state_payload};
use super::ports::{EventPublisher, OutputDriver};

/// Return code surfaced to the remote invoker on success.
pub const RESULT_OK: i32 = 1;

/// Return code surfaced to the remote invoker for an invalid argument.
pub const RESULT_INVALID_ARG: i32 = -1;

// ───────────────────────────────────────────────────────────────
// LedService
// ───────────────────────────────────────────────────────────────

/// Owns the LED state and applies remote commands to it.
pub struct LedService {
    led_on: bool,
}

impl LedService {
    /// Construct the service with the LED considered off.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next.
    pub fn new() -> Self {
        Self { led_on: false }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive the pin to the initial `off` level and announce the state.
    ///
    /// Emits one `led_state` event with payload `"OFF"` so observers see
    /// the state the device booted into.
    pub fn start(&mut self, out: &mut impl OutputDriver, events: &mut impl EventPublisher) {
        self.led_on = false;
        out.set_low();
        let ev = AppEvent::Started { led_on: self.led_on };
        events.publish(ev.name(), ev.payload());
        info!(
            "Setup complete. Remote function '{}' ready. LED initialized OFF.",
            SET_LED_FUNCTION
        );
    }

    // ── Command handling ──────────────────────────────────────

    /// Handle one `setLED` invocation.
    ///
    /// Recognized arguments transition the state, drive the pin, and emit a
    /// `led_state` event — strictly in that order.  Anything else is
    /// rejected with no side effects.
    pub fn handle_set_led(
        &mut self,
        raw: &str,
        out: &mut impl OutputDriver,
        events: &mut impl EventPublisher,
    ) -> i32 {
        let Some(cmd) = LedCommand::parse(raw) else {
            warn!(
                "Invalid {} argument: {:?} (expected ON|OFF|TOGGLE)",
                SET_LED_FUNCTION, raw
            );
            return RESULT_INVALID_ARG;
        };

        self.led_on = next_state(self.led_on, cmd);
        if self.led_on {
            out.set_high();
        } else {
            out.set_low();
        }
        info!("LED state changed: {}", state_payload(self.led_on));

        let ev = AppEvent::LedChanged { led_on: self.led_on };
        events.publish(ev.name(), ev.payload());
        RESULT_OK
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current in-memory LED state.
    pub fn is_on(&self) -> bool {
        self.led_on
    }
}

impl Default for LedService {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────────────────────────────────────────────
// Pure transition logic
// ───────────────────────────────────────────────────────────────

/// Total transition function from (current state, command) to new state.
pub fn next_state(current: bool, cmd: LedCommand) -> bool {
    match cmd {
        LedCommand::On => true,
        LedCommand::Off => false,
        LedCommand::Toggle => !current,
    }
}
