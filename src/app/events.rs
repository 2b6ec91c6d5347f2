//! Outbound application events.
//!
//! The [`LedService`](super::service::LedService) emits these through the
//! [`EventPublisher`](super::ports::EventPublisher) port.  Adapters on the
//! other side decide what to do with them — log to serial, publish to the
//! cloud, etc.  On the wire every event collapses to a (name, payload) pair.

/// Event name for LED state notifications.  Device-scoped (non-public):
/// adapters publish it only under the device's own topic namespace.
pub const LED_STATE_EVENT: &str = "led_state";

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service finished startup (carries the initial LED state).
    Started { led_on: bool },

    /// The LED changed state in response to a remote command.
    LedChanged { led_on: bool },
}

impl AppEvent {
    /// Wire-level event name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } | Self::LedChanged { .. } => LED_STATE_EVENT,
        }
    }

    /// Wire-level payload: literal `"ON"` or `"OFF"`.
    pub fn payload(&self) -> &'static str {
        match self {
            Self::Started { led_on } | Self::LedChanged { led_on } => state_payload(*led_on),
        }
    }
}

/// Map a boolean LED state to its wire payload.
pub fn state_payload(led_on: bool) -> &'static str {
    if led_on { "ON" } else { "OFF" }
}
