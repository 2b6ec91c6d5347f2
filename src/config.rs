//! System configuration parameters
//!
//! All tunable parameters for the LampLink firmware.  Values are compiled-in
//! defaults — the device carries no persistent settings across reboots.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Cloud link ---
    /// Broker endpoint the platform bridge connects to.
    pub mqtt_broker_url: heapless::String<96>,
    /// Label used as the first topic segment (account namespace).
    pub device_label: heapless::String<24>,

    // --- Timing ---
    /// Idle loop poll interval (milliseconds).
    pub idle_loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mqtt_broker_url: literal("mqtt://broker.local:1883"),
            device_label: literal("lamplink"),
            idle_loop_interval_ms: 50,
        }
    }
}

/// Build a fixed-capacity string from a literal that is known to fit.
fn literal<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    debug_assert!(s.len() <= N);
    let _ = out.push_str(s);
    out
}
