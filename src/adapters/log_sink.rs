//! Log-based event publisher adapter.
//!
//! Implements [`EventPublisher`] by writing every event to the `log` facade
//! (UART / USB-CDC in production).  Used as the observer of record when the
//! cloud link is unavailable, and by sim builds.

use log::info;

use crate::app::ports::EventPublisher;

/// Adapter that logs every published event to the serial console.
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&mut self, name: &'static str, data: &str) {
        info!("EVENT | {} = {}", name, data);
    }
}
