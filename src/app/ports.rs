//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LedService (domain)
//! ```
//!
//! Driven adapters (GPIO output, cloud link, serial log) implement these
//! traits.  The [`LedService`](super::service::LedService) consumes them via
//! generics, so the domain core never touches hardware or the network
//! directly and the transition logic is testable with in-memory mocks.

// ───────────────────────────────────────────────────────────────
// Output driver (driven adapter: domain → GPIO)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the single digital output pin.
///
/// The service calls exactly one of these per successful transition, after
/// the in-memory state has been updated — the pin level always mirrors the
/// service state by the time control returns to the caller.
pub trait OutputDriver {
    /// Drive the pin high (LED on).
    fn set_high(&mut self);

    /// Drive the pin low (LED off).
    fn set_low(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event publisher (driven adapter: domain → cloud / logging)
// ───────────────────────────────────────────────────────────────

/// Outbound notification port.
///
/// Fire-and-forget from the domain's perspective: delivery, retry, and
/// visibility scoping belong to the platform runtime behind the adapter.
pub trait EventPublisher {
    /// Emit a named event with a string payload.
    fn publish(&mut self, name: &'static str, data: &str);
}
