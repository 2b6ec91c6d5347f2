//! Inbound commands to the application service.
//!
//! The device exposes exactly one remote function.  Its free-text argument
//! is normalized (surrounding whitespace trimmed, ASCII case folded) and
//! matched against the three recognized tokens; everything else is rejected
//! at the parse boundary before any state is touched.

/// Name under which the remote function is registered with the platform.
pub const SET_LED_FUNCTION: &str = "setLED";

/// Recognized LED commands, after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    /// Force the LED on.
    On,
    /// Force the LED off.
    Off,
    /// Invert the current state.
    Toggle,
}

impl LedCommand {
    /// Parse a raw remote argument.
    ///
    /// Matching is case-insensitive and ignores leading/trailing whitespace.
    /// Returns `None` for anything that does not normalize to one of the
    /// three tokens.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.eq_ignore_ascii_case("ON") {
            Some(Self::On)
        } else if token.eq_ignore_ascii_case("OFF") {
            Some(Self::Off)
        } else if token.eq_ignore_ascii_case("TOGGLE") {
            Some(Self::Toggle)
        } else {
            None
        }
    }
}
