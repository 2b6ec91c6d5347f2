//! GPIO pin assignments for the LampLink board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output driving the LED (onboard LED on the ESP32-C3 devkit).
/// HIGH = on, LOW = off.
pub const LED_GPIO: i32 = 8;
