//! LED output driver.
//!
//! Implements [`OutputDriver`] for the single status LED.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives `pins::LED_GPIO` as a push-pull GPIO output.
//! On host/test: tracks the level in-memory only.

use crate::app::ports::OutputDriver;
use crate::error::Result;
use crate::pins;

pub struct LedDriver {
    #[cfg(target_os = "espidf")]
    pin: esp_idf_hal::gpio::PinDriver<
        'static,
        esp_idf_hal::gpio::AnyOutputPin,
        esp_idf_hal::gpio::Output,
    >,
    level_high: bool,
}

#[cfg(target_os = "espidf")]
impl LedDriver {
    /// Claim the LED pin and drive it low.
    pub fn new() -> Result<Self> {
        use esp_idf_hal::gpio::{AnyOutputPin, PinDriver};

        // SAFETY: LED_GPIO is owned by this driver alone; nothing else in
        // the firmware constructs a driver for it.
        let pin = unsafe { AnyOutputPin::new(pins::LED_GPIO) };
        let mut pin =
            PinDriver::output(pin).map_err(|_| crate::error::Error::Init("LED pin driver"))?;
        pin.set_low()
            .map_err(|_| crate::error::Error::Init("LED pin initial level"))?;

        Ok(Self {
            pin,
            level_high: false,
        })
    }
}

#[cfg(not(target_os = "espidf"))]
impl LedDriver {
    /// Simulation: no hardware, level starts low.
    pub fn new() -> Result<Self> {
        log::info!("LED(sim): GPIO{} tracked in-memory", pins::LED_GPIO);
        Ok(Self { level_high: false })
    }
}

impl LedDriver {
    fn write(&mut self, high: bool) {
        #[cfg(target_os = "espidf")]
        {
            let res = if high {
                self.pin.set_high()
            } else {
                self.pin.set_low()
            };
            if res.is_err() {
                log::warn!("LED pin write failed");
            }
        }
        self.level_high = high;
    }

    /// Last level driven onto the pin.
    pub fn is_high(&self) -> bool {
        self.level_high
    }
}

impl OutputDriver for LedDriver {
    fn set_high(&mut self) {
        self.write(true);
    }

    fn set_low(&mut self) {
        self.write(false);
    }
}
