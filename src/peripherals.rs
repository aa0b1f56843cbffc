//! Capability traits for the board peripherals the game talks to.
//!
//! The game core only ever calls these traits. Hardware bindings (OLED driver,
//! buzzer PWM, GPIO buttons) live in the firmware crate; the preview app and
//! the tests provide simulated ones.

use core::fmt::Write;

use embassy_time::{Duration, Instant};
use heapless::String;
use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::RingDriver;
use crate::color::Rgb;
use crate::input::Button;

/// Character display with a text cursor (SSD1306-style)
///
/// Calls only touch the display buffer until [`TextDisplay::present`].
pub trait TextDisplay {
    fn clear(&mut self);

    /// Set the font scale for subsequent prints
    fn set_text_size(&mut self, size: u8);

    fn set_cursor(&mut self, x: u8, y: u8);

    /// Print text at the cursor, advancing it
    fn print(&mut self, text: &str);

    /// Print a signed integer at the cursor
    fn print_int(&mut self, value: i32) {
        let mut text: String<12> = String::new();
        // 12 bytes fit every i32 including the sign
        let _ = write!(text, "{value}");
        self.print(&text);
    }

    /// Flush the buffer to the physical display
    fn present(&mut self);
}

/// Piezo buzzer
pub trait Buzzer {
    /// Start a square wave that stops by itself after `duration`. Does not block.
    fn tone(&mut self, frequency_hz: u32, duration: Duration);

    /// Silence the buzzer immediately
    fn no_tone(&mut self);
}

/// Debounce-free view of the four game buttons
pub trait ButtonInput {
    /// Returns true while the button is physically held down
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Monotonic time source
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Ring driver for any `smart-leds` writer (WS2812, SK6812, ...)
///
/// Write failures are dropped: a glitched frame is replaced by the next one.
pub struct SmartLedsRing<W> {
    writer: W,
}

impl<W> SmartLedsRing<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W> RingDriver for SmartLedsRing<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let result = self.writer.write(colors.iter().copied());
        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[SmartLedsRing.write] dropped frame of {} pixels", colors.len());
        }
        #[cfg(not(feature = "esp32-log"))]
        let _ = result;
    }
}
