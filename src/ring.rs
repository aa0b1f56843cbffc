use crate::RingDriver;
use crate::color::{Rgb, color_of};

/// Number of addressable positions on the ring
pub const RING_SIZE: usize = 24;

const DARK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Light ring frame buffer bound to a driver
///
/// Mirrors the usual `NeoPixel` API: pixels are staged in the buffer and only
/// reach the hardware on [`Ring::show`].
pub struct Ring<D: RingDriver> {
    driver: D,
    frame: [Rgb; RING_SIZE],
}

impl<D: RingDriver> Ring<D> {
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            frame: [DARK; RING_SIZE],
        }
    }

    /// Turn every staged pixel off
    pub fn clear_all(&mut self) {
        self.frame = [DARK; RING_SIZE];
    }

    /// Stage a pixel color. Indices outside the ring are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    /// Push the staged frame to the hardware
    pub fn show(&mut self) {
        self.driver.write(&self.frame);
    }

    /// Show a frame where only `position` is lit, in its pocket color
    pub fn light_only(&mut self, position: usize) {
        self.clear_all();
        self.set_pixel(position, color_of(position).rgb());
        self.show();
    }

    /// Show a fully dark frame
    pub fn blank(&mut self) {
        self.clear_all();
        self.show();
    }

    /// Currently staged frame
    pub fn frame(&self) -> &[Rgb; RING_SIZE] {
        &self.frame
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
