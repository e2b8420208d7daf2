//! Monochrome frame buffer
//!
//! 1 bit per pixel, organized as 8-pixel-high pages the way SH110x
//! controllers expect it: bit `y % 8` of `buffer[y / 8][x]`.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 128;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// 128x128 1bpp frame buffer
#[derive(Clone)]
pub struct Framebuffer {
    buffer: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank frame buffer
    pub const fn new() -> Self {
        Self {
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn blank(&mut self) {
        self.fill(false);
    }

    /// Set every pixel to the same state
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        for page in self.buffer.iter_mut() {
            page.fill(byte);
        }
    }

    /// Set a single pixel; out-of-bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let mask = 1u8 << (y % 8);
        let byte = &mut self.buffer[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read a single pixel; out-of-bounds coordinates read as off
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> Option<&[u8; WIDTH]> {
        self.buffer.get(page)
    }

    /// Number of lit pixels
    pub fn lit_pixels(&self) -> usize {
        self.buffer
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
