//! Monochrome LCD buffer.
//!
//! Mirrors the handheld's 128x64 panel: a pixel is either on (ink) or off
//! (background). Writes outside the panel are ignored and reads outside it
//! report off, so drawing code can clip by simply overdrawing.

use crate::types::{LCD_HEIGHT, LCD_WIDTH};

const PIXEL_COUNT: usize = LCD_WIDTH as usize * LCD_HEIGHT as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcd {
    pixels: Box<[bool; PIXEL_COUNT]>,
}

impl Lcd {
    pub fn new() -> Self {
        Self {
            pixels: Box::new([false; PIXEL_COUNT]),
        }
    }

    pub fn width(&self) -> u16 {
        LCD_WIDTH
    }

    pub fn height(&self) -> u16 {
        LCD_HEIGHT
    }

    #[inline(always)]
    fn idx(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= LCD_WIDTH as i32 || y >= LCD_HEIGHT as i32 {
            return None;
        }
        Some(y as usize * LCD_WIDTH as usize + x as usize)
    }

    pub fn pixel_set(&mut self, x: i32, y: i32) {
        if let Some(i) = Self::idx(x, y) {
            self.pixels[i] = true;
        }
    }

    pub fn pixel_clear(&mut self, x: i32, y: i32) {
        if let Some(i) = Self::idx(x, y) {
            self.pixels[i] = false;
        }
    }

    pub fn pixel_get(&self, x: i32, y: i32) -> bool {
        Self::idx(x, y).is_some_and(|i| self.pixels[i])
    }

    /// Fill the panel with background.
    pub fn reset(&mut self) {
        self.pixels.fill(false);
    }

    /// Number of pixels currently on.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }
}

impl Default for Lcd {
    fn default() -> Self {
        Self::new()
    }
}
