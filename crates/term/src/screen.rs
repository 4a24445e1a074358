//! ScreenView: presents the LCD in a terminal framebuffer.
//!
//! Two pixel rows share one terminal row through the upper half block
//! glyph: the foreground paints the top pixel, the background the bottom
//! one. In portrait the panel is shown rotated (transposed), matching how
//! the game is drawn.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{Cell, FrameBuffer, Rgb, LCD_BACKLIGHT, LCD_INK};
use crate::lcd::Lcd;
use crate::types::Orientation;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub struct ScreenView {
    orientation: Orientation,
    anchor_y: AnchorY,
    ink: Rgb,
    backlight: Rgb,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl ScreenView {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            anchor_y: AnchorY::Center,
            ink: LCD_INK,
            backlight: LCD_BACKLIGHT,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Displayed image size in pixels.
    pub fn image_size(&self, lcd: &Lcd) -> (u16, u16) {
        match self.orientation {
            Orientation::Landscape => (lcd.width(), lcd.height()),
            Orientation::Portrait => (lcd.height(), lcd.width()),
        }
    }

    /// Displayed image size in terminal cells.
    pub fn cell_size(&self, lcd: &Lcd) -> (u16, u16) {
        let (w, h) = self.image_size(lcd);
        (w, h.div_ceil(2))
    }

    /// Pixel of the displayed image at column `x`, row `y`.
    #[inline(always)]
    fn image_pixel(&self, lcd: &Lcd, x: i32, y: i32) -> bool {
        match self.orientation {
            Orientation::Landscape => lcd.pixel_get(x, y),
            Orientation::Portrait => lcd.pixel_get(y, x),
        }
    }

    fn color(&self, on: bool) -> Rgb {
        if on {
            self.ink
        } else {
            self.backlight
        }
    }

    /// Render the LCD into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport. Rows or columns that do
    /// not fit are cropped.
    pub fn render_into(&self, lcd: &Lcd, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (cols, rows) = self.cell_size(lcd);
        let start_x = viewport.width.saturating_sub(cols) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(rows) / 2,
            AnchorY::Top => 0,
        };

        for row in 0..rows {
            let y = start_y + row;
            if y >= viewport.height {
                break;
            }
            for col in 0..cols {
                let x = start_x + col;
                if x >= viewport.width {
                    break;
                }
                let top = self.image_pixel(lcd, col as i32, 2 * row as i32);
                let bottom = self.image_pixel(lcd, col as i32, 2 * row as i32 + 1);
                fb.set(x, y, Cell::new(self.color(top), self.color(bottom)));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, lcd: &Lcd, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(lcd, viewport, &mut fb);
        fb
    }
}
