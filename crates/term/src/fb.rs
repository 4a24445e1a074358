//! Framebuffer of half-block terminal cells.
//!
//! Every terminal cell shows the upper half block glyph, so a cell is just
//! two stacked pixels: `top` is drawn as the foreground colour and `bottom`
//! as the background. Cells around the panel image keep the margin colour.

/// Glyph printed in every cell.
pub const HALF_BLOCK: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Ink colour of the emulated panel.
pub const LCD_INK: Rgb = Rgb::new(0x36, 0x36, 0x36);
/// Backlight colour of the emulated panel.
pub const LCD_BACKLIGHT: Rgb = Rgb::new(0xfe, 0xa6, 0x52);
/// Colour of the terminal around the panel.
pub const MARGIN: Rgb = Rgb::new(0, 0, 0);

/// One terminal cell: the pixel pair under a half block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl Cell {
    pub const fn new(top: Rgb, bottom: Rgb) -> Self {
        Self { top, bottom }
    }

    pub const fn solid(color: Rgb) -> Self {
        Self::new(color, color)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::solid(MARGIN)
    }
}

/// Row-major grid of cells sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y`. Panics if `y` is out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-range writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to the margin colour.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
