//! Playfield module - the grid of locked cells
//!
//! The playfield is a 10x20 grid of occupied/empty cells stored as a flat
//! row-major array. Coordinates are (x, y): x is the column (0..9, left to
//! right), y is the row (0..19, top to bottom).
//!
//! Rows above the field (y < 0) are the entry area: they read as empty so a
//! block can spawn partially above the visible field. The side walls and the
//! floor read as blocked.

use tracing::trace;

use crate::placement::Block;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the playfield
const FIELD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Playfield {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; FIELD_SIZE],
}

impl Playfield {
    /// Create a new empty playfield
    pub fn new() -> Self {
        Self {
            cells: [false; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Is the cell at (x, y) occupied?
    ///
    /// Every row above the field is empty, corners included; beside or
    /// below the field is always blocked.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if y < 0 {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => self.cells[idx],
            None => true,
        }
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Freeze a block's cells into the field.
    ///
    /// Cells still above the field are dropped.
    pub fn lock(&mut self, block: &Block) {
        for (x, y) in block.field_cells() {
            if y >= 0 {
                self.set(x, y, true);
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Remove all full rows and return how many were removed.
    ///
    /// Two pointers sweep upward from the floor: `read_y` skips full rows,
    /// `write_y` receives every kept row, and everything above the final
    /// `write_y` is zero-filled. Rows above a cleared line therefore move down
    /// by the number of lines cleared below them, in order.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = GRID_WIDTH as usize;
        let mut cleared = 0u32;
        let mut write_y = GRID_HEIGHT as usize;

        for read_y in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(false);

        if cleared > 0 {
            trace!(cleared, "compacted playfield");
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(GRID_WIDTH as usize)
    }

    /// Clear the entire playfield
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a playfield from text rows, `#` marking occupied cells.
    ///
    /// Rows are laid out bottom-aligned; missing rows at the top are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lcd_tetris_core::Playfield;
    ///
    /// let field = Playfield::from_rows(&["#........#", "##########"]);
    /// assert!(field.is_occupied(0, 18));
    /// assert!(field.is_row_full(19));
    /// assert!(!field.is_occupied(1, 18));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut field = Self::new();
        let offset = (GRID_HEIGHT as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().take(GRID_HEIGHT as usize).enumerate() {
            let y = (offset + i) as i8;
            for (x, ch) in row.chars().take(GRID_WIDTH as usize).enumerate() {
                field.set(x as i8, y, ch == '#');
            }
        }
        field
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new()
    }
}
