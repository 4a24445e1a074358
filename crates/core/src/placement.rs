//! Collision and placement - validating block positions against the playfield.
//!
//! All checks are pure predicates. A rejected move is simply not committed.

use crate::pieces::{get_cells, shape_of};
use crate::playfield::Playfield;
use crate::types::{PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH};

/// The active falling piece: shape, rotation and the top-left corner of its
/// bounding box in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Block {
    pub fn new(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Block at the spawn position: horizontally centered, one row above the
    /// field, north rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use lcd_tetris_core::Block;
    /// use lcd_tetris_types::PieceKind;
    ///
    /// let block = Block::spawn(PieceKind::I);
    /// assert_eq!((block.x, block.y), (3, -1));
    /// ```
    pub fn spawn(kind: PieceKind) -> Self {
        let width = shape_of(kind).width as i8;
        Self::new(
            kind,
            Rotation::North,
            GRID_WIDTH as i8 / 2 - width / 2,
            -1,
        )
    }

    /// Same block translated by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same block with rotation advanced clockwise
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Field coordinates of every occupied cell
    pub fn field_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (bx, by) = (self.x, self.y);
        get_cells(self.kind, self.rotation)
            .into_iter()
            .map(move |(dx, dy)| (bx + dx, by + dy))
    }
}

/// Can the block sit where it is?
///
/// Fails on a column outside the field, a row at or below the floor, or an
/// occupied field cell. Rows above the field are not checked against it.
pub fn is_valid(field: &Playfield, block: &Block) -> bool {
    block.field_cells().all(|(x, y)| {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        y < 0 || !field.is_occupied(x, y)
    })
}

/// Lowest valid position straight below the block (the shadow).
///
/// Probes one row at a time; the floor guarantees termination. The block's
/// own position is returned when it cannot move down at all.
pub fn find_shadow(field: &Playfield, block: &Block) -> Block {
    let mut shadow = *block;
    loop {
        let probe = shadow.shifted(0, 1);
        if !is_valid(field, &probe) {
            return shadow;
        }
        shadow = probe;
    }
}
