//! Pieces module - table-driven tetromino shapes
//!
//! Every piece has a fixed square bounding box and four pre-rotated bitmaps.
//! No rotation math happens at runtime: rotating a block just selects the
//! next bitmap, which keeps all geometry exact-integer.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the bounding box's top-left corner
pub type CellOffset = (i8, i8);

/// Occupied cells of one rotation
pub type PieceCells = ArrayVec<CellOffset, 16>;

/// One catalog entry.
///
/// Each rotation is stored as `height` row masks; bit `width - 1 - x` of a
/// row is set when column `x` is occupied (so the literals read left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub width: u8,
    pub height: u8,
    rows: [[u8; 4]; 4],
}

impl Shape {
    /// Is cell (x, y) of the given rotation occupied?
    #[inline(always)]
    pub fn filled(&self, rotation: Rotation, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let row = self.rows[rotation.index()][y as usize];
        (row >> (self.width - 1 - x)) & 1 == 1
    }

    /// Occupied cells of the given rotation, row-major
    pub fn cells(&self, rotation: Rotation) -> PieceCells {
        let mut out = PieceCells::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.filled(rotation, x, y) {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

const I_SHAPE: Shape = Shape {
    width: 4,
    height: 4,
    rows: [
        [0b0000, 0b1111, 0b0000, 0b0000],
        [0b0010, 0b0010, 0b0010, 0b0010],
        [0b0000, 0b0000, 0b1111, 0b0000],
        [0b0100, 0b0100, 0b0100, 0b0100],
    ],
};

const O_SHAPE: Shape = Shape {
    width: 2,
    height: 2,
    rows: [
        [0b11, 0b11, 0, 0],
        [0b11, 0b11, 0, 0],
        [0b11, 0b11, 0, 0],
        [0b11, 0b11, 0, 0],
    ],
};

const T_SHAPE: Shape = Shape {
    width: 3,
    height: 3,
    rows: [
        [0b010, 0b111, 0b000, 0],
        [0b010, 0b011, 0b010, 0],
        [0b000, 0b111, 0b010, 0],
        [0b010, 0b110, 0b010, 0],
    ],
};

const S_SHAPE: Shape = Shape {
    width: 3,
    height: 3,
    rows: [
        [0b011, 0b110, 0b000, 0],
        [0b010, 0b011, 0b001, 0],
        [0b000, 0b011, 0b110, 0],
        [0b100, 0b110, 0b010, 0],
    ],
};

const Z_SHAPE: Shape = Shape {
    width: 3,
    height: 3,
    rows: [
        [0b110, 0b011, 0b000, 0],
        [0b001, 0b011, 0b010, 0],
        [0b000, 0b110, 0b011, 0],
        [0b010, 0b110, 0b100, 0],
    ],
};

const J_SHAPE: Shape = Shape {
    width: 3,
    height: 3,
    rows: [
        [0b100, 0b111, 0b000, 0],
        [0b011, 0b010, 0b010, 0],
        [0b000, 0b111, 0b001, 0],
        [0b010, 0b010, 0b110, 0],
    ],
};

const L_SHAPE: Shape = Shape {
    width: 3,
    height: 3,
    rows: [
        [0b001, 0b111, 0b000, 0],
        [0b010, 0b010, 0b011, 0],
        [0b000, 0b111, 0b100, 0],
        [0b110, 0b010, 0b010, 0],
    ],
};

/// Catalog entry for a piece kind
pub fn shape_of(kind: PieceKind) -> &'static Shape {
    match kind {
        PieceKind::I => &I_SHAPE,
        PieceKind::O => &O_SHAPE,
        PieceKind::T => &T_SHAPE,
        PieceKind::S => &S_SHAPE,
        PieceKind::Z => &Z_SHAPE,
        PieceKind::J => &J_SHAPE,
        PieceKind::L => &L_SHAPE,
    }
}

/// Occupied cells for a piece kind and rotation
pub fn get_cells(kind: PieceKind, rotation: Rotation) -> PieceCells {
    shape_of(kind).cells(rotation)
}

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

/// Check the static catalog: every rotation has exactly four cells, inside a
/// bounding box no larger than 4x4, with no bits set outside it.
pub fn catalog_is_well_formed() -> bool {
    PieceKind::ALL.iter().all(|&kind| {
        let shape = shape_of(kind);
        if shape.width == 0 || shape.width > 4 || shape.height == 0 || shape.height > 4 {
            return false;
        }
        ROTATIONS.iter().all(|&rotation| {
            let rows = &shape.rows[rotation.index()];
            let stray = rows
                .iter()
                .enumerate()
                .any(|(y, &row)| (y >= shape.height as usize && row != 0) || row >> shape.width != 0);
            !stray && shape.cells(rotation).len() == 4
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        assert!(catalog_is_well_formed());
    }

    #[test]
    fn test_t_north_cells() {
        let cells = get_cells(PieceKind::T, Rotation::North);
        assert_eq!(cells.as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_filled_outside_box_is_empty() {
        let o = shape_of(PieceKind::O);
        assert!(o.filled(Rotation::North, 1, 1));
        assert!(!o.filled(Rotation::North, 2, 0));
        assert!(!o.filled(Rotation::North, 0, 2));
    }

    #[test]
    fn test_i_rotations_alternate_orientation() {
        let north = get_cells(PieceKind::I, Rotation::North);
        let east = get_cells(PieceKind::I, Rotation::East);
        assert!(north.iter().all(|&(_, y)| y == 1));
        assert!(east.iter().all(|&(x, _)| x == 2));
    }
}
