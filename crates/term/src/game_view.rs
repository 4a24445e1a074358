//! GameView: draws a [`GameSnapshot`] onto the monochrome LCD.
//!
//! The game is laid out for the handheld held upright, so everything is drawn
//! in *screen* coordinates (64 wide, 128 tall) and transposed onto the
//! 128x64 panel: screen pixel `(sx, sy)` lands on LCD pixel `(sy, sx)`.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{shape_of, Block, GameSnapshot};
use crate::font::{glyph, ink, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::lcd::Lcd;
use crate::types::{PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH, LCD_HEIGHT, LCD_WIDTH};

/// Screen width in pixels (the LCD's short side).
pub const SCREEN_WIDTH: i32 = LCD_HEIGHT as i32;
/// Screen height in pixels (the LCD's long side).
pub const SCREEN_HEIGHT: i32 = LCD_WIDTH as i32;

/// Screen position of the field's top-left cell.
pub const FIELD_X: i32 = 7;
pub const FIELD_Y: i32 = 24;

/// Each field cell is a 5x5 pixel dot.
pub const CELL_SIZE: i32 = 5;

/// Field row of the next-piece preview (above the field).
pub const NEXT_ROW: i32 = -4;

/// Squared radius of a locked or active cell's ring.
const BLOCK_RADIUS2: i32 = 6;
/// Squared radius of a shadow cell's ring.
const SHADOW_RADIUS2: i32 = 4;

const GAME_OVER_BOX: (i32, i32, i32, i32) = (14, 58, 39, 9);
const GAME_OVER_TEXT: (i32, i32) = (16, 60);

/// Read a pixel back in screen coordinates.
pub fn screen_get(lcd: &Lcd, sx: i32, sy: i32) -> bool {
    lcd.pixel_get(sy, sx)
}

/// Transposing pen over the LCD.
struct Screen<'a> {
    lcd: &'a mut Lcd,
}

impl Screen<'_> {
    #[inline(always)]
    fn set(&mut self, sx: i32, sy: i32) {
        self.lcd.pixel_set(sy, sx);
    }

    #[inline(always)]
    fn clear(&mut self, sx: i32, sy: i32) {
        self.lcd.pixel_clear(sy, sx);
    }

    /// Ring-shaped dot for field cell (x, y). The center pixel stays dark.
    fn dot(&mut self, x: i32, y: i32, radius2: i32) {
        for j in 0..CELL_SIZE {
            for i in 0..CELL_SIZE {
                let (dx, dy) = (i - 2, j - 2);
                let dist = dx * dx + dy * dy;
                if dist > 0 && dist <= radius2 {
                    self.set(FIELD_X + x * CELL_SIZE + i, FIELD_Y + y * CELL_SIZE + j);
                }
            }
        }
    }

    fn border(&mut self) {
        let w = GRID_WIDTH as i32 * CELL_SIZE;
        let h = GRID_HEIGHT as i32 * CELL_SIZE;
        for j in 0..=h {
            self.set(FIELD_X - 1, FIELD_Y + j);
            self.set(FIELD_X + w, FIELD_Y + j);
        }
        for i in 0..=w {
            self.set(FIELD_X + i, FIELD_Y - 1);
            self.set(FIELD_X + i, FIELD_Y + h);
        }
    }

    fn field(&mut self, field: &[[bool; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (y, row) in field.iter().enumerate() {
            for (x, &occupied) in row.iter().enumerate() {
                if occupied {
                    self.dot(x as i32, y as i32, BLOCK_RADIUS2);
                }
            }
        }
    }

    /// Cells above the field are skipped.
    fn block(&mut self, block: &Block, radius2: i32) {
        for (x, y) in block.field_cells() {
            let (x, y) = (x as i32, y as i32);
            if x < 0 || x >= GRID_WIDTH as i32 || y < 0 || y >= GRID_HEIGHT as i32 {
                continue;
            }
            self.dot(x, y, radius2);
        }
    }

    /// Preview in spawn rotation, right-aligned one cell in from the edge.
    fn next_piece(&mut self, kind: PieceKind) {
        let shape = shape_of(kind);
        let next_x = GRID_WIDTH as i32 - shape.width as i32 - 1;
        for y in 0..shape.height {
            for x in 0..shape.width {
                if shape.filled(Rotation::North, x, y) {
                    self.dot(next_x + x as i32, NEXT_ROW + y as i32, BLOCK_RADIUS2);
                }
            }
        }
    }

    /// Draws the whole glyph cell, background included.
    fn put_char(&mut self, x: i32, y: i32, c: char, invert: bool) {
        let g = glyph(c);
        for j in 0..GLYPH_HEIGHT {
            for i in 0..GLYPH_WIDTH {
                if ink(&g, i, j) != invert {
                    self.set(x + i, y + j);
                } else {
                    self.clear(x + i, y + j);
                }
            }
        }
    }

    fn put_str(&mut self, x: i32, y: i32, s: &str, invert: bool) {
        let mut cx = x;
        for c in s.chars() {
            self.put_char(cx, y, c, invert);
            cx += GLYPH_WIDTH;
        }
    }

    /// Right-aligned; the least significant digit sits at column 9.
    fn score(&mut self, score: u32) {
        let mut x = 1 + GLYPH_WIDTH * 2;
        let mut value = score;
        loop {
            let digit = char::from(b'0' + (value % 10) as u8);
            self.put_char(x, 1, digit, false);
            x -= GLYPH_WIDTH;
            value /= 10;
            if value == 0 {
                break;
            }
        }
    }

    fn fill_box(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for j in 0..h {
            for i in 0..w {
                self.set(x + i, y + j);
            }
        }
    }
}

/// Draws the game screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Draw one full frame. The LCD is reset first.
    ///
    /// Draw order: border, locked cells, then (while playing) the active
    /// block, its shadow and the next piece, then the score, and on game over
    /// a filled box with inverted text on top.
    pub fn render(&self, snap: &GameSnapshot, lcd: &mut Lcd) {
        lcd.reset();
        let mut screen = Screen { lcd };

        screen.border();
        screen.field(&snap.field);

        if snap.playable() {
            if let Some(active) = &snap.active {
                screen.block(active, BLOCK_RADIUS2);
            }
            if let Some(shadow) = &snap.shadow {
                screen.block(shadow, SHADOW_RADIUS2);
            }
            screen.next_piece(snap.next);
        }

        screen.score(snap.score);

        if !snap.playable() {
            let (x, y, w, h) = GAME_OVER_BOX;
            screen.fill_box(x, y, w, h);
            let (tx, ty) = GAME_OVER_TEXT;
            screen.put_str(tx, ty, "GAME OVER", true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::GameStatus;

    fn cell_origin(x: i32, y: i32) -> (i32, i32) {
        (FIELD_X + x * CELL_SIZE, FIELD_Y + y * CELL_SIZE)
    }

    fn render(snap: &GameSnapshot) -> Lcd {
        let mut lcd = Lcd::new();
        GameView::new().render(snap, &mut lcd);
        lcd
    }

    #[test]
    fn border_surrounds_the_field() {
        let lcd = render(&GameSnapshot::default());
        let w = GRID_WIDTH as i32 * CELL_SIZE;
        let h = GRID_HEIGHT as i32 * CELL_SIZE;
        assert!(screen_get(&lcd, FIELD_X - 1, FIELD_Y));
        assert!(screen_get(&lcd, FIELD_X + w, FIELD_Y + h));
        assert!(screen_get(&lcd, FIELD_X, FIELD_Y - 1));
        assert!(!screen_get(&lcd, FIELD_X, FIELD_Y));
        // Transposed onto the panel.
        assert!(lcd.pixel_get(FIELD_Y, FIELD_X - 1));
    }

    #[test]
    fn locked_cell_is_a_ring_with_dark_center() {
        let mut snap = GameSnapshot::default();
        snap.field[19][0] = true;
        let lcd = render(&snap);
        let (ox, oy) = cell_origin(0, 19);
        assert!(!screen_get(&lcd, ox + 2, oy + 2));
        assert!(screen_get(&lcd, ox + 1, oy + 2));
        assert!(screen_get(&lcd, ox + 4, oy + 3));
        // Corners are outside the ring.
        assert!(!screen_get(&lcd, ox, oy));
    }

    #[test]
    fn shadow_ring_is_smaller() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(Block::new(PieceKind::O, Rotation::North, 0, 0));
        snap.shadow = Some(Block::new(PieceKind::O, Rotation::North, 0, 18));
        let lcd = render(&snap);

        let (ax, ay) = cell_origin(0, 0);
        let (sx, sy) = cell_origin(0, 18);
        // dx = 2, dy = 1: inside a block ring, outside a shadow ring.
        assert!(screen_get(&lcd, ax + 4, ay + 3));
        assert!(!screen_get(&lcd, sx + 4, sy + 3));
        assert!(screen_get(&lcd, sx + 3, sy + 3));
    }

    #[test]
    fn cells_above_the_field_are_not_drawn() {
        let mut snap = GameSnapshot::default();
        snap.next = PieceKind::O;
        snap.active = Some(Block::new(PieceKind::O, Rotation::North, 0, -1));
        let lcd = render(&snap);
        // Row -1 of column 0 would land just above the border.
        let (ox, oy) = cell_origin(0, -1);
        assert!(!screen_get(&lcd, ox + 1, oy + 2));
        let (ox, oy) = cell_origin(0, 0);
        assert!(screen_get(&lcd, ox + 1, oy + 2));
    }

    #[test]
    fn next_piece_sits_above_the_field_at_the_right() {
        let mut snap = GameSnapshot::default();
        snap.next = PieceKind::O;
        let lcd = render(&snap);
        // O is 2 wide: columns 7 and 8, rows -4 and -3.
        let (ox, oy) = cell_origin(7, NEXT_ROW);
        assert!(screen_get(&lcd, ox + 1, oy + 2));
        let (ox, oy) = cell_origin(8, NEXT_ROW + 1);
        assert!(screen_get(&lcd, ox + 1, oy + 2));
        let (ox, oy) = cell_origin(6, NEXT_ROW);
        assert!(!screen_get(&lcd, ox + 1, oy + 2));
    }

    #[test]
    fn score_is_right_aligned() {
        let mut snap = GameSnapshot::default();
        snap.score = 7;
        let lcd = render(&snap);
        // '7' top row is fully inked across its three columns at x = 9.
        assert!(screen_get(&lcd, 9, 1));
        assert!(screen_get(&lcd, 11, 1));
        assert!(!screen_get(&lcd, 5, 1));

        snap.score = 10;
        let lcd = render(&snap);
        // '1' at x = 5 inks its middle column on the top row.
        assert!(screen_get(&lcd, 6, 1));
        assert!(!screen_get(&lcd, 5, 1));
    }

    #[test]
    fn game_over_hides_pieces_and_shows_banner() {
        let mut snap = GameSnapshot::default();
        snap.status = GameStatus::GameOver;
        snap.next = PieceKind::O;
        snap.active = Some(Block::new(PieceKind::O, Rotation::North, 0, 0));
        let lcd = render(&snap);

        let (ox, oy) = cell_origin(0, 0);
        assert!(!screen_get(&lcd, ox + 1, oy + 2));
        let (ox, oy) = cell_origin(7, NEXT_ROW);
        assert!(!screen_get(&lcd, ox + 1, oy + 2));

        // Box edge is lit; 'G' ink is cut out of it.
        assert!(screen_get(&lcd, 14, 58));
        assert!(!screen_get(&lcd, 16, 60));
        assert!(screen_get(&lcd, 19, 60));
    }

    #[test]
    fn renders_a_live_game() {
        let game = GameState::new(42, 0);
        let lcd = render(&game.snapshot());
        // Border plus at least one active block, shadow and preview.
        let border = 2 * (GRID_HEIGHT as usize * 5 + 1) + 2 * (GRID_WIDTH as usize * 5 + 1);
        assert!(lcd.lit_count() > border);
    }
}
