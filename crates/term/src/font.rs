//! 4x6 bitmap font.
//!
//! Glyphs are 3x5 with one column and one row of spacing baked in. Each row
//! is a 4-bit mask, bit 3 being the leftmost column. Only the characters the
//! game prints are present; anything else renders as a blank cell.

pub const GLYPH_WIDTH: i32 = 4;
pub const GLYPH_HEIGHT: i32 = 6;

pub type Glyph = [u8; GLYPH_HEIGHT as usize];

const BLANK: Glyph = [0; 6];

const DIGITS: [Glyph; 10] = [
    [0b1110, 0b1010, 0b1010, 0b1010, 0b1110, 0],
    [0b0100, 0b1100, 0b0100, 0b0100, 0b1110, 0],
    [0b1110, 0b0010, 0b1110, 0b1000, 0b1110, 0],
    [0b1110, 0b0010, 0b1110, 0b0010, 0b1110, 0],
    [0b1010, 0b1010, 0b1110, 0b0010, 0b0010, 0],
    [0b1110, 0b1000, 0b1110, 0b0010, 0b1110, 0],
    [0b1110, 0b1000, 0b1110, 0b1010, 0b1110, 0],
    [0b1110, 0b0010, 0b0010, 0b0100, 0b0100, 0],
    [0b1110, 0b1010, 0b1110, 0b1010, 0b1110, 0],
    [0b1110, 0b1010, 0b1110, 0b0010, 0b1110, 0],
];

pub fn glyph(c: char) -> Glyph {
    match c {
        '0'..='9' => DIGITS[(c as u8 - b'0') as usize],
        'A' => [0b0100, 0b1010, 0b1110, 0b1010, 0b1010, 0],
        'E' => [0b1110, 0b1000, 0b1100, 0b1000, 0b1110, 0],
        'G' => [0b1110, 0b1000, 0b1010, 0b1010, 0b1110, 0],
        'M' => [0b1010, 0b1110, 0b1110, 0b1010, 0b1010, 0],
        'O' => [0b0100, 0b1010, 0b1010, 0b1010, 0b0100, 0],
        'R' => [0b1100, 0b1010, 0b1100, 0b1010, 0b1010, 0],
        'V' => [0b1010, 0b1010, 0b1010, 0b1010, 0b0100, 0],
        _ => BLANK,
    }
}

/// Is pixel (x, y) of the glyph inked?
#[inline(always)]
pub fn ink(glyph: &Glyph, x: i32, y: i32) -> bool {
    if !(0..GLYPH_WIDTH).contains(&x) || !(0..GLYPH_HEIGHT).contains(&y) {
        return false;
    }
    (glyph[y as usize] >> (GLYPH_WIDTH - 1 - x)) & 1 == 1
}
