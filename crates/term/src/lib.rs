//! Terminal front end for the emulated handheld.
//!
//! The pipeline per frame is:
//!
//! 1. [`GameView`] draws a game snapshot onto the monochrome [`Lcd`]
//! 2. [`ScreenView`] turns the LCD into a [`FrameBuffer`] of half-block cells
//! 3. [`TerminalRenderer`] writes only the changed cells
//! 4. [`FramePacer`] holds the frame rate steady
//!
//! Steps 1 and 2 are pure and unit-tested; only the renderer touches the
//! terminal.

pub mod fb;
pub mod font;
pub mod game_view;
pub mod lcd;
pub mod pacer;
pub mod renderer;
pub mod screen;

pub use lcd_tetris_core as core;
pub use lcd_tetris_types as types;

pub use fb::{Cell, FrameBuffer, Rgb, HALF_BLOCK, LCD_BACKLIGHT, LCD_INK};
pub use game_view::{screen_get, GameView};
pub use lcd::Lcd;
pub use pacer::FramePacer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{AnchorY, ScreenView, Viewport};
