//! Simulated button hardware.
//!
//! This crate stands in for the handheld's GPIO layer. It maps `crossterm`
//! key events onto logical [`Button`](crate::types::Button)s (remapped for
//! the rotated display), tracks held state and change ticks per button, and
//! provides the monotonic tick counter everything is timed against.

pub mod clock;
pub mod map;
pub mod panel;

pub use lcd_tetris_types as types;

pub use clock::TickClock;
pub use map::{map_key, should_quit, KeyInput};
pub use panel::ButtonPanel;
