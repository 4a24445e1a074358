//! LCD Tetris (workspace facade crate).
//!
//! The game runs on an emulated 128x64 monochrome handheld. The
//! implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `lcd_tetris::{core,input,term,types}` and owns the
//! command-line configuration of the terminal runner.

pub mod config;

pub use lcd_tetris_core as core;
pub use lcd_tetris_input as input;
pub use lcd_tetris_term as term;
pub use lcd_tetris_types as types;

pub use config::{Args, Config, ConfigError};
