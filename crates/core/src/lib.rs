//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state for the handheld Tetris.
//! It has **no dependencies** on the terminal, the button hardware or the
//! clock: time comes in as plain tick values and buttons through the
//! [`ButtonSource`](crate::types::ButtonSource) trait, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every rule can be driven tick by tick
//! - **Portable**: Runs headless, in the terminal emulator, or anywhere else
//!
//! # Module Structure
//!
//! - [`pieces`]: Table-driven tetromino bitmaps with four pre-rotated states
//! - [`playfield`]: 10x20 occupancy grid with line clearing
//! - [`placement`]: The active block, collision checks and shadow projection
//! - [`resolver`]: Priority-resolved, debounced button events
//! - [`rng`]: Seedable bounded random source
//! - [`game_state`]: Spawn, input, gravity, lock and game over
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random, with one piece of preview
//! - Rotation is clockwise only and never kicks off walls
//! - Hard drop moves to the shadow and locks on the same frame
//! - Every cleared row scores one point
//!
//! # Example
//!
//! ```
//! use lcd_tetris_core::GameState;
//! use lcd_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345, 0);
//!
//! game.apply_action(GameAction::MoveRight, 0);
//! game.apply_action(GameAction::Rotate, 0);
//! game.apply_action(GameAction::HardDrop, 0);
//! assert!(game.tick(0));
//!
//! assert_eq!(game.playfield().cells().iter().filter(|&&c| c).count(), 4);
//! ```

pub mod game_state;
pub mod pieces;
pub mod placement;
pub mod playfield;
pub mod resolver;
pub mod rng;
pub mod snapshot;

pub use lcd_tetris_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Timing};
pub use pieces::{catalog_is_well_formed, get_cells, shape_of, Shape};
pub use placement::{find_shadow, is_valid, Block};
pub use playfield::Playfield;
pub use resolver::{latest_held, InputResolver};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
