//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the emulator.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, button simulation, LCD rendering).
//!
//! # Playfield Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - Pieces may sit at negative rows while entering from above the field
//!
//! # Timing Constants
//!
//! All timing is expressed in ticks, one tick per millisecond:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_DELAY_MS` | 1000 | Gravity interval |
//! | `KEY_REPEAT_MS` | 200 | Auto-repeat interval for a held button |
//! | `FRAME_INTERVAL_MS` | 40 | Fixed frame interval (25 FPS) |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Auto-release for terminals without key-up events |
//!
//! # Examples
//!
//! ```
//! use lcd_tetris_types::{Button, GameAction, Rotation, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(GameAction::for_button(Button::Right), Some(GameAction::HardDrop));
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Playfield width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Playfield height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// LCD width in pixels
pub const LCD_WIDTH: u16 = 128;

/// LCD height in pixels
pub const LCD_HEIGHT: u16 = 64;

/// Gravity interval in ticks (1000ms = 1 second per row)
pub const FALL_DELAY_MS: u32 = 1000;

/// A held button is re-accepted after this many ticks.
pub const KEY_REPEAT_MS: u32 = 200;

/// Fixed frame interval in milliseconds (40ms = 25 FPS)
pub const FRAME_INTERVAL_MS: u32 = 40;

/// Release timeout for terminals that never report key release.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Number of pieces in the catalog
pub const PIECE_COUNT: usize = 7;


/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All pieces in catalog order
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index of this piece
    pub fn index(self) -> usize {
        self as usize
    }

    /// Piece at a catalog index, wrapping out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lcd_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), PieceKind::I);
    /// assert_eq!(PieceKind::from_index(6), PieceKind::L);
    /// assert_eq!(PieceKind::from_index(7), PieceKind::I);
    /// ```
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PIECE_COUNT]
    }
}

/// Rotation states, advancing clockwise.
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use lcd_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Index into a piece's rotation table (0..4)
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Number of logical buttons
pub const BUTTON_COUNT: usize = 6;

/// Logical buttons of the handheld.
///
/// These are GPIO-level names: on the rotated display they no longer match
/// the direction the player sees, see [`Button::rotated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Left,
    Down,
    Right,
    Enter,
    Back,
}

impl Button {
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Up,
        Button::Left,
        Button::Down,
        Button::Right,
        Button::Enter,
        Button::Back,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Logical button for a physical key when the display is rotated.
    ///
    /// # Examples
    ///
    /// ```
    /// use lcd_tetris_types::Button;
    ///
    /// assert_eq!(Button::Up.rotated(), Button::Left);
    /// assert_eq!(Button::Back.rotated(), Button::Back);
    /// ```
    pub fn rotated(self) -> Self {
        match self {
            Button::Up => Button::Left,
            Button::Left => Button::Down,
            Button::Down => Button::Right,
            Button::Right => Button::Up,
            Button::Enter => Button::Enter,
            Button::Back => Button::Back,
        }
    }
}

/// Buttons the game resolves, in tie-break order.
pub const GAME_BUTTONS: [Button; BUTTON_COUNT] = [
    Button::Right,
    Button::Down,
    Button::Left,
    Button::Up,
    Button::Back,
    Button::Enter,
];

/// Game actions that can be applied to modify game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to its shadow and lock it
    HardDrop,
    /// Restart the game (accepted in any state)
    Restart,
}

impl GameAction {
    /// Game binding for a logical button.
    ///
    /// Bindings assume the rotated display, so the long axis of the field
    /// runs along the Left/Right buttons.
    pub fn for_button(button: Button) -> Option<Self> {
        match button {
            Button::Right => Some(GameAction::HardDrop),
            Button::Down => Some(GameAction::MoveLeft),
            Button::Up => Some(GameAction::MoveRight),
            Button::Left => Some(GameAction::Rotate),
            Button::Back => Some(GameAction::Restart),
            Button::Enter => None,
        }
    }
}

/// Game lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
}

/// Display orientation of the emulated LCD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    Landscape,
    /// Rotated 90°; the physical buttons are remapped to match.
    #[default]
    Portrait,
}

impl Orientation {
    /// Logical button for a physical key in this orientation
    pub fn remap(self, physical: Button) -> Button {
        match self {
            Orientation::Landscape => physical,
            Orientation::Portrait => physical.rotated(),
        }
    }
}

/// Read-only view of the button hardware.
///
/// `last_change_tick` is the tick at which the button last changed state and
/// is only meaningful while the button is held (implementations report 0
/// otherwise).
pub trait ButtonSource {
    fn held(&self, button: Button) -> bool;
    fn last_change_tick(&self, button: Button) -> u32;
}
