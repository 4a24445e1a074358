use crate::placement::Block;
use crate::types::{GameStatus, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Everything the renderer needs for one frame.
///
/// `active` and `shadow` are `None` once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub field: [[bool; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<Block>,
    pub shadow: Option<Block>,
    pub next: PieceKind,
    pub score: u32,
    pub status: GameStatus,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[false; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            shadow: None,
            next: PieceKind::I,
            score: 0,
            status: GameStatus::Playing,
            episode_id: 0,
        }
    }
}
