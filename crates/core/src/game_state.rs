//! Game state module - the per-session state machine
//!
//! Ties together the playfield, the piece catalog, the placement checks and
//! the input resolver. One `GameState` is one game session; the caller owns it
//! and drives it once per frame with the current tick.
//!
//! Lifecycle: spawn → falling → lock → line clear → spawn, until a freshly
//! spawned block is already invalid (game over). Only restart leaves game over.

use tracing::{debug, info};

use crate::placement::{find_shadow, is_valid, Block};
use crate::playfield::Playfield;
use crate::resolver::InputResolver;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Timing parameters, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Interval between gravity steps
    pub fall_delay: u32,
    /// Auto-repeat interval for a held button
    pub key_repeat: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            fall_delay: FALL_DELAY_MS,
            key_repeat: KEY_REPEAT_MS,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    playfield: Playfield,
    block: Block,
    next: PieceKind,
    score: u32,
    status: GameStatus,
    rng: SimpleRng,
    input: InputResolver,
    timing: Timing,
    /// Tick of the last gravity step.
    last_fall_tick: u32,
    /// Run gravity on the next tick regardless of the fall delay.
    force_fall: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and default timing.
    pub fn new(seed: u32, now: u32) -> Self {
        Self::with_timing(seed, Timing::default(), now)
    }

    /// Create a new game and spawn its first block.
    pub fn with_timing(seed: u32, timing: Timing, now: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::draw_piece(&mut rng);

        let mut state = Self {
            playfield: Playfield::new(),
            block: Block::spawn(next),
            next,
            score: 0,
            status: GameStatus::Playing,
            rng,
            input: InputResolver::with_repeat(&GAME_BUTTONS, timing.key_repeat),
            timing,
            last_fall_tick: now,
            force_fall: false,
            episode_id: 0,
        };
        state.spawn();
        state
    }

    fn draw_piece(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::from_index(rng.random_below(PIECE_COUNT as u32) as usize)
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// The active block (stale once the game is over)
    pub fn block(&self) -> Block {
        self.block
    }

    /// Where the active block would land if dropped now
    pub fn shadow(&self) -> Block {
        find_shadow(&self.playfield, &self.block)
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    #[cfg(test)]
    pub(crate) fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    /// Replace the active block with the preview piece and draw a new preview.
    ///
    /// Returns false (and ends the game) when the new block is already blocked.
    pub fn spawn(&mut self) -> bool {
        self.block = Block::spawn(self.next);
        self.next = Self::draw_piece(&mut self.rng);

        if !is_valid(&self.playfield, &self.block) {
            self.status = GameStatus::GameOver;
            info!(score = self.score, episode = self.episode_id, "game over");
            return false;
        }

        debug!(kind = ?self.block.kind, next = ?self.next, "spawned block");
        true
    }

    /// Poll the buttons, apply at most one accepted action, then run gravity.
    ///
    /// Returns the action that was accepted this frame, if any.
    pub fn update(&mut self, buttons: &impl ButtonSource, now: u32) -> Option<GameAction> {
        let action = self
            .input
            .poll(buttons, now)
            .and_then(GameAction::for_button);
        if let Some(action) = action {
            self.apply_action(action, now);
        }
        self.tick(now);
        action
    }

    /// Apply a game action. Returns whether it changed anything.
    ///
    /// While the game is over only `Restart` is live.
    pub fn apply_action(&mut self, action: GameAction, now: u32) -> bool {
        match action {
            GameAction::Restart => {
                self.restart(now);
                true
            }
            _ if self.game_over() => false,
            GameAction::MoveLeft => self.try_commit(self.block.shifted(-1, 0)),
            GameAction::MoveRight => self.try_commit(self.block.shifted(1, 0)),
            GameAction::Rotate => self.try_commit(self.block.rotated()),
            GameAction::HardDrop => {
                self.block = self.shadow();
                self.force_fall = true;
                true
            }
        }
    }

    /// Commit a candidate block if it fits; otherwise leave the block as is.
    fn try_commit(&mut self, candidate: Block) -> bool {
        if is_valid(&self.playfield, &candidate) {
            self.block = candidate;
            true
        } else {
            false
        }
    }

    /// Gravity. Once the fall delay has elapsed (or a hard drop forced it) the
    /// block moves down one row, or locks when it cannot.
    ///
    /// Returns true when a gravity step ran.
    pub fn tick(&mut self, now: u32) -> bool {
        if self.game_over() {
            return false;
        }
        if !self.force_fall && now.wrapping_sub(self.last_fall_tick) < self.timing.fall_delay {
            return false;
        }

        self.force_fall = false;
        self.last_fall_tick = now;

        let fallen = self.block.shifted(0, 1);
        if is_valid(&self.playfield, &fallen) {
            self.block = fallen;
        } else {
            self.lock_block();
        }
        true
    }

    /// Freeze the block, clear completed rows, score them and spawn the next block.
    fn lock_block(&mut self) {
        self.playfield.lock(&self.block);
        let cleared = self.playfield.clear_full_rows();
        self.score += cleared;
        debug!(kind = ?self.block.kind, x = self.block.x, y = self.block.y, cleared, "locked block");

        self.spawn();
    }

    /// Reset the playfield and score and start over with a fresh block.
    pub fn restart(&mut self, now: u32) {
        self.playfield.clear();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.next = Self::draw_piece(&mut self.rng);
        self.last_fall_tick = now;
        self.force_fall = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(episode = self.episode_id, "restart");

        self.spawn();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (dst, src) in out.field.iter_mut().zip(self.playfield.rows()) {
            dst.copy_from_slice(src);
        }
        let playing = !self.game_over();
        out.active = playing.then_some(self.block);
        out.shadow = playing.then(|| self.shadow());
        out.next = self.next;
        out.score = self.score;
        out.status = self.status;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Buttons scripted by the test.
    #[derive(Default)]
    struct Pins {
        held: [bool; BUTTON_COUNT],
        ticks: [u32; BUTTON_COUNT],
    }

    impl Pins {
        fn press(&mut self, button: Button, tick: u32) {
            self.held[button.index()] = true;
            self.ticks[button.index()] = tick;
        }

        fn release(&mut self, button: Button) {
            self.held[button.index()] = false;
            self.ticks[button.index()] = 0;
        }
    }

    impl ButtonSource for Pins {
        fn held(&self, button: Button) -> bool {
            self.held[button.index()]
        }

        fn last_change_tick(&self, button: Button) -> u32 {
            self.ticks[button.index()]
        }
    }

    fn fill_row_except(state: &mut GameState, y: i8, gaps: &[i8]) {
        for x in 0..GRID_WIDTH as i8 {
            if !gaps.contains(&x) {
                state.playfield_mut().set(x, y, true);
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345, 0);

        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.episode_id, 0);
        assert_eq!(state.block.y, -1);
        assert_eq!(state.block.rotation, Rotation::North);
        assert!(is_valid(&state.playfield, &state.block));
    }

    #[test]
    fn test_spawn_uses_preview_piece() {
        let mut state = GameState::new(12345, 0);
        for _ in 0..20 {
            let preview = state.next;
            assert!(state.spawn());
            assert_eq!(state.block.kind, preview);
            assert_eq!(state.block, Block::spawn(preview));
        }
    }

    #[test]
    fn test_move_and_rotate_commit_when_valid() {
        let mut state = GameState::new(1, 0);
        state.block = Block::new(PieceKind::T, Rotation::North, 4, 5);

        assert!(state.apply_action(GameAction::MoveLeft, 0));
        assert_eq!(state.block.x, 3);
        assert!(state.apply_action(GameAction::MoveRight, 0));
        assert!(state.apply_action(GameAction::MoveRight, 0));
        assert_eq!(state.block.x, 5);
        assert!(state.apply_action(GameAction::Rotate, 0));
        assert_eq!(state.block.rotation, Rotation::East);
    }

    #[test]
    fn test_blocked_moves_are_no_ops() {
        let mut state = GameState::new(1, 0);
        state.block = Block::new(PieceKind::O, Rotation::North, 0, 5);
        let before = state.block;

        assert!(!state.apply_action(GameAction::MoveLeft, 0));
        assert_eq!(state.block, before);

        state.block = Block::new(PieceKind::O, Rotation::North, 8, 5);
        assert!(!state.apply_action(GameAction::MoveRight, 0));
        assert_eq!(state.block.x, 8);
    }

    #[test]
    fn test_rotation_has_no_wall_kick() {
        let mut state = GameState::new(1, 0);
        // I west occupies column 1 of its box; at x = -1 it hugs the left wall.
        state.block = Block::new(PieceKind::I, Rotation::West, -1, 5);
        assert!(is_valid(&state.playfield, &state.block));

        // Rotating to south would need columns -1..2.
        assert!(!state.apply_action(GameAction::Rotate, 0));
        assert_eq!(state.block.rotation, Rotation::West);
        assert_eq!(state.block.x, -1);
    }

    #[test]
    fn test_gravity_waits_for_fall_delay() {
        let mut state = GameState::new(1, 0);
        let y0 = state.block.y;

        assert!(!state.tick(999));
        assert_eq!(state.block.y, y0);

        assert!(state.tick(1000));
        assert_eq!(state.block.y, y0 + 1);

        // Timer restarted at the last step.
        assert!(!state.tick(1500));
        assert!(state.tick(2000));
        assert_eq!(state.block.y, y0 + 2);
    }

    #[test]
    fn test_hard_drop_locks_on_same_frame_gravity() {
        let mut state = GameState::new(1, 0);
        let kind = state.block.kind;
        let shadow = state.shadow();

        assert!(state.apply_action(GameAction::HardDrop, 10));
        assert_eq!(state.block, shadow);

        // Forced gravity ignores the fall delay.
        assert!(state.tick(10));
        let locked = state
            .playfield
            .cells()
            .iter()
            .filter(|&&cell| cell)
            .count();
        assert_eq!(locked, 4, "{kind:?} should have locked four cells");
        assert_eq!(state.block.y, -1);
    }

    #[test]
    fn test_lock_scores_single_line() {
        let mut state = GameState::new(1, 0);
        fill_row_except(&mut state, 19, &[3, 4, 5, 6]);
        // I north occupies row 1 of its box: resting on the floor at y = 18.
        state.block = Block::new(PieceKind::I, Rotation::North, 3, 18);

        assert!(state.tick(1000));
        assert_eq!(state.score, 1);
        assert!(!state.playfield.is_row_full(19));
        assert!(state.playfield.cells().iter().all(|&cell| !cell));
    }

    #[test]
    fn test_lock_scores_multiple_lines() {
        let mut state = GameState::new(1, 0);
        for y in 16..20 {
            fill_row_except(&mut state, y, &[0]);
        }
        // I east occupies column 2 of its box, rows 0..4.
        state.block = Block::new(PieceKind::I, Rotation::East, -2, 16);

        assert!(state.tick(1000));
        assert_eq!(state.score, 4);
        assert!(state.playfield.cells().iter().all(|&cell| !cell));
    }

    #[test]
    fn test_lock_without_lines_keeps_score() {
        let mut state = GameState::new(1, 0);
        state.score = 3;
        state.block = Block::new(PieceKind::O, Rotation::North, 0, 18);

        assert!(state.tick(1000));
        assert_eq!(state.score, 3);
        assert!(state.playfield.is_occupied(0, 19));
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let mut state = GameState::new(1, 0);
        // Every piece's spawn footprint touches row 0 within columns 3..=6.
        for x in 3..=6 {
            state.playfield_mut().set(x, 0, true);
        }

        assert!(!state.spawn());
        assert_eq!(state.status, GameStatus::GameOver);

        let block = state.block;
        assert!(!state.apply_action(GameAction::MoveLeft, 0));
        assert!(!state.apply_action(GameAction::Rotate, 0));
        assert!(!state.apply_action(GameAction::HardDrop, 0));
        assert!(!state.tick(10_000));
        assert_eq!(state.block, block);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = GameState::new(1, 0);
        for x in 3..=6 {
            state.playfield_mut().set(x, 0, true);
        }
        state.score = 7;
        state.spawn();
        assert!(state.game_over());

        assert!(state.apply_action(GameAction::Restart, 50));
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.episode_id, 1);
        assert!(state.playfield.cells().iter().all(|&cell| !cell));
        assert!(is_valid(&state.playfield, &state.block));
    }

    #[test]
    fn test_update_applies_one_debounced_action() {
        let mut state = GameState::new(1, 0);
        state.block = Block::new(PieceKind::T, Rotation::North, 4, 5);
        let mut pins = Pins::default();

        // Down is bound to "move left" on the rotated display.
        pins.press(Button::Down, 100);
        assert_eq!(state.update(&pins, 100), Some(GameAction::MoveLeft));
        assert_eq!(state.block.x, 3);

        // Still held: suppressed until the repeat interval passes.
        assert_eq!(state.update(&pins, 140), None);
        assert_eq!(state.block.x, 3);
        assert_eq!(state.update(&pins, 300), Some(GameAction::MoveLeft));
        assert_eq!(state.block.x, 2);

        pins.release(Button::Down);
        assert_eq!(state.update(&pins, 320), None);
    }

    #[test]
    fn test_held_back_restarts_once_per_repeat() {
        let mut state = GameState::new(1, 0);
        let mut pins = Pins::default();
        pins.press(Button::Back, 10);

        assert_eq!(state.update(&pins, 10), Some(GameAction::Restart));
        assert_eq!(state.episode_id, 1);
        // The accepted press survives the restart, so holding Back does not
        // start a new game every frame.
        assert_eq!(state.update(&pins, 50), None);
        assert_eq!(state.update(&pins, 90), None);
        assert_eq!(state.episode_id, 1);
        assert_eq!(state.update(&pins, 210), Some(GameAction::Restart));
        assert_eq!(state.episode_id, 2);
    }

    #[test]
    fn test_enter_resolves_but_does_nothing() {
        let mut state = GameState::new(1, 0);
        let before = state.block;
        let mut pins = Pins::default();
        pins.press(Button::Enter, 5);

        assert_eq!(state.update(&pins, 5), None);
        assert_eq!(state.block, before);
    }

    #[test]
    fn test_snapshot_hides_block_on_game_over() {
        let mut state = GameState::new(1, 0);
        let snap = state.snapshot();
        assert_eq!(snap.active, Some(state.block));
        assert_eq!(snap.shadow, Some(state.shadow()));
        assert_eq!(snap.next, state.next);

        for x in 3..=6 {
            state.playfield_mut().set(x, 0, true);
        }
        state.spawn();
        let snap = state.snapshot();
        assert_eq!(snap.status, GameStatus::GameOver);
        assert!(snap.active.is_none());
        assert!(snap.shadow.is_none());
        assert!(snap.field[0][3]);
    }
}
