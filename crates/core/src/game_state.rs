//! Game state module - the piece lifecycle
//!
//! Ties the board, the active piece and the piece generator together:
//!
//! ```text
//! SPAWNING -> FALLING -> (LOCKING -> CLEARING -> SPAWNING) | GAME_OVER
//! ```
//!
//! Every move is validated with a collision probe before it commits; a blocked
//! move is a no-op, never an error. Locking only happens on the gravity path.

use log::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceGenerator;
use crate::shapes::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{ColorId, GameAction, LockEvent, FALL_INTERVAL_MS};

/// Externally visible lifecycle phase.
///
/// Locking and clearing happen inside a single gravity step, so they are
/// never observed between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No piece yet (before `start`).
    Spawning,
    /// A piece is falling and accepts commands.
    Falling,
    /// Terminal: a freshly spawned piece collided.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    generator: PieceGenerator,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    last_event: Option<LockEvent>,
    fall_timer_ms: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game on a pre-filled board. No piece is spawned until `start`.
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            generator: PieceGenerator::new(seed),
            piece_id: 0,
            last_event: None,
            fall_timer_ms: 0,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_next();
    }

    /// Throw away the board and start over. The piece stream continues.
    pub fn restart(&mut self) {
        info!("restarting after {} pieces", self.piece_id);
        let generator = self.generator.clone();
        *self = Self::with_board(0, Board::new());
        self.generator = generator;
        self.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.active.is_some() {
            GamePhase::Falling
        } else {
            GamePhase::Spawning
        }
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn the next piece from the generator.
    /// Nothing is drawn once the game is over.
    pub fn spawn_next(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let (shape, color) = self.generator.next_piece();
        self.spawn(&shape, color)
    }

    /// Spawn a specific shape at the centered spawn position. Marks the game
    /// as started.
    ///
    /// If the new piece collides where it appears, the game is over. The piece
    /// is kept as the active piece for the final frame but is never merged.
    pub fn spawn(&mut self, shape: &Shape, color: ColorId) -> bool {
        if self.game_over {
            return false;
        }

        let piece = Piece::spawn(shape, color);
        self.active = Some(piece);
        self.started = true;

        if self.board.check_collision(&piece, (0, 0)) {
            self.game_over = true;
            info!(
                "game over: {:?} cannot spawn at ({}, {}) after {} pieces",
                shape.kind(),
                piece.row,
                piece.col,
                self.piece_id
            );
            return false;
        }

        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(
            "spawned piece {} {:?} color {} at ({}, {})",
            self.piece_id,
            shape.kind(),
            color.index(),
            piece.row,
            piece.col
        );
        true
    }

    /// Move the active piece by `(drow, dcol)` if the target is clear.
    pub(crate) fn try_move(&mut self, drow: i8, dcol: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.check_collision(&active, (drow, dcol)) {
            return false;
        }

        self.active = Some(active.translated(drow, dcol));
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.apply_action(GameAction::MoveLeft)
    }

    pub fn move_right(&mut self) -> bool {
        self.apply_action(GameAction::MoveRight)
    }

    /// Manual one-row drop. A blocked soft drop does nothing; it never locks.
    pub fn soft_drop(&mut self) -> bool {
        self.apply_action(GameAction::SoftDrop)
    }

    /// Rotate clockwise about the fixed anchor.
    ///
    /// If the rotated matrix collides, the piece is rotated three more times,
    /// which restores the original matrix. No kicks are tried.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotate();
        if self.board.check_collision(&rotated, (0, 0)) {
            self.active = Some(rotated.rotated(3));
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action.offset() {
            Some((drow, dcol)) => self.try_move(drow, dcol),
            None => self.rotate(),
        }
    }

    /// Advance the fall timer by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds `FALL_INTERVAL_MS` the timer resets
    /// and the piece falls one row, or locks if it cannot. Returns true when a
    /// gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || !self.started {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms <= FALL_INTERVAL_MS {
            return false;
        }
        self.fall_timer_ms = 0;

        if !self.try_move(1, 0) {
            self.lock_piece();
        }
        true
    }

    /// One frame: apply queued commands in arrival order, then gravity.
    pub fn step(&mut self, actions: &[GameAction], elapsed_ms: u32) -> bool {
        for &action in actions {
            self.apply_action(action);
        }
        self.tick(elapsed_ms)
    }

    /// LOCKING -> CLEARING -> SPAWNING.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active);

        let cleared = self.board.clear_full_rows();
        if !cleared.is_empty() {
            debug!("cleared rows {:?}", cleared.as_slice());
        }

        self.fall_timer_ms = 0;
        let locked_id = self.piece_id;
        let spawned = self.spawn_next();

        self.last_event = Some(LockEvent {
            piece_id: locked_id,
            lines_cleared: cleared.len() as u32,
            topped_out: !spawned,
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
