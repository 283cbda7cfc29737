//! Session module - the game state machine
//!
//! Ties the board, shape table, RNG and scoring together. The session is a
//! pure synchronous state machine: the presentation layer drives it through
//! `tick` and `apply_action` and re-renders from the read accessors after
//! every call that reports a change. Nothing in here blocks, spawns threads
//! or owns a timer; gravity cadence is exported as `drop_interval_ms` data.

use crate::core::pieces::shape;
use crate::core::rng::PieceRng;
use crate::core::scoring::{clear_score, drop_interval_ms, level_for_lines};
use crate::core::Board;
use crate::types::{GameAction, PieceKind, Rotation, LOCK_SCORE, SPAWN_X, SPAWN_Y};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute board coordinates of the 4 occupied cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        shape(self.kind, self.rotation).map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check that no cell of this piece collides with the board
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| !board.is_blocked(x, y))
    }

    /// The same piece with the anchor shifted; no collision check
    fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece rotated one step clockwise; no collision check
    fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

/// Outcome of a single downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDown {
    /// The piece descended one row
    Moved,
    /// The descent was blocked; the piece locked and the next one spawned
    Locked { cleared: u32 },
}

/// Complete game session: board, piece slots, score/level progression
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: Piece,
    next: Piece,
    rng: PieceRng,
    score: u32,
    level: u32,
    lines: u32,
    drop_ms: u32,
    game_over: bool,
}

impl Session {
    /// Start a session with the given RNG seed.
    ///
    /// Both piece slots are drawn fresh; there is no "previous next" at
    /// startup.
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let current = Piece::spawn(rng.draw());
        let next = Piece::spawn(rng.draw());
        Self {
            board: Board::new(),
            current,
            next,
            rng,
            score: 0,
            level: 1,
            lines: 0,
            drop_ms: drop_interval_ms(1),
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Piece {
        self.current
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity cadence. The caller owns the timer and must re-arm
    /// it whenever this value changes (it only changes on level-up).
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_current(&mut self, piece: Piece) {
        self.current = piece;
    }

    /// One gravity step. Returns whether anything changed.
    pub fn tick(&mut self) -> bool {
        self.step_down().is_some()
    }

    /// Attempt to move the current piece down one row.
    ///
    /// A blocked descent triggers lock-and-advance instead of moving.
    /// Returns None when the session is already over.
    pub fn step_down(&mut self) -> Option<StepDown> {
        if self.game_over {
            return None;
        }

        let moved = self.current.translated(0, 1);
        if moved.fits(&self.board) {
            self.current = moved;
            Some(StepDown::Moved)
        } else {
            let cleared = self.lock_and_advance();
            Some(StepDown::Locked { cleared })
        }
    }

    /// Move the current piece one column left. Blocked moves are no-ops.
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    /// Move the current piece one column right. Blocked moves are no-ops.
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, dx: i8) -> bool {
        if self.game_over {
            return false;
        }
        let moved = self.current.translated(dx, 0);
        if moved.fits(&self.board) {
            self.current = moved;
            true
        } else {
            // Horizontal collisions never trigger locking.
            false
        }
    }

    /// Rotate the current piece one step clockwise.
    ///
    /// There is no wall-kick search: if the rotated cells collide the
    /// rotation is discarded and the piece is left untouched.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let rotated = self.current.rotated();
        if rotated.fits(&self.board) {
            self.current = rotated;
            true
        } else {
            false
        }
    }

    /// Drop the current piece straight down until it locks.
    ///
    /// Bounded by the board height: every Moved step consumes one row of
    /// vertical room. Returns false only when the session is already over.
    pub fn hard_drop(&mut self) -> bool {
        loop {
            match self.step_down() {
                Some(StepDown::Moved) => continue,
                Some(StepDown::Locked { .. }) => return true,
                None => return false,
            }
        }
    }

    /// Reset the whole session: empty board, zeroed counters, both piece
    /// slots re-drawn. The RNG is reseeded from its current state so the
    /// next game gets a different sequence. Allowed in any state.
    pub fn restart(&mut self) {
        *self = Self::new(self.rng.state());
    }

    /// Apply a presentation-layer action. Returns whether state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.step_down().is_some(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Lock the current piece, collapse full rows, score, and promote the
    /// next piece. Sets `game_over` when the promoted piece has no legal
    /// position (the stack reached the spawn rows); the board is left as-is
    /// in that case.
    fn lock_and_advance(&mut self) -> u32 {
        self.board.lock(&self.current.cells(), self.current.kind);

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            // Level multiplier uses the level at the time of the clear.
            self.score = self.score.saturating_add(clear_score(cleared, self.level));
            self.lines += cleared as u32;
        } else {
            self.score = self.score.saturating_add(LOCK_SCORE);
        }
        self.level = level_for_lines(self.lines);
        self.drop_ms = drop_interval_ms(self.level);

        self.current = self.next;
        self.next = Piece::spawn(self.rng.draw());
        if !self.current.fits(&self.board) {
            self.game_over = true;
        }

        cleared as u32
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
