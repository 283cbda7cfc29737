//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor for new pieces (top-left of the 4x4 frame, board coords)
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Gravity timing (milliseconds)
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_DECAY_PER_LEVEL_MS: u32 = 100;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Level progression
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per simultaneous line clear (index = lines cleared)
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Flat reward for locking a piece without clearing anything
pub const LOCK_SCORE: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    J,
    L,
    T,
    Z,
    S,
}

impl PieceKind {
    /// All seven kinds, in shape-table order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Display letter for previews
    pub fn letter(&self) -> char {
        match self {
            PieceKind::O => 'O',
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
        }
    }
}

/// Rotation states of the 4x4 shape frame (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All four states, in rotation order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (one step through the shape table)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Index into the 4-entry rotation sequence
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Game actions the presentation layer can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Restart,
}

/// Cell on the board (None = empty, Some = locked piece kind tag)
pub type Cell = Option<PieceKind>;
