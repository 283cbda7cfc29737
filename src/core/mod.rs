//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O and no suspension points; the
//! presentation layer drives it synchronously and reads state back out.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use board::Board;
pub use pieces::shape;
pub use rng::{PieceRng, SimpleRng};
pub use session::{Piece, Session, StepDown};
