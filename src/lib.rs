//! gridfall - a terminal falling-block puzzle.
//!
//! The engine (`core`) is a pure synchronous state machine; the terminal
//! layer (`term`, `input`, the binary) drives it on timer ticks and key
//! events and re-renders from its read accessors.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
