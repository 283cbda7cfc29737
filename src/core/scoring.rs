//! Scoring module - line-clear points, level progression, gravity speed
//!
//! Scoring rules:
//! - 1/2/3/4 simultaneous lines award 100/300/500/800 base points,
//!   multiplied by the level at the time of the clear.
//! - More than 4 lines is unreachable with 4-cell pieces; the fallback
//!   formula is `lines * 200` base points.
//! - A lock that clears nothing awards a flat 10 points.
//! - Level is `max(1, 1 + total_lines / 10)`, recomputed after every lock.
//! - The drop interval shrinks 100 ms per level, clamped at 100 ms.

use crate::types::{
    BASE_DROP_MS, DROP_DECAY_PER_LEVEL_MS, DROP_INTERVAL_MIN_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Base points for clearing `lines` rows at once (before the level multiplier)
pub fn line_points(lines: usize) -> u32 {
    if lines < LINE_SCORES.len() {
        LINE_SCORES[lines]
    } else {
        lines as u32 * 200
    }
}

/// Total score awarded for a clear of `lines` rows at `level`
pub fn clear_score(lines: usize, level: u32) -> u32 {
    line_points(lines).saturating_mul(level)
}

/// Level for a cumulative number of cleared lines (1-based)
pub fn level_for_lines(total_lines: u32) -> u32 {
    (1 + total_lines / LINES_PER_LEVEL).max(1)
}

/// Gravity interval for a level (in milliseconds), clamped at the floor
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1).saturating_mul(DROP_DECAY_PER_LEVEL_MS))
        .max(DROP_INTERVAL_MIN_MS)
}
