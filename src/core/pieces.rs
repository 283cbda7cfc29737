//! Pieces module - the rotation-indexed shape table
//!
//! Each piece kind has exactly 4 precomputed rotation states; each state is
//! 4 cell offsets inside a 4x4 bounding frame. The data is fixed (not derived
//! at runtime) and there are no wall-kick adjustments: a rotation either fits
//! in place or is rejected wholesale by the session.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the piece's frame anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets within the 4x4 frame
pub type PieceShape = [CellOffset; 4];

/// Get the shape (cell offsets) for a piece kind and rotation
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::O => o_shape(rotation),
        PieceKind::I => i_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::S => s_shape(rotation),
    }
}

/// O piece (same cells in all rotations, centered in the frame)
fn o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 1), (2, 1), (1, 2), (2, 2)]
}

/// I piece
fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        // N: horizontal, row 1
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        // E: vertical, column 2
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        // S: horizontal, row 2
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        // W: vertical, column 1
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// J piece
fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

/// L piece
fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// T piece
fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

/// Z piece
fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

/// S piece
fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_distinct_cells_in_frame() {
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let cells = shape(kind, rotation);
                for &(x, y) in &cells {
                    assert!(
                        (0..4).contains(&x) && (0..4).contains(&y),
                        "{:?}/{:?} cell ({}, {}) outside 4x4 frame",
                        kind,
                        rotation,
                        x,
                        y
                    );
                }
                for (i, a) in cells.iter().enumerate() {
                    for b in &cells[i + 1..] {
                        assert_ne!(a, b, "{:?}/{:?} has duplicate cells", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn test_o_shape_is_rotation_invariant() {
        let reference = shape(PieceKind::O, Rotation::North);
        for rotation in Rotation::ALL {
            assert_eq!(shape(PieceKind::O, rotation), reference);
        }
    }

    #[test]
    fn test_i_shape_spawn_is_horizontal() {
        let cells = shape(PieceKind::I, Rotation::North);
        assert!(cells.iter().all(|&(_, y)| y == 1));
    }
}
