//! Shape catalog and rotation transform.
//!
//! The twelve pentominoes are fixed data, stored normalized: the minimum x
//! and minimum y across a shape's five cells are both zero. Rotation is the
//! pure 90° clockwise map (x, y) → (y, −x), renormalized after every step so
//! results stay zero-anchored.

use tui_pentomino_types::{PieceCells, PieceKind, Rotation};

/// Base (spawn orientation) cells for a shape.
pub fn base_cells(kind: PieceKind) -> PieceCells {
    match kind {
        PieceKind::F => [(1, 0), (0, 1), (1, 1), (1, 2), (2, 2)],
        PieceKind::I => [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
        PieceKind::L => [(0, 0), (0, 1), (0, 2), (0, 3), (1, 3)],
        PieceKind::P => [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1)],
        PieceKind::N => [(0, 0), (0, 1), (1, 1), (1, 2), (1, 3)],
        PieceKind::T => [(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)],
        PieceKind::U => [(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)],
        PieceKind::V => [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)],
        PieceKind::W => [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)],
        PieceKind::X => [(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
        PieceKind::Y => [(1, 0), (0, 1), (1, 1), (1, 2), (1, 3)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (1, 2), (2, 2)],
    }
}

/// Cells of a shape at the given rotation, zero-anchored.
pub fn cells(kind: PieceKind, rotation: Rotation) -> PieceCells {
    let mut pts = base_cells(kind);
    for _ in 0..rotation.index() {
        for c in &mut pts {
            *c = (c.1, -c.0);
        }
        normalize(&mut pts);
    }
    pts
}

/// Width and height of a cell set's bounding box.
pub fn bounds(cells: &PieceCells) -> (i8, i8) {
    let mut max_x = 0;
    let mut max_y = 0;
    for &(x, y) in cells {
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    (max_x + 1, max_y + 1)
}

/// Re-anchor so the minimum x and y are both zero.
fn normalize(pts: &mut PieceCells) {
    let min_x = pts.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = pts.iter().map(|c| c.1).min().unwrap_or(0);
    for c in pts.iter_mut() {
        c.0 -= min_x;
        c.1 -= min_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cells: PieceCells) -> PieceCells {
        cells.sort_unstable();
        cells
    }

    #[test]
    fn base_cells_are_normalized_and_distinct() {
        for kind in PieceKind::ALL {
            let pts = base_cells(kind);
            let min_x = pts.iter().map(|c| c.0).min().unwrap();
            let min_y = pts.iter().map(|c| c.1).min().unwrap();
            assert_eq!((min_x, min_y), (0, 0), "{:?} not zero-anchored", kind);

            let s = sorted(pts);
            for pair in s.windows(2) {
                assert_ne!(pair[0], pair[1], "{:?} has duplicate cells", kind);
            }
        }
    }

    #[test]
    fn rotation_closure_over_catalog() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let pts = cells(kind, Rotation::from_index(r));
                let min_x = pts.iter().map(|c| c.0).min().unwrap();
                let min_y = pts.iter().map(|c| c.1).min().unwrap();
                assert_eq!((min_x, min_y), (0, 0), "{:?} r{} not zero-anchored", kind, r);

                let s = sorted(pts);
                for pair in s.windows(2) {
                    assert_ne!(pair[0], pair[1], "{:?} r{} lost a cell", kind, r);
                }
            }
        }
    }

    #[test]
    fn rotation_composition_is_additive_mod_4() {
        for kind in PieceKind::ALL {
            for a in 0..4u8 {
                for b in 0..4u8 {
                    // Rotating the a-rotated cell set b more steps must equal
                    // rotating the base (a + b) mod 4 steps, as a set.
                    let mut pts = cells(kind, Rotation::from_index(a));
                    for _ in 0..b {
                        for c in &mut pts {
                            *c = (c.1, -c.0);
                        }
                        normalize(&mut pts);
                    }
                    let combined = cells(kind, Rotation::from_index(a + b));
                    assert_eq!(
                        sorted(pts),
                        sorted(combined),
                        "{:?}: rotate({}) then {} != rotate({})",
                        kind,
                        a,
                        b,
                        (a + b) % 4
                    );
                }
            }
        }
    }

    #[test]
    fn i_piece_turns_between_column_and_row() {
        assert_eq!(
            sorted(cells(PieceKind::I, Rotation::R0)),
            [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]
        );
        assert_eq!(
            sorted(cells(PieceKind::I, Rotation::R90)),
            [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]
        );
        assert_eq!(
            sorted(cells(PieceKind::I, Rotation::R180)),
            sorted(cells(PieceKind::I, Rotation::R0))
        );
    }

    #[test]
    fn x_piece_is_rotation_invariant() {
        let base = sorted(cells(PieceKind::X, Rotation::R0));
        for r in 1..4 {
            assert_eq!(sorted(cells(PieceKind::X, Rotation::from_index(r))), base);
        }
    }

    #[test]
    fn bounds_reflect_bounding_box() {
        assert_eq!(bounds(&cells(PieceKind::I, Rotation::R0)), (1, 5));
        assert_eq!(bounds(&cells(PieceKind::I, Rotation::R90)), (5, 1));
        assert_eq!(bounds(&cells(PieceKind::X, Rotation::R0)), (3, 3));
    }
}
