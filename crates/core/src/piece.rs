//! One live piece: a shape reference plus lifecycle flags.

use tui_pentomino_types::{PieceCells, PieceId, PieceKind, Rotation};

use crate::shapes;

/// A spawned piece. `locked` flips once it is committed to the board and
/// never flips back; a locked piece is removed from the world outright when
/// deleted. `ever_activated` flips on first selection and decides which
/// vanish window applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Spawn-sampled hue in degrees, 0–359. Cosmetic only.
    pub hue: u16,
    locked: bool,
    ever_activated: bool,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, hue: u16) -> Self {
        Self {
            id,
            kind,
            rotation: Rotation::R0,
            hue,
            locked: false,
            ever_activated: false,
        }
    }

    /// Shape cells at the current rotation, zero-anchored.
    pub fn cells(&self) -> PieceCells {
        shapes::cells(self.kind, self.rotation)
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn ever_activated(&self) -> bool {
        self.ever_activated
    }

    /// Quarter-turn the piece. Ignored once locked.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        if self.locked {
            return false;
        }
        self.rotation = self.rotation.turned(clockwise);
        true
    }

    pub(crate) fn activate(&mut self) {
        self.ever_activated = true;
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_piece_is_unlocked_and_untouched() {
        let piece = Piece::new(1, PieceKind::T, 120);
        assert!(!piece.locked());
        assert!(!piece.ever_activated());
        assert_eq!(piece.rotation, Rotation::R0);
    }

    #[test]
    fn rotate_steps_both_ways() {
        let mut piece = Piece::new(1, PieceKind::L, 0);
        assert!(piece.rotate(true));
        assert_eq!(piece.rotation, Rotation::R90);
        assert!(piece.rotate(false));
        assert_eq!(piece.rotation, Rotation::R0);
        assert!(piece.rotate(false));
        assert_eq!(piece.rotation, Rotation::R270);
    }

    #[test]
    fn rotate_is_ignored_once_locked() {
        let mut piece = Piece::new(1, PieceKind::L, 0);
        piece.lock();
        assert!(!piece.rotate(true));
        assert_eq!(piece.rotation, Rotation::R0);
    }

    #[test]
    fn activation_is_sticky() {
        let mut piece = Piece::new(1, PieceKind::F, 0);
        piece.activate();
        piece.activate();
        assert!(piece.ever_activated());
    }
}
