//! Per-piece vanish timers.
//!
//! Scheduling a duration for a piece id replaces any pending timer for that
//! same id; placing or deleting a piece cancels its timer for good. Timers
//! advance in whole seconds, driven by the session tick on the same logical
//! thread as every other transition, so there is no cancellation race to
//! guard against here — the session still re-checks lock state when a timer
//! fires, because a fire after the triggering condition stopped holding must
//! be tolerated.

use arrayvec::ArrayVec;

use tui_pentomino_types::PieceId;

/// Upper bound on timers due in a single tick. Normally a single unplaced
/// piece exists at a time, so this is generous.
pub const MAX_DUE: usize = 8;

#[derive(Debug, Clone, Default)]
pub struct VanishScheduler {
    pending: Vec<(PieceId, u32)>,
}

impl VanishScheduler {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Start (or restart) the countdown for a piece.
    pub fn schedule(&mut self, piece: PieceId, secs: u32) {
        debug_assert!(secs > 0, "zero-length vanish timer");
        self.cancel(piece);
        self.pending.push((piece, secs));
    }

    /// Drop any pending countdown for a piece. No-op if none exists.
    pub fn cancel(&mut self, piece: PieceId) {
        self.pending.retain(|&(id, _)| id != piece);
    }

    /// Seconds left on a piece's countdown, if one is pending.
    pub fn remaining(&self, piece: PieceId) -> Option<u32> {
        self.pending
            .iter()
            .find(|&&(id, _)| id == piece)
            .map(|&(_, secs)| secs)
    }

    /// Advance all countdowns by one second and collect the ids that expired.
    pub fn tick(&mut self) -> ArrayVec<PieceId, MAX_DUE> {
        let mut due = ArrayVec::new();
        for entry in &mut self.pending {
            entry.1 -= 1;
            if entry.1 == 0 {
                let _ = due.try_push(entry.0);
            }
        }
        self.pending.retain(|&(_, secs)| secs > 0);
        due
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
