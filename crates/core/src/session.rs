//! Session controller: spawning, focus, clocks, and win/loss detection.
//!
//! A `Session` owns the board, every live piece, the single-pool-piece
//! invariant (at most one unplaced piece exists at a time), the focus
//! relation (at most one piece holds input focus), and both clocks:
//! `remaining_secs` counts down once per second toward a timeout loss,
//! `elapsed_secs` counts up and resets whenever the board changes hands
//! (a placement or a vanish).
//!
//! Everything runs to completion on one logical thread: a command or a tick
//! finishes all of its transitions before the next one starts. Vanish timers
//! are advanced by the tick itself, and a timer that fires for a piece that
//! got locked in the meantime is checked and ignored rather than relied on
//! to have been cancelled.

use std::collections::HashMap;

use tui_pentomino_types::{
    Command, GameOutcome, PieceId, PieceKind, SessionEvent, BOARD_HEIGHT, BOARD_WIDTH,
    ENGAGED_VANISH_SECS, IDLE_VANISH_SECS, INITIAL_COUNTDOWN_SECS,
};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scheduler::VanishScheduler;

/// Reason string recorded on a timeout loss.
pub const TIME_UP: &str = "Time's up!";

/// Tuning fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub board_width: u8,
    pub board_height: u8,
    pub countdown_secs: u32,
    /// Inclusive vanish window for a never-touched piece, seconds.
    pub idle_vanish_secs: (u32, u32),
    /// Inclusive vanish window once a piece has been engaged, seconds.
    pub engaged_vanish_secs: (u32, u32),
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            countdown_secs: INITIAL_COUNTDOWN_SECS,
            idle_vanish_secs: IDLE_VANISH_SECS,
            engaged_vanish_secs: ENGAGED_VANISH_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    /// Every live piece, placed or not, keyed by id.
    pieces: HashMap<PieceId, Piece>,
    /// The single unplaced piece, when one exists.
    pool_piece: Option<PieceId>,
    /// The piece holding input focus, placed or not.
    focused: Option<PieceId>,
    next_piece_id: PieceId,
    rng: SimpleRng,
    scheduler: VanishScheduler,
    remaining_secs: u32,
    elapsed_secs: u32,
    game_over: bool,
    outcome: Option<GameOutcome>,
    end_reason: &'static str,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Create a session. No piece exists until `new_game` runs.
    pub fn new(config: SessionConfig, seed: u32) -> Self {
        Self {
            config,
            board: Board::new(config.board_width, config.board_height),
            pieces: HashMap::new(),
            pool_piece: None,
            focused: None,
            next_piece_id: 0,
            rng: SimpleRng::new(seed),
            scheduler: VanishScheduler::new(),
            remaining_secs: config.countdown_secs,
            elapsed_secs: 0,
            game_over: false,
            outcome: None,
            end_reason: "",
            events: Vec::new(),
        }
    }

    /// Reset everything and spawn the first piece. Always accepted, game
    /// over or not.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.pieces.clear();
        self.scheduler.clear();
        self.pool_piece = None;
        self.focused = None;
        self.remaining_secs = self.config.countdown_secs;
        self.elapsed_secs = 0;
        self.game_over = false;
        self.outcome = None;
        self.end_reason = "";
        self.events.clear();
        self.spawn_next();
    }

    /// Spawn a fresh pool piece: uniformly random shape, random hue,
    /// spawn rotation, short idle vanish window. No-op while the game is
    /// over or a pool piece already exists.
    pub fn spawn_next(&mut self) -> bool {
        if self.game_over || self.pool_piece.is_some() {
            return false;
        }

        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let hue = self.rng.next_range(360) as u16;
        let id = self.next_piece_id;
        self.next_piece_id = self.next_piece_id.wrapping_add(1);

        self.pieces.insert(id, Piece::new(id, kind, hue));
        self.pool_piece = Some(id);

        let (lo, hi) = self.config.idle_vanish_secs;
        let secs = self.rng.range_inclusive(lo, hi);
        self.scheduler.schedule(id, secs);

        self.events.push(SessionEvent::Spawned { piece: id });
        true
    }

    /// Focus a piece. For an unplaced piece this is engagement: it marks the
    /// piece as activated and restarts its vanish countdown in the longer
    /// window (re-selection keeps doing so, indefinitely). Focusing a locked
    /// piece only moves focus.
    pub fn select(&mut self, id: PieceId) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.pieces.get_mut(&id) else {
            return false;
        };
        if !piece.locked() {
            piece.activate();
            let (lo, hi) = self.config.engaged_vanish_secs;
            let secs = self.rng.range_inclusive(lo, hi);
            self.scheduler.schedule(id, secs);
        }
        self.focused = Some(id);
        true
    }

    /// Quarter-turn an unplaced piece. Pure geometry: no board contact, no
    /// timer reset. Ignored for locked pieces.
    pub fn rotate(&mut self, id: PieceId, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        match self.pieces.get_mut(&id) {
            Some(piece) => piece.rotate(clockwise),
            None => false,
        }
    }

    /// Try to lock a piece onto the board at an anchor cell. On success the
    /// vanish timer is cancelled for good, the piece locks, the elapsed
    /// clock resets, a replacement spawns, and completion is re-checked.
    /// On failure nothing changes and the caller decides what to do with
    /// the piece visually.
    pub fn attempt_place(&mut self, id: PieceId, anchor_x: i8, anchor_y: i8) -> bool {
        if self.game_over {
            return false;
        }
        let Some(piece) = self.pieces.get_mut(&id) else {
            return false;
        };
        if piece.locked() {
            return false;
        }
        let (kind, rotation) = (piece.kind, piece.rotation);
        if !self.board.fits(kind, rotation, anchor_x, anchor_y) {
            return false;
        }

        piece.lock();
        self.scheduler.cancel(id);
        self.board.place(kind, rotation, anchor_x, anchor_y, id);
        self.elapsed_secs = 0;
        if self.pool_piece == Some(id) {
            self.pool_piece = None;
        }
        self.events.push(SessionEvent::Placed { piece: id });

        self.spawn_next();
        self.on_board_changed();
        true
    }

    /// Remove a locked piece from the board and from the world. Does not
    /// spawn a replacement. Ignored for unplaced pieces.
    pub fn delete(&mut self, id: PieceId) -> bool {
        if self.game_over {
            return false;
        }
        match self.pieces.get(&id) {
            Some(piece) if piece.locked() => {}
            _ => return false,
        }

        self.pieces.remove(&id);
        self.board.remove(id);
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.events.push(SessionEvent::Deleted { piece: id });
        self.on_board_changed();
        true
    }

    /// Advance the clocks by one second and fire due vanish timers.
    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        self.elapsed_secs += 1;
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.end_game(GameOutcome::Loss, TIME_UP);
            return;
        }

        for id in self.scheduler.tick() {
            self.vanish(id);
        }
    }

    /// Dispatch a semantic command. Gameplay commands are no-ops once the
    /// game is over; `NewGame` always goes through.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Select { piece } => self.select(piece),
            Command::Rotate { piece, clockwise } => self.rotate(piece, clockwise),
            Command::Place { piece, x, y } => self.attempt_place(piece, x, y),
            Command::Delete { piece } => self.delete(piece),
            Command::NewGame => {
                self.new_game();
                true
            }
        }
    }

    /// Drain the transitions recorded since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn pool_piece(&self) -> Option<PieceId> {
        self.pool_piece
    }

    pub fn focused(&self) -> Option<PieceId> {
        self.focused
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn end_reason(&self) -> &'static str {
        self.end_reason
    }

    /// Seconds left on a piece's vanish countdown, if one is pending.
    pub fn vanish_secs(&self, id: PieceId) -> Option<u32> {
        self.scheduler.remaining(id)
    }

    /// A vanish timer fired. The piece may have been locked since the timer
    /// started; that race resolves here, at fire time.
    fn vanish(&mut self, id: PieceId) {
        let Some(&piece) = self.pieces.get(&id) else {
            return;
        };
        if piece.locked() {
            return;
        }

        self.pieces.remove(&id);
        if self.pool_piece == Some(id) {
            self.pool_piece = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.elapsed_secs = 0;
        self.events.push(SessionEvent::Vanished {
            piece: id,
            kind: piece.kind,
            rotation: piece.rotation,
            hue: piece.hue,
            fade: piece.ever_activated(),
        });
        self.spawn_next();
    }

    /// Win check, run after every placement or deletion.
    fn on_board_changed(&mut self) {
        if self.board.is_complete() {
            self.end_game(GameOutcome::Win, "");
        }
    }

    /// Idempotent terminal transition: stops timers, freezes every piece
    /// (all further gameplay commands bounce off `game_over`).
    fn end_game(&mut self, outcome: GameOutcome, reason: &'static str) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.outcome = Some(outcome);
        self.end_reason = reason;
        self.scheduler.clear();
        self.events.push(SessionEvent::Ended { outcome });
    }

    /// Swap the pool piece's shape. Spawn selection is random; tests that
    /// need a specific tiling override it.
    #[cfg(test)]
    pub(crate) fn set_pool_kind(&mut self, kind: PieceKind) {
        let id = self.pool_piece.expect("no pool piece");
        self.pieces.get_mut(&id).expect("pool piece missing").kind = kind;
    }

    /// Plant a raw vanish timer, bypassing the lifecycle paths that would
    /// normally cancel it.
    #[cfg(test)]
    pub(crate) fn schedule_vanish(&mut self, id: PieceId, secs: u32) {
        self.scheduler.schedule(id, secs);
    }
}
