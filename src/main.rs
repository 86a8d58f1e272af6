//! Terminal pentomino runner (default binary).
//!
//! The pool piece hovers at a board cursor: move it with the arrow (or vim)
//! keys, rotate with z/x, lock it with Enter, delete a placed piece with d,
//! restart with r. Unplaced pieces vanish on their own — quickly if ignored,
//! slowly while being worked.
//!
//! Two cadences drive the loop: a short UI tick for input repeats, fades and
//! redraws, and a one-second engine tick for the clocks and vanish timers.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pentomino::core::{shapes, Session, SessionConfig};
use tui_pentomino::input::{map_key_event, should_quit, KeyRepeater};
use tui_pentomino::term::{FadeGhost, PuzzleView, TerminalRenderer, ViewState, Viewport};
use tui_pentomino::types::{
    Command, InputAction, SessionEvent, ENGINE_TICK_MS, UI_TICK_MS, VANISH_FADE_MS,
};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);
    let mut session = Session::new(SessionConfig::default(), seed);
    session.new_game();

    let view = PuzzleView::default();
    let mut ui = ViewState::new();
    let mut repeater = KeyRepeater::new();
    let mut fade_until: Option<Instant> = None;

    let ui_tick = Duration::from_millis(u64::from(UI_TICK_MS));
    let engine_tick = Duration::from_millis(ENGINE_TICK_MS);
    let mut last_ui_tick = Instant::now();
    let mut last_engine_tick = Instant::now();

    loop {
        drain_events(&mut session, &mut ui, &mut fade_until);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let surface = view.render(&session, &ui, Viewport::new(w, h));
        term.draw(&surface)?;

        // Input with timeout until the next UI tick.
        let timeout = ui_tick
            .checked_sub(last_ui_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = map_key_event(key) {
                            if let Some(action) = repeater.handle_key_press(action) {
                                apply_action(&mut session, &mut ui, action);
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Terminal auto-repeat is ignored; the repeater owns repeats.
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = map_key_event(key) {
                            repeater.handle_key_release(action);
                        }
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // UI tick: held-key repeats and fade expiry.
        if last_ui_tick.elapsed() >= ui_tick {
            last_ui_tick = Instant::now();
            for action in repeater.update(UI_TICK_MS) {
                apply_action(&mut session, &mut ui, action);
            }
            if fade_until.is_some_and(|deadline| Instant::now() >= deadline) {
                fade_until = None;
                ui.fade = None;
            }
        }

        // Engine tick: clocks and vanish timers.
        if last_engine_tick.elapsed() >= engine_tick {
            last_engine_tick = Instant::now();
            session.tick();
        }
    }
}

fn drain_events(session: &mut Session, ui: &mut ViewState, fade_until: &mut Option<Instant>) {
    for event in session.take_events() {
        match event {
            SessionEvent::Spawned { .. } => clamp_cursor(session, ui),
            SessionEvent::Vanished {
                kind,
                rotation,
                hue,
                fade,
                ..
            } => {
                if fade {
                    // Leave a brief afterimage where the piece was hovering.
                    let mut cells = shapes::cells(kind, rotation);
                    for c in &mut cells {
                        c.0 += ui.cursor.0;
                        c.1 += ui.cursor.1;
                    }
                    ui.fade = Some(FadeGhost { cells, hue });
                    *fade_until = Some(Instant::now() + Duration::from_millis(VANISH_FADE_MS));
                }
            }
            _ => {}
        }
    }
}

fn apply_action(session: &mut Session, ui: &mut ViewState, action: InputAction) {
    match action {
        InputAction::Restart => {
            session.apply(Command::NewGame);
            ui.cursor = (0, 0);
            ui.fade = None;
        }
        InputAction::CursorLeft
        | InputAction::CursorRight
        | InputAction::CursorUp
        | InputAction::CursorDown => {
            engage_pool(session);
            let (dx, dy) = match action {
                InputAction::CursorLeft => (-1, 0),
                InputAction::CursorRight => (1, 0),
                InputAction::CursorUp => (0, -1),
                _ => (0, 1),
            };
            ui.cursor.0 += dx;
            ui.cursor.1 += dy;
            clamp_cursor(session, ui);
        }
        InputAction::RotateCw | InputAction::RotateCcw => {
            engage_pool(session);
            if let Some(piece) = session.pool_piece() {
                session.apply(Command::Rotate {
                    piece,
                    clockwise: action == InputAction::RotateCw,
                });
            }
            // The footprint may have changed shape.
            clamp_cursor(session, ui);
        }
        InputAction::Place => {
            engage_pool(session);
            if let Some(piece) = session.pool_piece() {
                session.apply(Command::Place {
                    piece,
                    x: ui.cursor.0,
                    y: ui.cursor.1,
                });
            }
        }
        InputAction::Delete => {
            if let Some(piece) = session.board().piece_at(ui.cursor.0, ui.cursor.1) {
                session.apply(Command::Delete { piece });
            }
        }
    }
}

/// Working the pool piece counts as engagement, exactly like pressing it
/// with the mouse did: focus plus a fresh long vanish window.
fn engage_pool(session: &mut Session) {
    if let Some(piece) = session.pool_piece() {
        session.apply(Command::Select { piece });
    }
}

/// Keep the hovering piece's footprint inside the board.
fn clamp_cursor(session: &Session, ui: &mut ViewState) {
    let board = session.board();
    let mut max_x = board.width() as i8 - 1;
    let mut max_y = board.height() as i8 - 1;
    if let Some(piece) = session.pool_piece().and_then(|id| session.piece(id)) {
        let (w, h) = shapes::bounds(&piece.cells());
        max_x = board.width() as i8 - w;
        max_y = board.height() as i8 - h;
    }
    ui.cursor.0 = ui.cursor.0.clamp(0, max_x.max(0));
    ui.cursor.1 = ui.cursor.1.clamp(0, max_y.max(0));
}
