//! PuzzleView: maps engine state into a terminal surface.
//!
//! This module is pure (no I/O) and unit-testable. It renders the board
//! frame with its grid, every locked piece in its spawn hue, the pool piece
//! hovering at the frontend cursor (solid when the spot is free, shaded when
//! it is not), a short-lived fade ghost for engaged pieces that vanished,
//! and the status panel.

use tui_pentomino_core::Session;
use tui_pentomino_types::{GameOutcome, PieceCells};

use crate::surface::{Rgb, Style, Surface};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation state the engine does not own: where the pool piece hovers,
/// and a vanish fade still on screen.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub cursor: (i8, i8),
    pub fade: Option<FadeGhost>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Afterimage of an engaged piece that just vanished (absolute board cells).
#[derive(Debug, Clone, Copy)]
pub struct FadeGhost {
    pub cells: PieceCells,
    pub hue: u16,
}

/// Lightweight terminal renderer for the puzzle.
pub struct PuzzleView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for PuzzleView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl PuzzleView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the session into a fresh surface.
    pub fn render(&self, session: &Session, ui: &ViewState, viewport: Viewport) -> Surface {
        let mut surface = Surface::new(viewport.width, viewport.height);

        let board = session.board();
        let board_px_w = u16::from(board.width()) * self.cell_w;
        let board_px_h = u16::from(board.height()) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = Style {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };

        surface.fill(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        surface.frame(start_x, start_y, frame_w, frame_h, Style::default());

        if start_y > 0 {
            surface.text(
                start_x,
                start_y - 1,
                "Pentomino Puzzle",
                Style::default().bold(),
            );
        }

        // Grid dots on free cells.
        let dot = Style {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        for y in 0..board.height() as i8 {
            for x in 0..board.width() as i8 {
                if !board.occupied(x, y) {
                    self.cell(&mut surface, start_x, start_y, x, y, '·', dot);
                }
            }
        }

        // Locked pieces, colored by spawn hue; the focused one pops.
        for (id, cells) in board.placements() {
            let Some(piece) = session.piece(id) else {
                continue;
            };
            let focused = session.focused() == Some(id);
            let style = Style {
                fg: hue_color(piece.hue, if focused { 1.0 } else { 0.8 }),
                bg: Rgb::new(30, 30, 40),
                bold: focused,
                dim: false,
            };
            for &(x, y) in cells {
                self.cell(&mut surface, start_x, start_y, x, y, '█', style);
            }
        }

        // Fade afterimage of a vanished piece.
        if let Some(ghost) = &ui.fade {
            let style = Style {
                fg: hue_color(ghost.hue, 0.95),
                bg: Rgb::new(30, 30, 40),
                bold: false,
                dim: true,
            };
            for &(x, y) in &ghost.cells {
                if board.in_bounds(x, y) && !board.occupied(x, y) {
                    self.cell(&mut surface, start_x, start_y, x, y, '░', style);
                }
            }
        }

        // Pool piece hovering at the cursor.
        if let Some(id) = session.pool_piece() {
            if let Some(piece) = session.piece(id) {
                let (cx, cy) = ui.cursor;
                let fits = board.fits(piece.kind, piece.rotation, cx, cy);
                let style = Style {
                    fg: hue_color(piece.hue, 0.95),
                    bg: Rgb::new(30, 30, 40),
                    bold: fits,
                    dim: !fits,
                };
                let ch = if fits { '█' } else { '▓' };
                for (dx, dy) in piece.cells() {
                    let (x, y) = (cx + dx, cy + dy);
                    if board.in_bounds(x, y) {
                        self.cell(&mut surface, start_x, start_y, x, y, ch, style);
                    }
                }
            }
        }

        self.side_panel(&mut surface, session, viewport, start_x, start_y, frame_w);

        if session.game_over() {
            let (line1, line2) = match session.outcome() {
                Some(GameOutcome::Win) => ("You win!", "Grid complete."),
                _ => ("You lose.", session.end_reason()),
            };
            self.banner(&mut surface, start_x, start_y, frame_w, frame_h, line1, line2);
        }

        surface
    }

    fn cell(&self, surface: &mut Surface, start_x: u16, start_y: u16, x: i8, y: i8, ch: char, style: Style) {
        if x < 0 || y < 0 {
            return;
        }
        let px = start_x + 1 + x as u16 * self.cell_w;
        let py = start_y + 1 + y as u16 * self.cell_h;
        surface.fill(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn side_panel(
        &self,
        surface: &mut Surface,
        session: &Session,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::default().bold();
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };
        let help = Style::default().dim();

        let mut y = start_y;
        surface.text(panel_x, y, "TIME LEFT", label);
        y += 1;
        surface.text(panel_x, y, &format!("{}s", session.remaining_secs()), value);
        y += 2;

        surface.text(panel_x, y, "ELAPSED", label);
        y += 1;
        surface.text(panel_x, y, &format!("{}s", session.elapsed_secs()), value);
        y += 2;

        surface.text(panel_x, y, "POOL", label);
        y += 1;
        let pool_line = match session.pool_piece().and_then(|id| session.piece(id)) {
            Some(piece) => match session.vanish_secs(piece.id) {
                Some(secs) => format!("{} vanishes in {}s", piece.kind.as_str(), secs),
                None => piece.kind.as_str().to_string(),
            },
            None => "-".to_string(),
        };
        surface.text(panel_x, y, &pool_line, value);
        y += 2;

        for line in [
            "arrows/hjkl move",
            "z/x rotate",
            "enter place",
            "d delete",
            "r restart  q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            surface.text(panel_x, y, line, help);
            y += 1;
        }
    }

    fn banner(
        &self,
        surface: &mut Surface,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line1: &str,
        line2: &str,
    ) {
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let mid_y = start_y + frame_h / 2;
        for (i, line) in [line1, line2].iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(w) / 2;
            surface.text(x, mid_y.saturating_sub(1) + i as u16, line, style);
        }
    }
}

/// HSB-style color: fixed saturation, caller-chosen value.
fn hue_color(hue: u16, value: f32) -> Rgb {
    let h = f32::from(hue % 360) / 60.0;
    let s = 0.75;
    let c = value * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    Rgb::new(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
