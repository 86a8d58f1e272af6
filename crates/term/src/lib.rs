//! Terminal presentation module.
//!
//! A small, game-oriented rendering layer: views draw into a plain styled
//! surface which is then diffed and flushed to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the state→pixels mapping pure (the view does no I/O)
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod renderer;
pub mod surface;
pub mod view;

pub use renderer::TerminalRenderer;
pub use surface::{Glyph, Rgb, Style, Surface};
pub use view::{FadeGhost, PuzzleView, ViewState, Viewport};
