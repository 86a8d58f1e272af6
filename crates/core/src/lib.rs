//! Puzzle engine — pure, deterministic, and testable.
//!
//! This crate contains every game rule of the pentomino packing puzzle and
//! nothing else. It has **zero dependencies** on UI, timers, or I/O:
//!
//! - **Deterministic**: the same seed and command sequence reproduce the
//!   same game, down to piece hues and vanish windows
//! - **Testable**: every transition is driven by plain method calls
//! - **Portable**: runs in any frontend (terminal, GUI, headless tests)
//!
//! # Module Structure
//!
//! - [`shapes`]: the twelve-pentomino catalog and the rotation transform
//! - [`board`]: occupancy grid with placement validation and records
//! - [`piece`]: per-piece lifecycle flags (locked, ever-activated)
//! - [`scheduler`]: per-piece vanish countdowns with replace/cancel semantics
//! - [`session`]: the controller — spawning, focus, clocks, win/loss
//! - [`rng`]: seeded LCG behind every random decision
//!
//! # Game Rules
//!
//! One unplaced piece exists at a time. It can be rotated freely and locked
//! onto any position where all five cells land on free, in-bounds cells.
//! An unplaced piece left alone vanishes after 5–10 s; once engaged it
//! survives 20–30 s, re-engagement restarting the window. Placement and
//! vanishing reset the elapsed clock and spawn a replacement; covering the
//! whole grid wins, the countdown reaching zero loses.
//!
//! # Example
//!
//! ```
//! use tui_pentomino_core::{Session, SessionConfig};
//! use tui_pentomino_types::Command;
//!
//! let mut session = Session::new(SessionConfig::default(), 12345);
//! session.new_game();
//!
//! let piece = session.pool_piece().unwrap();
//! session.apply(Command::Select { piece });
//! session.apply(Command::Rotate { piece, clockwise: true });
//! let placed = session.apply(Command::Place { piece, x: 0, y: 0 });
//!
//! if placed {
//!     // A replacement piece is already waiting.
//!     assert!(session.pool_piece().is_some());
//! }
//! ```
//!
//! # Timing
//!
//! The engine advances in whole seconds: call
//! [`Session::tick`](session::Session::tick) once per second. All vanish
//! timers ride on that same tick, so a session is single-threaded and
//! run-to-completion by construction.

pub mod board;
pub mod piece;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod shapes;

pub use tui_pentomino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use scheduler::VanishScheduler;
pub use session::{Session, SessionConfig, TIME_UP};
pub use shapes::{base_cells, bounds, cells};
