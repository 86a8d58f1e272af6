//! TUI Pentomino (workspace facade crate).
//!
//! This package keeps the `tui_pentomino::{core,input,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_pentomino_core as core;
pub use tui_pentomino_input as input;
pub use tui_pentomino_term as term;
pub use tui_pentomino_types as types;
