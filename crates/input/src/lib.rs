//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_pentomino_types::InputAction`] and
//! provides a hold-to-repeat handler for cursor movement, suitable for
//! terminal environments (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use tui_pentomino_types as types;

pub use handler::KeyRepeater;
pub use map::{map_key_event, should_quit};
