//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework beyond crossterm's key types.
//! It maps key events into [`crate::types::GameAction`] and provides the
//! cooldown gate that keeps one key press from triggering more than one move.

pub mod cooldown;
pub mod map;

pub use tui_2048_types as types;

pub use cooldown::KeyCooldown;
pub use map::{handle_key_event, should_quit};
