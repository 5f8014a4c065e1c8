//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! board snapshots into a plain framebuffer which is then flushed to the
//! terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Render intermediate slide passes, not only settled boards
//! - Allow precise control over the on-screen aspect of a grid field

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_into, TerminalRenderer};
