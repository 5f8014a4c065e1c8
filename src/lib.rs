//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_2048::{core,input,term,types}` and
//! hosts the glue both binaries share: configuration/logging setup, the
//! animation playback queue and the headless JSON-lines session.

pub mod headless;
pub mod playback;
pub mod setup;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
