//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules: tiles, the board, move resolution,
//! terminal-state detection and tile spawning. It has **no dependencies** on
//! terminal I/O, so the same engine drives the TUI, the headless JSON driver
//! and the tests.
//!
//! - **Deterministic**: the same seed and the same moves produce the same game
//! - **Animated**: tiles carry a pixel position that advances one velocity step
//!   per slide pass, and every pass can be observed through [`SlideObserver`]
//! - **Configurable**: grid size, field size, velocity, win value and loss rule
//!   come from an immutable [`GameConfig`]
//!
//! # Module Structure
//!
//! - [`board`]: tile storage, cell index, spawning and terminal checks
//! - [`slide`]: directional slide/merge resolution
//! - [`tile`]: a single numbered tile with grid and pixel coordinates
//! - [`config`]: [`GameConfig`] and TOML loading
//! - [`rng`]: seeded LCG used for placement
//! - [`snapshot`]: owned, serializable board views for renderers
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, GameConfig};
//! use tui_2048_types::{Direction, GameStatus};
//!
//! let mut board = Board::new(GameConfig::default(), 12345).unwrap();
//! assert_eq!(board.len(), 2);
//!
//! let status = board.apply_move(Direction::Left).unwrap();
//! assert_eq!(status, GameStatus::Continue);
//! assert_eq!(board.moves(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod rng;
pub mod slide;
pub mod snapshot;
pub mod tile;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MAX_TILE_VALUE};
pub use config::{GameConfig, LossRule, MAX_GRID_SIDE};
pub use error::CoreError;
pub use rng::SimpleRng;
pub use slide::{NoopObserver, SlideObserver};
pub use snapshot::{BoardSnapshot, TileSnapshot};
pub use tile::Tile;
