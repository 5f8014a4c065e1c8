//! Errors surfaced by the core engine.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A configuration value violates an engine invariant.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A spawn was requested with no empty cell left.
    ///
    /// The loss check runs before spawning, so this means an invariant broke.
    #[error("no empty cell left on a {columns}x{rows} board")]
    BoardFull { columns: usize, rows: usize },

    /// A hand-built position has two tiles on one cell or a cell off the grid.
    #[error("invalid tile placement at {0}")]
    InvalidPlacement(tui_2048_types::Coord),

    /// A hand-built tile is not a power of two in `2..=MAX_TILE_VALUE`.
    #[error("invalid tile value {value} at {at}")]
    InvalidTileValue {
        at: tui_2048_types::Coord,
        value: u32,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
