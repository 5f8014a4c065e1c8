//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! They are plain data with no game logic attached, so they can be shared by the
//! core engine, the terminal frontend and the headless JSON driver alike.
//!
//! # Board Dimensions
//!
//! Classic 2048 playfield:
//!
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - **Rows**: 4 (indexed 0-3, top to bottom)
//! - **Field size**: 100 logical pixels per cell
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `COLUMNS` | 4 | Grid width in cells |
//! | `ROWS` | 4 | Grid height in cells |
//! | `FIELD_SIZE` | 100 | Logical pixels per cell edge |
//! | `MOVE_VEL` | 20 | Pixels a tile advances per slide pass |
//! | `WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `INITIAL_TILES` | 2 | Tiles placed on a fresh board |
//! | `KEY_WAIT_MS` | 150 | Input cooldown between accepted keys |
//! | `TICK_MS` | 16 | Frontend fixed timestep (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, COLUMNS, ROWS};
//!
//! let dir: Direction = "left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!("sideways".parse::<Direction>().is_err());
//!
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(COLUMNS * ROWS, 16);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid width in cells (4 columns)
pub const COLUMNS: usize = 4;

/// Grid height in cells (4 rows)
pub const ROWS: usize = 4;

/// Edge length of one grid field in logical pixels
pub const FIELD_SIZE: i32 = 100;

/// Pixels a tile advances per slide pass. Must divide `FIELD_SIZE`.
pub const MOVE_VEL: i32 = 20;

/// Reaching this tile value wins the game
pub const WIN_VALUE: u32 = 2048;

/// Number of tiles on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Value of the tiles on a fresh board
pub const INITIAL_VALUE: u32 = 2;

/// Values a spawned tile is uniformly drawn from
pub const SPAWN_VALUES: [u32; 2] = [2, 4];

/// Cooldown after an accepted key press, in milliseconds
pub const KEY_WAIT_MS: u32 = 150;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Grid coordinate: `column` in `[0, columns)`, `row` in `[0, rows)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub column: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Axis a slide travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Per-direction slide parameters, derived once per move.
///
/// - `sign`: -1 toward the left/top boundary, +1 toward the right/bottom one
/// - `round_up`: ceil (true) or floor (false) when snapping pixels to cells
/// - `reverse`: process tiles in descending sort-key order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideParams {
    pub axis: Axis,
    pub sign: i32,
    pub round_up: bool,
    pub reverse: bool,
}

const SLIDE_TABLE: [SlideParams; 4] = [
    // Left
    SlideParams { axis: Axis::X, sign: -1, round_up: true, reverse: false },
    // Right
    SlideParams { axis: Axis::X, sign: 1, round_up: false, reverse: true },
    // Up
    SlideParams { axis: Axis::Y, sign: -1, round_up: true, reverse: false },
    // Down
    SlideParams { axis: Axis::Y, sign: 1, round_up: false, reverse: true },
];

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Slide parameters for this direction
    pub fn params(self) -> SlideParams {
        SLIDE_TABLE[self as usize]
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unknown direction symbol was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Case-insensitive full names only. Single letters are left to the key
    /// map, where `r` means restart and `d` means right.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Outcome of a settled move
///
/// - **Continue**: a tile was spawned, play goes on
/// - **Lost**: the board filled up
/// - **Won**: a tile reached the win value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Continue,
    Lost,
    Won,
}

impl GameStatus {
    /// Finished games ignore further moves until reset
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::Continue)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Continue => "continue",
            GameStatus::Lost => "lost",
            GameStatus::Won => "won",
        }
    }
}

/// Actions that can be applied to a game
///
/// Produced by the key mapper and by the headless driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles toward a boundary
    Move(Direction),
    /// Throw the board away and start over
    Restart,
}

impl GameAction {
    /// Parse action from camelCase string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}
