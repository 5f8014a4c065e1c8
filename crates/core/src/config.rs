//! Game configuration.
//!
//! Every tunable the engine reads lives here, handed to [`Board::new`](crate::Board::new)
//! once and never mutated afterwards. Files are TOML with every key optional:
//!
//! ```toml
//! columns = 5
//! rows = 5
//! velocity = 25
//! win_value = 4096
//! loss_rule = "no_moves_left"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::{COLUMNS, FIELD_SIZE, INITIAL_TILES, MOVE_VEL, ROWS, WIN_VALUE};

/// Upper bound on `columns` and `rows`.
pub const MAX_GRID_SIDE: usize = 64;

/// When a settled move on a full board ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossRule {
    /// Any full board loses, even if an adjacent equal pair could still merge.
    #[default]
    BoardFull,
    /// A full board loses only when no adjacent equal pair is left.
    NoMovesLeft,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    /// Edge length of one field in logical pixels.
    pub field_size: i32,
    /// Pixels advanced per slide pass; must divide `field_size`.
    pub velocity: i32,
    /// `None` plays the endless variant without win detection.
    pub win_value: Option<u32>,
    pub initial_tiles: usize,
    pub loss_rule: LossRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            rows: ROWS,
            field_size: FIELD_SIZE,
            velocity: MOVE_VEL,
            win_value: Some(WIN_VALUE),
            initial_tiles: INITIAL_TILES,
            loss_rule: LossRule::BoardFull,
        }
    }
}

impl GameConfig {
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Check the invariants the slide resolution relies on.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(CoreError::InvalidConfig(format!(
                "grid must be at least 1x1, got {}x{}",
                self.columns, self.rows
            )));
        }
        if self.columns > MAX_GRID_SIDE || self.rows > MAX_GRID_SIDE {
            return Err(CoreError::InvalidConfig(format!(
                "grid may be at most {0}x{0}, got {1}x{2}",
                MAX_GRID_SIDE, self.columns, self.rows
            )));
        }
        if self.field_size <= 0 || self.velocity <= 0 {
            return Err(CoreError::InvalidConfig(format!(
                "field_size ({}) and velocity ({}) must be positive",
                self.field_size, self.velocity
            )));
        }
        // Tiles only re-align to cell origins when every step lands on the pixel grid.
        if self.field_size % self.velocity != 0 {
            return Err(CoreError::InvalidConfig(format!(
                "velocity {} does not divide field_size {}",
                self.velocity, self.field_size
            )));
        }
        if self.initial_tiles == 0 || self.initial_tiles >= self.cell_count() {
            return Err(CoreError::InvalidConfig(format!(
                "initial_tiles must be in 1..{}, got {}",
                self.cell_count(),
                self.initial_tiles
            )));
        }
        if let Some(win) = self.win_value {
            if win <= 2 || !win.is_power_of_two() {
                return Err(CoreError::InvalidConfig(format!(
                    "win_value must be a power of two above 2, got {}",
                    win
                )));
            }
        }
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CoreError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cell_count(), 16);
        assert_eq!(cfg.loss_rule, LossRule::BoardFull);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = GameConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let cfg = GameConfig::from_toml_str(
            "columns = 5\nrows = 3\nvelocity = 25\nloss_rule = \"no_moves_left\"\n",
        )
        .unwrap();
        assert_eq!(cfg.columns, 5);
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.velocity, 25);
        assert_eq!(cfg.field_size, FIELD_SIZE);
        assert_eq!(cfg.loss_rule, LossRule::NoMovesLeft);
    }

    #[test]
    fn rejects_velocity_not_dividing_field_size() {
        let cfg = GameConfig {
            velocity: 30,
            ..GameConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_bad_win_value_and_tile_counts() {
        let bad_win = GameConfig {
            win_value: Some(1000),
            ..GameConfig::default()
        };
        assert!(bad_win.validate().is_err());

        let too_many = GameConfig {
            initial_tiles: 16,
            ..GameConfig::default()
        };
        assert!(too_many.validate().is_err());

        let empty_grid = GameConfig {
            columns: 0,
            ..GameConfig::default()
        };
        assert!(empty_grid.validate().is_err());
    }

    #[test]
    fn grid_side_is_capped() {
        let largest = GameConfig {
            columns: MAX_GRID_SIDE,
            rows: MAX_GRID_SIDE,
            ..GameConfig::default()
        };
        assert!(largest.validate().is_ok());

        let err = GameConfig::from_toml_str("columns = 65\n").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
        assert!(err.to_string().contains("64x64"));
    }

    #[test]
    fn unknown_keys_are_a_parse_error() {
        let err = GameConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
