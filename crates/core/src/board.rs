//! Board module - owns the tiles and the cell index over them
//!
//! Tiles live in a single ordered list (the working list a move walks through).
//! A flat, row-major `grid` maps each cell to the index of the tile occupying it,
//! so neighbour lookups during a slide are a single array read.
//!
//! Move resolution itself lives in [`crate::slide`]; this module covers
//! construction, spawning, terminal-state checks and read access.

use tracing::{info, trace};

use crate::config::{GameConfig, LossRule};
use crate::error::CoreError;
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;
use crate::tile::Tile;
use crate::types::{Coord, GameStatus, INITIAL_VALUE, SPAWN_VALUES};

/// Largest value a tile may hold and still be doubled by a merge.
pub const MAX_TILE_VALUE: u32 = u32::MAX / 2;

#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) config: GameConfig,
    /// Working list; ordered by the sort key of the last move.
    pub(crate) tiles: Vec<Tile>,
    /// Row-major `row * columns + column` -> index into `tiles`.
    pub(crate) grid: Vec<Option<usize>>,
    pub(crate) rng: SimpleRng,
    pub(crate) status: GameStatus,
    pub(crate) score: u32,
    pub(crate) moves: u32,
}

impl Board {
    /// Create a board with `initial_tiles` value-2 tiles at distinct random cells.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, CoreError> {
        config.validate()?;
        let mut board = Self::empty(config, seed);
        board.place_initial_tiles()?;
        Ok(board)
    }

    /// Create a board from an explicit position.
    ///
    /// Useful for tests and scripted play. Rejects off-grid or duplicate cells and
    /// values that are not a power of two in `2..=MAX_TILE_VALUE`.
    pub fn from_tiles(
        config: GameConfig,
        seed: u32,
        tiles: &[(Coord, u32)],
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let mut board = Self::empty(config, seed);
        for &(at, value) in tiles {
            if !board.in_bounds(at) || board.grid[board.cell_index(at)].is_some() {
                return Err(CoreError::InvalidPlacement(at));
            }
            if value < 2 || !value.is_power_of_two() || value > MAX_TILE_VALUE {
                return Err(CoreError::InvalidTileValue { at, value });
            }
            board.insert(Tile::new(value, at, board.config.field_size));
        }
        Ok(board)
    }

    fn empty(config: GameConfig, seed: u32) -> Self {
        let cells = config.cell_count();
        Self {
            config,
            tiles: Vec::with_capacity(cells),
            grid: vec![None; cells],
            rng: SimpleRng::new(seed),
            status: GameStatus::Continue,
            score: 0,
            moves: 0,
        }
    }

    /// Throw the current game away and start over.
    ///
    /// The RNG keeps running, so the new game is not a replay of the old one.
    pub fn reset(&mut self) -> Result<(), CoreError> {
        self.tiles.clear();
        self.grid.fill(None);
        self.status = GameStatus::Continue;
        self.score = 0;
        self.moves = 0;
        self.place_initial_tiles()?;
        info!(rng_state = self.rng.state(), "board reset");
        Ok(())
    }

    fn place_initial_tiles(&mut self) -> Result<(), CoreError> {
        for _ in 0..self.config.initial_tiles {
            let at = self.pick_empty_coordinate()?;
            self.insert(Tile::new(INITIAL_VALUE, at, self.config.field_size));
        }
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Sum of every value produced by a merge this game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Settled moves applied this game.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() >= self.config.cell_count()
    }

    pub fn tile_at(&self, at: Coord) -> Option<&Tile> {
        if !self.in_bounds(at) {
            return None;
        }
        self.grid[self.cell_index(at)].map(|i| &self.tiles[i])
    }

    pub fn best_tile(&self) -> u32 {
        self.tiles.iter().map(|t| t.value).max().unwrap_or(0)
    }

    /// Whether any two orthogonally adjacent tiles share a value.
    pub fn has_available_merges(&self) -> bool {
        self.tiles.iter().any(|t| {
            let right = Coord::new(t.column + 1, t.row);
            let below = Coord::new(t.column, t.row + 1);
            [right, below]
                .into_iter()
                .filter_map(|at| self.tile_at(at))
                .any(|n| can_merge(t.value, n.value))
        })
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(self)
    }

    #[inline]
    pub(crate) fn in_bounds(&self, at: Coord) -> bool {
        at.column < self.config.columns && at.row < self.config.rows
    }

    #[inline(always)]
    pub(crate) fn cell_index(&self, at: Coord) -> usize {
        at.row * self.config.columns + at.column
    }

    fn insert(&mut self, tile: Tile) {
        let idx = self.cell_index(tile.coord());
        self.grid[idx] = Some(self.tiles.len());
        self.tiles.push(tile);
    }

    /// Re-index every cell from the working list.
    pub(crate) fn rebuild_grid(&mut self) {
        self.grid.fill(None);
        for (i, tile) in self.tiles.iter().enumerate() {
            let idx = tile.row * self.config.columns + tile.column;
            debug_assert!(self.grid[idx].is_none(), "two tiles on {}", tile.coord());
            self.grid[idx] = Some(i);
        }
    }

    /// Uniformly sample cells until an empty one turns up.
    ///
    /// Fails fast instead of spinning forever when the board is full.
    pub fn pick_empty_coordinate(&mut self) -> Result<Coord, CoreError> {
        if self.is_full() {
            return Err(CoreError::BoardFull {
                columns: self.config.columns,
                rows: self.config.rows,
            });
        }
        loop {
            let at = Coord::new(
                self.rng.next_index(self.config.columns),
                self.rng.next_index(self.config.rows),
            );
            if self.grid[self.cell_index(at)].is_none() {
                return Ok(at);
            }
        }
    }

    /// Place one new tile (2 or 4, uniformly) on a random empty cell.
    pub fn spawn_tile(&mut self) -> Result<Coord, CoreError> {
        let at = self.pick_empty_coordinate()?;
        let value = self.rng.choose(&SPAWN_VALUES);
        self.insert(Tile::new(value, at, self.config.field_size));
        trace!(%at, value, "spawned tile");
        Ok(at)
    }

    /// Decide the outcome of a settled move and spawn when play continues.
    ///
    /// The loss check runs first: under [`LossRule::BoardFull`] a full board is
    /// lost even if an adjacent pair could still merge.
    pub(crate) fn finish_move(&mut self) -> Result<GameStatus, CoreError> {
        if self.is_full() {
            let lost = match self.config.loss_rule {
                LossRule::BoardFull => true,
                LossRule::NoMovesLeft => !self.has_available_merges(),
            };
            if lost {
                self.status = GameStatus::Lost;
                info!(score = self.score, moves = self.moves, best = self.best_tile(), "game lost");
                return Ok(self.status);
            }
        }

        if let Some(win) = self.config.win_value {
            if self.tiles.iter().any(|t| t.value >= win) {
                self.status = GameStatus::Won;
                info!(score = self.score, moves = self.moves, "game won");
                return Ok(self.status);
            }
        }

        if !self.is_full() {
            self.spawn_tile()?;
        }
        Ok(GameStatus::Continue)
    }
}

/// Equal values merge unless doubling would leave `u32`.
#[inline]
pub(crate) fn can_merge(a: u32, b: u32) -> bool {
    a == b && a <= MAX_TILE_VALUE
}
