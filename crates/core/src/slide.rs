//! Slide module - resolves one directional move
//!
//! A move runs as a series of slide passes. Each pass walks the tiles ordered
//! nearest-to-boundary first and advances every tile that may still move by one
//! velocity step. A tile that closes in on an equal, not-yet-merged neighbour
//! is folded into it. The move settles on the first pass that changes nothing.
//!
//! Ordering matters: resolving the front tiles first lets a tile follow into a
//! cell that was vacated earlier in the same pass, which is how chains such as
//! `[2, 2, 4, _]` sliding left end up as `[4, 4, _, _]` in a single move.
//!
//! Each tile receives at most one merge per move, so `[2, 2, 2, 2]` becomes
//! `[4, 4, _, _]` and never `[8, _, _, _]`.

use tracing::debug;

use crate::board::{can_merge, Board};
use crate::error::CoreError;
use crate::tile::Tile;
use crate::types::{Axis, Coord, Direction, GameStatus, SlideParams};

/// Receives the board after every slide pass of a move.
///
/// Frontends use this to animate tiles between their start and settled cells.
pub trait SlideObserver {
    fn on_pass(&mut self, board: &Board, pass: u32);
}

/// Observer that ignores every pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SlideObserver for NoopObserver {
    fn on_pass(&mut self, _board: &Board, _pass: u32) {}
}

impl<F> SlideObserver for F
where
    F: FnMut(&Board, u32),
{
    fn on_pass(&mut self, board: &Board, pass: u32) {
        self(board, pass)
    }
}

/// Bookkeeping for one move, reported in the settle log line.
#[derive(Debug, Default, Clone, Copy)]
struct MoveStats {
    passes: u32,
    merges: u32,
}

impl Board {
    /// Slide every tile toward `direction` until nothing moves, then finalize.
    ///
    /// Finished games are left untouched and report their current status.
    pub fn apply_move(&mut self, direction: Direction) -> Result<GameStatus, CoreError> {
        self.apply_move_observed(direction, &mut NoopObserver)
    }

    /// Like [`Board::apply_move`], reporting the board after every slide pass.
    pub fn apply_move_observed<O>(
        &mut self,
        direction: Direction,
        observer: &mut O,
    ) -> Result<GameStatus, CoreError>
    where
        O: SlideObserver + ?Sized,
    {
        if self.status.is_finished() {
            debug!(%direction, status = self.status.as_str(), "move ignored on finished game");
            return Ok(self.status);
        }

        let params = direction.params();
        for tile in &mut self.tiles {
            tile.merged = false;
        }

        let mut stats = MoveStats::default();
        loop {
            self.sort_for(params);
            let updated = self.slide_pass(params, &mut stats);
            self.rebuild_grid();
            if !updated {
                break;
            }
            stats.passes += 1;
            observer.on_pass(self, stats.passes);
        }

        self.moves += 1;
        debug!(
            %direction,
            passes = stats.passes,
            merges = stats.merges,
            tiles = self.tiles.len(),
            "move settled"
        );
        self.finish_move()
    }

    /// Order the working list so tiles nearest the target boundary come first.
    fn sort_for(&mut self, params: SlideParams) {
        let key = |t: &Tile| match params.axis {
            Axis::X => t.column,
            Axis::Y => t.row,
        };
        if params.reverse {
            self.tiles.sort_by(|a, b| key(b).cmp(&key(a)));
        } else {
            self.tiles.sort_by_key(key);
        }
        self.rebuild_grid();
    }

    /// Run one slide pass. Returns whether any tile advanced or merged.
    fn slide_pass(&mut self, params: SlideParams, stats: &mut MoveStats) -> bool {
        let field = self.config.field_size;
        let vel = self.config.velocity;
        let mut updated = false;

        let mut i = 0;
        while i < self.tiles.len() {
            let tile = self.tiles[i];
            let Some(ahead) = self.ahead_of(tile.coord(), params) else {
                // Already against the boundary.
                i += 1;
                continue;
            };

            let occupant = self.grid[self.cell_index(ahead)];
            match occupant {
                None => self.advance(i, params),
                Some(j) => {
                    let next = self.tiles[j];
                    let gap = gap_along(params, tile.x, tile.y, next.x, next.y);
                    if can_merge(tile.value, next.value) && !tile.merged && !next.merged {
                        if gap > vel {
                            // A leader still in transit holds its old cell; wait
                            // a pass instead of stepping onto it.
                            if self.stepped(tile, params).coord() == next.coord() {
                                i += 1;
                                continue;
                            }
                            self.advance(i, params);
                        } else {
                            self.merge_into(i, j);
                            stats.merges += 1;
                            updated = true;
                            // `i` now names the tile after the one just removed.
                            continue;
                        }
                    } else if gap > field + vel {
                        self.advance(i, params);
                    } else {
                        i += 1;
                        continue;
                    }
                }
            }

            updated = true;
            i += 1;
        }

        updated
    }

    /// The cell one step further in the move direction, if still on the grid.
    fn ahead_of(&self, at: Coord, params: SlideParams) -> Option<Coord> {
        let (column, row) = match params.axis {
            Axis::X => (at.column as isize + params.sign as isize, at.row as isize),
            Axis::Y => (at.column as isize, at.row as isize + params.sign as isize),
        };
        if column < 0 || row < 0 {
            return None;
        }
        let next = Coord::new(column as usize, row as usize);
        self.in_bounds(next).then_some(next)
    }

    /// `tile` after one velocity step, with its cell re-derived.
    fn stepped(&self, mut tile: Tile, params: SlideParams) -> Tile {
        let step = params.sign * self.config.velocity;
        match params.axis {
            Axis::X => tile.shift(step, 0),
            Axis::Y => tile.shift(0, step),
        }
        tile.snap_to_grid(params.round_up, self.config.field_size);
        tile
    }

    /// Move tile `i` one velocity step and keep the cell index current.
    fn advance(&mut self, i: usize, params: SlideParams) {
        let before = self.tiles[i].coord();
        let moved = self.stepped(self.tiles[i], params);
        self.tiles[i] = moved;
        let after = moved.coord();

        if after != before {
            let old = self.cell_index(before);
            if self.grid[old] == Some(i) {
                self.grid[old] = None;
            }
            let new = self.cell_index(after);
            debug_assert!(self.grid[new].is_none(), "tile slid onto occupied {}", after);
            self.grid[new] = Some(i);
        }
    }

    /// Fold moving tile `i` into the tile ahead of it, `j`; `i` is discarded.
    fn merge_into(&mut self, i: usize, j: usize) {
        let target = &mut self.tiles[j];
        target.value *= 2;
        target.merged = true;
        self.score = self.score.saturating_add(target.value);
        self.tiles.remove(i);
        self.rebuild_grid();
    }
}

/// Pixel distance from the tile ahead to this tile, measured against the move
/// direction (positive while the tile trails behind).
#[inline]
fn gap_along(params: SlideParams, x: i32, y: i32, next_x: i32, next_y: i32) -> i32 {
    let delta = match params.axis {
        Axis::X => x - next_x,
        Axis::Y => y - next_y,
    };
    -params.sign * delta
}
