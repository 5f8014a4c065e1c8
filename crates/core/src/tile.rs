//! Tile module - one numbered cell.
//!
//! A tile carries two positions: the grid cell it currently occupies and a
//! continuous pixel position that advances in fixed steps while a move resolves.
//! The cell is always derived from the pixel position, never the other way round,
//! except when the tile is created.

use crate::types::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u32,
    pub column: usize,
    pub row: usize,
    pub x: i32,
    pub y: i32,
    /// Received a merge during the current move.
    pub merged: bool,
}

impl Tile {
    /// Create a tile aligned to the pixel origin of `at`.
    pub fn new(value: u32, at: Coord, field_size: i32) -> Self {
        Self {
            value,
            column: at.column,
            row: at.row,
            x: at.column as i32 * field_size,
            y: at.row as i32 * field_size,
            merged: false,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.column, self.row)
    }

    /// Advance the pixel position. No bounds checking; the board only calls this
    /// while the tile is allowed to advance.
    #[inline]
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Re-derive the grid cell from the pixel position.
    ///
    /// Rounds up when sliding toward the left/top boundary and down otherwise, so
    /// a tile in transit keeps the cell it left until it lands on the next origin.
    pub fn snap_to_grid(&mut self, round_up: bool, field_size: i32) {
        let (column, row) = if round_up {
            (ceil_div(self.x, field_size), ceil_div(self.y, field_size))
        } else {
            (self.x.div_euclid(field_size), self.y.div_euclid(field_size))
        };
        // Positions never leave the grid; the clamp only keeps the cast total.
        self.column = column.max(0) as usize;
        self.row = row.max(0) as usize;
    }

    /// Whether the pixel position sits exactly on the origin of its cell.
    pub fn is_aligned(&self, field_size: i32) -> bool {
        self.x == self.column as i32 * field_size && self.y == self.row as i32 * field_size
    }
}

#[inline]
fn ceil_div(a: i32, b: i32) -> i32 {
    -((-a).div_euclid(b))
}
