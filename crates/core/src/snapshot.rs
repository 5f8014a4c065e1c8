use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Coord, GameStatus};

/// Render-facing copy of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub value: u32,
    pub column: usize,
    pub row: usize,
    /// Continuous pixel position; differs from `column * field_size` mid-move.
    pub x: i32,
    pub y: i32,
}

/// Owned, serializable view of a board, taken at move end or after any slide pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub columns: usize,
    pub rows: usize,
    pub field_size: i32,
    pub status: GameStatus,
    pub score: u32,
    pub moves: u32,
    /// Row-major by cell.
    pub tiles: Vec<TileSnapshot>,
}

impl BoardSnapshot {
    pub(crate) fn from_board(board: &Board) -> Self {
        let cfg = board.config();
        let mut tiles: Vec<TileSnapshot> = board
            .tiles()
            .iter()
            .map(|t| TileSnapshot {
                value: t.value,
                column: t.column,
                row: t.row,
                x: t.x,
                y: t.y,
            })
            .collect();
        tiles.sort_by_key(|t| (t.row, t.column));

        Self {
            columns: cfg.columns,
            rows: cfg.rows,
            field_size: cfg.field_size,
            status: board.status(),
            score: board.score(),
            moves: board.moves(),
            tiles,
        }
    }

    /// An empty board of the given shape (useful for renderer tests).
    pub fn empty(columns: usize, rows: usize, field_size: i32) -> Self {
        Self {
            columns,
            rows,
            field_size,
            status: GameStatus::Continue,
            score: 0,
            moves: 0,
            tiles: Vec::new(),
        }
    }

    pub fn value_at(&self, at: Coord) -> Option<u32> {
        self.tiles
            .iter()
            .find(|t| t.column == at.column && t.row == at.row)
            .map(|t| t.value)
    }

    pub fn best_tile(&self) -> u32 {
        self.tiles.iter().map(|t| t.value).max().unwrap_or(0)
    }

    /// Grid of values, 0 for empty cells.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        let mut rows = vec![vec![0; self.columns]; self.rows];
        for t in &self.tiles {
            if t.row < self.rows && t.column < self.columns {
                rows[t.row][t.column] = t.value;
            }
        }
        rows
    }

    pub fn sum(&self) -> u64 {
        self.tiles.iter().map(|t| t.value as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn snapshot_orders_tiles_by_cell() {
        let board = Board::from_tiles(
            GameConfig::default(),
            1,
            &[(Coord::new(3, 3), 8), (Coord::new(1, 0), 2), (Coord::new(0, 2), 4)],
        )
        .unwrap();
        let snap = board.snapshot();
        let cells: Vec<_> = snap.tiles.iter().map(|t| (t.column, t.row)).collect();
        assert_eq!(cells, vec![(1, 0), (0, 2), (3, 3)]);
        assert_eq!(snap.value_at(Coord::new(3, 3)), Some(8));
        assert_eq!(snap.value_at(Coord::new(2, 2)), None);
        assert_eq!(snap.best_tile(), 8);
        assert_eq!(snap.sum(), 14);
        assert_eq!(snap.to_rows()[2], vec![4, 0, 0, 0]);
    }

    #[test]
    fn snapshot_serializes_status_in_lowercase() {
        let snap = BoardSnapshot::empty(4, 4, 100);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["status"], "continue");
        assert_eq!(json["columns"], 4);
        assert!(json["tiles"].as_array().unwrap().is_empty());
    }
}
