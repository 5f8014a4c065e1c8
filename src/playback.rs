//! Queue of intermediate board snapshots, shown one per frame.
//!
//! A move resolves completely inside one call; the frontend records the board
//! after every slide pass and replays the recording afterwards, so rendering
//! never interleaves with resolution.

use std::collections::VecDeque;

use crate::core::{Board, BoardSnapshot, SlideObserver};

#[derive(Debug, Default)]
pub struct Playback {
    frames: VecDeque<BoardSnapshot>,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: BoardSnapshot) {
        self.frames.push_back(frame);
    }

    /// Next recorded frame, or `None` once the animation has played out.
    pub fn next_frame(&mut self) -> Option<BoardSnapshot> {
        self.frames.pop_front()
    }

    /// Drop whatever is left, e.g. when a new move starts mid-animation.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl SlideObserver for Playback {
    fn on_pass(&mut self, board: &Board, _pass: u32) {
        self.push(board.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::types::{Coord, Direction};

    #[test]
    fn records_one_frame_per_pass() {
        let mut board =
            Board::from_tiles(GameConfig::default(), 3, &[(Coord::new(0, 0), 2), (Coord::new(0, 2), 4)])
                .unwrap();
        let mut playback = Playback::new();
        board.apply_move_observed(Direction::Right, &mut playback).unwrap();

        // Three cells at 20px per pass.
        assert_eq!(playback.len(), 15);
        let first = playback.next_frame().unwrap();
        assert!(first.tiles.iter().all(|t| t.x == 20));

        playback.clear();
        assert!(playback.is_empty());
        assert_eq!(playback.next_frame(), None);
    }
}
