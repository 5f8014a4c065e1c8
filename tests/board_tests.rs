//! Board tests - slide, merge and end-of-move rules through the public API

use std::collections::HashSet;

use tui_2048::core::{Board, GameConfig, LossRule};
use tui_2048::types::{Coord, Direction, GameStatus, COLUMNS, ROWS};

fn board(config: GameConfig, tiles: &[(usize, usize, u32)]) -> Board {
    let tiles: Vec<_> = tiles
        .iter()
        .map(|&(c, r, v)| (Coord::new(c, r), v))
        .collect();
    Board::from_tiles(config, 99, &tiles).unwrap()
}

/// Every row reads [2, 4, 2, 4]: columns hold equal pairs, rows hold none.
fn striped_full_board(config: GameConfig) -> Board {
    let mut tiles = Vec::new();
    for r in 0..ROWS {
        for c in 0..COLUMNS {
            tiles.push((c, r, if c % 2 == 0 { 2 } else { 4 }));
        }
    }
    board(config, &tiles)
}

fn total(board: &Board) -> u64 {
    board.tiles().iter().map(|t| t.value as u64).sum()
}

#[test]
fn test_two_corner_tiles_slide_left() {
    let mut b = board(GameConfig::default(), &[(0, 0, 2), (3, 3, 2)]);

    let status = b.apply_move(Direction::Left).unwrap();

    assert_eq!(status, GameStatus::Continue);
    assert_eq!(b.tile_at(Coord::new(0, 0)).map(|t| t.value), Some(2));
    assert_eq!(b.tile_at(Coord::new(0, 3)).map(|t| t.value), Some(2));
    assert_eq!(b.tile_at(Coord::new(3, 3)).map(|t| t.value), None);
    // Two slid tiles plus one spawn.
    assert_eq!(b.len(), 3);
    assert_eq!(b.moves(), 1);
}

#[test]
fn test_row_of_equal_tiles_merges_pairwise() {
    let mut b = board(GameConfig::default(), &[(0, 1, 2), (1, 1, 2), (2, 1, 2), (3, 1, 2)]);
    b.apply_move(Direction::Left).unwrap();

    assert_eq!(b.tile_at(Coord::new(0, 1)).map(|t| t.value), Some(4));
    assert_eq!(b.tile_at(Coord::new(1, 1)).map(|t| t.value), Some(4));
    assert_eq!(b.score(), 8);
}

#[test]
fn test_packed_row_without_merges_does_not_move() {
    let mut b = board(GameConfig::default(), &[(0, 0, 2), (1, 0, 4), (2, 0, 8), (3, 0, 16)]);
    b.apply_move(Direction::Left).unwrap();

    for (c, v) in [2, 4, 8, 16].into_iter().enumerate() {
        assert_eq!(b.tile_at(Coord::new(c, 0)).map(|t| t.value), Some(v));
    }
    assert_eq!(b.score(), 0);
    assert_eq!(b.len(), 5);
}

#[test]
fn test_settled_board_repeats_move_until_full() {
    // Columns 1-3 are packed with no equal horizontal neighbours and nothing a
    // spawned 2 or 4 could merge with; column 0 is the only free space.
    let rows = [[8, 16, 32], [16, 32, 64], [8, 16, 32], [16, 32, 64]];
    let mut tiles = Vec::new();
    for (r, values) in rows.iter().enumerate() {
        for (i, &v) in values.iter().enumerate() {
            tiles.push((i + 1, r, v));
        }
    }
    let mut b = board(GameConfig::default(), &tiles);

    let mut spawns = 0;
    loop {
        let before: Vec<_> = b.tiles().iter().map(|t| (t.coord(), t.value)).collect();
        let status = b.apply_move(Direction::Right).unwrap();

        for &(at, value) in &before {
            assert_eq!(b.tile_at(at).map(|t| t.value), Some(value), "tile at {} moved", at);
        }
        match status {
            GameStatus::Continue => {
                assert_eq!(b.len(), before.len() + 1);
                spawns += 1;
            }
            GameStatus::Lost => {
                assert_eq!(b.len(), before.len());
                break;
            }
            GameStatus::Won => panic!("no tile can reach the win value"),
        }
    }

    assert_eq!(spawns, 4);
    assert!(b.is_full());
    assert_eq!(b.score(), 0);
}

#[test]
fn test_moves_keep_tiles_on_distinct_aligned_cells() {
    let cfg = GameConfig {
        win_value: None,
        ..GameConfig::default()
    };
    for seed in [1, 7, 1234, 98765] {
        let mut b = Board::new(cfg.clone(), seed).unwrap();
        let field = b.config().field_size;
        for dir in Direction::ALL.repeat(40) {
            if b.apply_move(dir).unwrap().is_finished() {
                break;
            }
            let mut seen = HashSet::new();
            for t in b.tiles() {
                assert!(t.column < COLUMNS && t.row < ROWS, "off grid: {:?}", t);
                assert!(t.is_aligned(field), "unaligned: {:?}", t);
                assert!(seen.insert(t.coord()), "shared cell {}", t.coord());
            }
        }
    }
}

#[test]
fn test_move_conserves_value_plus_spawn() {
    let cfg = GameConfig {
        win_value: None,
        ..GameConfig::default()
    };
    let mut b = Board::new(cfg, 31337).unwrap();
    for dir in Direction::ALL.repeat(30) {
        let before = total(&b);
        let status = b.apply_move(dir).unwrap();
        let added = total(&b) - before;
        if status == GameStatus::Continue {
            assert!(added == 2 || added == 4, "added {}", added);
        } else {
            assert_eq!(added, 0);
            break;
        }
    }
}

#[test]
fn test_full_board_is_lost_even_with_merges_left() {
    let mut b = striped_full_board(GameConfig::default());
    assert!(b.has_available_merges());

    assert_eq!(b.apply_move(Direction::Left).unwrap(), GameStatus::Lost);
    assert!(b.is_finished());
    assert_eq!(b.len(), COLUMNS * ROWS);
}

#[test]
fn test_no_moves_left_rule_keeps_playing_while_merges_remain() {
    let cfg = GameConfig {
        loss_rule: LossRule::NoMovesLeft,
        ..GameConfig::default()
    };
    let mut b = striped_full_board(cfg);

    assert_eq!(b.apply_move(Direction::Left).unwrap(), GameStatus::Continue);
    assert_eq!(b.len(), COLUMNS * ROWS);

    // Columns of [2, 2, 2, 2] and [4, 4, 4, 4] collapse upward.
    b.apply_move(Direction::Up).unwrap();
    assert_eq!(b.tile_at(Coord::new(0, 0)).map(|t| t.value), Some(4));
    assert_eq!(b.tile_at(Coord::new(1, 1)).map(|t| t.value), Some(8));
}

#[test]
fn test_reaching_win_value_wins_and_freezes_board() {
    let mut b = board(GameConfig::default(), &[(2, 0, 1024), (3, 0, 1024)]);

    assert_eq!(b.apply_move(Direction::Left).unwrap(), GameStatus::Won);
    assert_eq!(b.tile_at(Coord::new(0, 0)).map(|t| t.value), Some(2048));
    assert_eq!(b.score(), 2048);
    // No spawn after a win.
    assert_eq!(b.len(), 1);

    let frozen = b.snapshot();
    assert_eq!(b.apply_move(Direction::Right).unwrap(), GameStatus::Won);
    assert_eq!(b.snapshot(), frozen);
}

#[test]
fn test_win_check_can_be_disabled() {
    let cfg = GameConfig {
        win_value: None,
        ..GameConfig::default()
    };
    let mut b = board(cfg, &[(0, 0, 1024), (1, 0, 1024)]);
    assert_eq!(b.apply_move(Direction::Left).unwrap(), GameStatus::Continue);
    assert_eq!(b.best_tile(), 2048);
}

#[test]
fn test_reset_after_loss() {
    let mut b = striped_full_board(GameConfig::default());
    b.apply_move(Direction::Right).unwrap();
    assert_eq!(b.status(), GameStatus::Lost);

    b.reset().unwrap();
    assert_eq!(b.status(), GameStatus::Continue);
    assert_eq!(b.len(), 2);
    assert_eq!((b.score(), b.moves()), (0, 0));
    assert_eq!(b.apply_move(Direction::Left).unwrap(), GameStatus::Continue);
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut b = Board::new(GameConfig::default(), seed).unwrap();
        for dir in Direction::ALL.repeat(10) {
            b.apply_move(dir).unwrap();
        }
        b.snapshot()
    };
    assert_eq!(play(2024), play(2024));
}

#[test]
fn test_larger_grid_from_config() {
    let cfg = GameConfig::from_toml_str("columns = 6\nrows = 5\nvelocity = 25\n").unwrap();
    let mut b = Board::new(cfg, 5).unwrap();
    b.apply_move(Direction::Right).unwrap();
    b.apply_move(Direction::Down).unwrap();
    for t in b.tiles() {
        assert!(t.column < 6 && t.row < 5);
        assert!(t.is_aligned(100));
    }
}
