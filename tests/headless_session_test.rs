use tui_2048::core::{Board, GameConfig};
use tui_2048::headless::Session;
use tui_2048::types::{Coord, GameStatus};

fn session_with(tiles: &[(Coord, u32)]) -> Session {
    Session::new(Board::from_tiles(GameConfig::default(), 4, tiles).unwrap())
}

#[test]
fn move_response_serializes_as_one_json_object() {
    let mut s = session_with(&[(Coord::new(3, 0), 2)]);
    let r = s.handle_line("left").unwrap();

    let json: serde_json::Value = serde_json::to_value(&r).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["status"], "continue");
    assert_eq!(json["snapshot"]["moves"], 1);
    assert!(json.get("error").is_none());
    assert!(json.get("passes").is_none());

    let line = serde_json::to_string(&r).unwrap();
    assert!(!line.contains('\n'));
}

#[test]
fn passes_are_reported_when_enabled() {
    let mut s = session_with(&[(Coord::new(3, 0), 2)]).with_passes(true);
    let r = s.handle_line("Left").unwrap();

    // Three cells at 20px per pass.
    assert_eq!(r.passes.len(), 15);
    assert_eq!(r.passes[0].tiles[0].x, 280);
    assert_eq!(r.passes[14].tiles[0].x, 0);
}

#[test]
fn winning_move_reports_won_and_then_stays_won() {
    let mut s = session_with(&[(Coord::new(0, 1), 1024), (Coord::new(0, 2), 1024)]);

    assert_eq!(s.handle_line("UP").unwrap().status, Some(GameStatus::Won));
    let again = s.handle_line("down").unwrap();
    assert!(again.ok);
    assert_eq!(again.status, Some(GameStatus::Won));
    assert_eq!(s.board().moves(), 1);

    let reset = s.handle_line("reset").unwrap();
    assert_eq!(reset.status, Some(GameStatus::Continue));
    assert_eq!(s.board().len(), 2);
}
