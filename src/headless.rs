//! Headless session - line-delimited JSON over stdio
//!
//! Each input line is one command:
//!
//! | line | effect |
//! |------|--------|
//! | `left` / `right` / `up` / `down` (any case) | apply a move |
//! | `reset` | start a new game |
//! | `snapshot` | report the board without changing it |
//!
//! Each command produces exactly one JSON object on its own line:
//!
//! ```text
//! {"ok":true,"status":"continue","snapshot":{...}}
//! {"ok":false,"error":"invalid direction: \"sideways\""}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use serde::Serialize;
use tracing::warn;

use crate::core::{Board, BoardSnapshot, CoreError};
use crate::playback::Playback;
use crate::types::{Direction, GameStatus};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<BoardSnapshot>,
    /// Intermediate boards, one per slide pass (only when enabled).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub passes: Vec<BoardSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn board(board: &Board, status: GameStatus, passes: Vec<BoardSnapshot>) -> Self {
        Self {
            ok: true,
            status: Some(status),
            snapshot: Some(board.snapshot()),
            passes,
            error: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            ok: false,
            status: None,
            snapshot: None,
            passes: Vec::new(),
            error: Some(message),
        }
    }
}

pub struct Session {
    board: Board,
    include_passes: bool,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            include_passes: false,
        }
    }

    /// Attach every intermediate slide pass to move responses.
    pub fn with_passes(mut self, include_passes: bool) -> Self {
        self.include_passes = include_passes;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handle one input line. Returns `None` for blank and comment lines.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let response = match line.to_ascii_lowercase().as_str() {
            "snapshot" => Response::board(&self.board, self.board.status(), Vec::new()),
            "reset" => match self.board.reset() {
                Ok(()) => Response::board(&self.board, self.board.status(), Vec::new()),
                Err(e) => self.fail(e),
            },
            _ => match line.parse::<Direction>() {
                Ok(direction) => self.apply(direction),
                Err(e) => {
                    warn!(%e, "rejected command");
                    Response::error(e.to_string())
                }
            },
        };
        Some(response)
    }

    fn apply(&mut self, direction: Direction) -> Response {
        let mut playback = Playback::new();
        let result = if self.include_passes {
            self.board.apply_move_observed(direction, &mut playback)
        } else {
            self.board.apply_move(direction)
        };

        match result {
            Ok(status) => {
                let mut passes = Vec::with_capacity(playback.len());
                while let Some(frame) = playback.next_frame() {
                    passes.push(frame);
                }
                Response::board(&self.board, status, passes)
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&self, e: CoreError) -> Response {
        warn!(error = %e, "core error");
        Response::error(e.to_string())
    }
}
