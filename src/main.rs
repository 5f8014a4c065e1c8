//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_2048::term`.
//! Moves resolve synchronously; the per-pass snapshots they leave behind are
//! played back one per tick to animate the slide.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::core::Board;
use tui_2048::input::{handle_key_event, should_quit, KeyCooldown};
use tui_2048::playback::Playback;
use tui_2048::setup;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, TICK_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Play 2048 in the terminal")]
struct Args {
    /// TOML game configuration (grid size, velocity, win value, loss rule).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// RNG seed; defaults to the wall clock.
    #[arg(long)]
    seed: Option<u32>,
    /// Tracing filter, e.g. "info", "tui_2048_core=debug".
    #[arg(long, default_value = "info")]
    log: String,
    /// Write logs here. Without it nothing is logged (the terminal is in use).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        setup::init_file_tracing(&args.log, path)?;
    }

    let config = setup::load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(setup::clock_seed);
    info!(seed, columns = config.columns, rows = config.rows, "starting game");
    let mut board = Board::new(config, seed).context("creating board")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut board);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, board: &mut Board) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut cooldown = KeyCooldown::new();
    let mut playback = Playback::new();
    let mut shown = board.snapshot();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&shown, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(score = board.score(), moves = board.moves(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if cooldown.try_fire() {
                            apply_action(board, action, &mut playback)?;
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            cooldown.update(TICK_MS);
            shown = playback.next_frame().unwrap_or_else(|| board.snapshot());
        }
    }
}

fn apply_action(board: &mut Board, action: GameAction, playback: &mut Playback) -> Result<()> {
    match action {
        GameAction::Move(direction) => {
            // Finished boards ignore moves anyway; skip the empty recording.
            if board.is_finished() {
                return Ok(());
            }
            playback.clear();
            board.apply_move_observed(direction, playback)?;
        }
        GameAction::Restart => {
            playback.clear();
            board.reset()?;
        }
    }
    Ok(())
}
