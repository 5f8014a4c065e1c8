//! Headless 2048 driver: one command per stdin line, one JSON object per stdout line.
//!
//! Example:
//!
//! ```text
//! $ printf 'left\nup\nsnapshot\n' | tui-2048-headless --seed 7
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tui_2048::core::Board;
use tui_2048::headless::Session;
use tui_2048::setup;

#[derive(Parser, Debug)]
#[command(name = "tui-2048-headless", about = "Drive a 2048 board over JSON lines")]
struct Args {
    /// TOML game configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// RNG seed.
    #[arg(long, default_value_t = 1)]
    seed: u32,
    /// Tracing filter for stderr logs.
    #[arg(long, default_value = "warn")]
    log: String,
    /// Include a snapshot for every slide pass in move responses.
    #[arg(long)]
    passes: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup::init_stderr_tracing(&args.log)?;

    let config = setup::load_config(args.config.as_deref())?;
    let board = Board::new(config, args.seed).context("creating board")?;
    let mut session = Session::new(board).with_passes(args.passes);
    info!(seed = args.seed, "headless session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if let Some(response) = session.handle_line(&line) {
            serde_json::to_writer(&mut stdout, &response)?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
