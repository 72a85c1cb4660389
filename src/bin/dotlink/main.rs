//! Interactive text demo for the dotlink engine.
//!
//! ```text
//! dotlink --seed 7
//! dotlink --level 12
//! dotlink --config board.toml --verbose
//! ```

mod input;
mod logging;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dotlink::core::{GameRng, LevelConfig, Palette, LEVEL_COUNT};
use dotlink::{BoardConfig, BoardEngine, GameStatus, MoveError};

use crate::input::{parse_line, Command};

#[derive(Parser, Debug)]
#[command(name = "dotlink", about = "Connect same-colored dots from the terminal")]
struct Cli {
    /// Path to a TOML board configuration
    #[arg(long, conflicts_with = "level")]
    config: Option<PathBuf>,

    /// Play a built-in level (1-50)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=LEVEL_COUNT as i64))]
    level: Option<u32>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the move budget
    #[arg(long)]
    moves: Option<u32>,

    /// Override the palette (comma-separated color names)
    #[arg(long, value_delimiter = ',')]
    colors: Option<Vec<String>>,

    /// RNG seed. If omitted, a random seed is used and printed.
    #[arg(long)]
    seed: Option<u64>,

    /// Log engine events to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Board configuration for `level` (or the file/default board when `None`)
/// with the command-line overrides applied.
fn board_config(cli: &Cli, level: Option<u32>) -> Result<BoardConfig> {
    let mut config = match (&cli.config, level) {
        (Some(path), _) => BoardConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        (None, Some(id)) => LevelConfig::get(id)
            .with_context(|| format!("no level {id}"))?
            .board_config(),
        (None, None) => BoardConfig::default(),
    };

    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(moves) = cli.moves {
        config.moves = moves;
    }
    if let Some(colors) = &cli.colors {
        config.palette = Palette::new(colors.iter().map(|c| c.trim().to_string()))?;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut level = cli.level;
    let mut config = board_config(&cli, level)?;
    let mut rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    println!("Welcome to DotLink (seed {})", rng.seed());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut total = 0u64;
    loop {
        if let Some(target) = config.target_score {
            println!("Level {}: reach {} points in {} moves", config.level, target, config.moves);
        }
        let mut engine = BoardEngine::from_config(&config, rng.fork())?;
        println!("\n{engine}");

        let mut quit = false;
        while engine.status() == GameStatus::InProgress {
            print!("\nEnter path as r,c r,c ... (or 'q' to quit): ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                quit = true;
                break;
            };
            let path = match parse_line(&line?) {
                Ok(Command::Quit) => {
                    quit = true;
                    break;
                }
                Ok(Command::Move(path)) => path,
                Err(e) => {
                    println!("Error: {e}. Use format '0,0 0,1 1,1'");
                    continue;
                }
            };

            match engine.process_move(&path) {
                Ok(outcome) => {
                    if outcome.is_loop {
                        println!(
                            "LOOP! Cleared all {} dots.",
                            engine.palette().name(outcome.color)
                        );
                    }
                    println!("+{} points\n\n{engine}", outcome.score_delta);
                }
                Err(MoveError::NoMovesLeft) => break,
                Err(e) => println!("Invalid move: {e}"),
            }
        }
        total = total.saturating_add(engine.score());

        if quit || engine.status() != GameStatus::Won {
            break;
        }
        println!("Target reached with {} moves left!", engine.moves_left());
        let Some(next) = level.and_then(LevelConfig::get).and_then(|l| l.next()) else {
            break;
        };
        level = Some(next.id);
        config = board_config(&cli, level)?;
        println!("\nNext level!");
    }

    println!("Game Over! Final Score: {total}");
    Ok(())
}
