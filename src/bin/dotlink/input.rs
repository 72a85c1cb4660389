//! Parsing of typed paths.
//!
//! A path is whitespace-separated `row,col` tokens: `0,0 0,1 1,1`.

use dotlink::core::{Cell, Path};

/// A line the player typed that is not a path.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("'{0}' is not of the form row,col")]
    BadToken(String),
}

/// What the player asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Path),
}

/// Parse one input line.
pub fn parse_line(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    line.split_whitespace()
        .map(parse_cell)
        .collect::<Result<Path, _>>()
        .map(Command::Move)
}

fn parse_cell(token: &str) -> Result<Cell, InputError> {
    let bad = || InputError::BadToken(token.to_string());
    let (row, col) = token.split_once(',').ok_or_else(bad)?;
    let row = row.trim().parse().map_err(|_| bad())?;
    let col = col.trim().parse().map_err(|_| bad())?;
    Ok(Cell::new(row, col))
}
