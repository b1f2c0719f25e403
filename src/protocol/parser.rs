//! Driver command parser.
//!
//! Turns one line of driver input into a structured `Command` that the
//! session loop can dispatch on. Tile arguments use the `<row><column>` text
//! form (`A1`, `I12`) and must name a row between `A` and the configured last
//! row; the column range is left for the board to judge.

use tracing::warn;

use crate::board::tile::{Tile, FIRST_ROW};

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; the driver replies `readyok`.
    IsReady,

    /// Discard the current board and start from an empty one.
    NewBoard,

    /// Place an unaffiliated tile.
    Place { tile: Tile },

    /// Remove one or more unaffiliated tiles, in order.
    Remove { tiles: Vec<Tile> },

    /// Found a hotel chain owning the given tiles.
    Found { name: String, tiles: Vec<Tile> },

    /// Dissolve the hotel chain with this name.
    Dissolve { name: String },

    /// Is this tile on the board as an unaffiliated tile?
    HasTile { tile: Tile },

    /// Are all of these tiles on the board?
    HasTiles { tiles: Vec<Tile> },

    /// Is a hotel with this name in play?
    HasHotel { name: String },

    /// Does any hotel own this tile?
    HotelTile { tile: Tile },

    /// Write the XML snapshot.
    Xml,

    /// Write the JSON snapshot.
    Json,

    /// End the session.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines, unknown commands and malformed arguments;
/// the latter two are logged as warnings.
pub fn parse_command(line: &str, last_row: char) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&keyword, args) = tokens.split_first()?;

    match keyword {
        "isready" => Some(Command::IsReady),
        "newboard" => Some(Command::NewBoard),
        "xml" => Some(Command::Xml),
        "json" => Some(Command::Json),
        "quit" => Some(Command::Quit),

        "place" => parse_single_tile(keyword, args, last_row).map(|tile| Command::Place { tile }),
        "hastile" => {
            parse_single_tile(keyword, args, last_row).map(|tile| Command::HasTile { tile })
        }
        "hoteltile" => {
            parse_single_tile(keyword, args, last_row).map(|tile| Command::HotelTile { tile })
        }
        "remove" => {
            if args.is_empty() {
                warn!("malformed remove: expected 'remove <tile> [<tile> ...]'");
                return None;
            }
            parse_tiles(args, last_row).map(|tiles| Command::Remove { tiles })
        }
        "hastiles" => parse_tiles(args, last_row).map(|tiles| Command::HasTiles { tiles }),
        "found" => parse_found(args, last_row),
        "dissolve" => parse_name(keyword, args).map(|name| Command::Dissolve { name }),
        "hashotel" => parse_name(keyword, args).map(|name| Command::HasHotel { name }),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses one tile argument, checking the row against the grid.
fn parse_tile(text: &str, last_row: char) -> Option<Tile> {
    match text.parse::<Tile>() {
        Ok(tile) if (FIRST_ROW..=last_row).contains(&tile.row) => Some(tile),
        Ok(tile) => {
            warn!(%tile, %last_row, "row outside the board");
            None
        }
        Err(e) => {
            warn!(text, error = %e, "invalid tile");
            None
        }
    }
}

fn parse_tiles(args: &[&str], last_row: char) -> Option<Vec<Tile>> {
    args.iter().map(|a| parse_tile(a, last_row)).collect()
}

/// Parses commands taking exactly one tile.
fn parse_single_tile(keyword: &str, args: &[&str], last_row: char) -> Option<Tile> {
    match args {
        [tile] => parse_tile(tile, last_row),
        _ => {
            warn!("malformed {}: expected '{} <tile>'", keyword, keyword);
            None
        }
    }
}

/// Parses commands taking exactly one hotel name.
fn parse_name(keyword: &str, args: &[&str]) -> Option<String> {
    match args {
        [name] => Some((*name).to_string()),
        _ => {
            warn!("malformed {}: expected '{} <name>'", keyword, keyword);
            None
        }
    }
}

/// Parses `found <name> <tile> [<tile> ...]`.
fn parse_found(args: &[&str], last_row: char) -> Option<Command> {
    let Some((name, tiles)) = args.split_first() else {
        warn!("malformed found: expected 'found <name> <tile> [<tile> ...]'");
        return None;
    };
    if tiles.is_empty() {
        warn!("malformed found: a hotel needs at least one tile");
        return None;
    }
    let tiles = parse_tiles(tiles, last_row)?;
    Some(Command::Found {
        name: (*name).to_string(),
        tiles,
    })
}
