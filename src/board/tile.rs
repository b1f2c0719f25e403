//! Tile positions on the hotel board.
//!
//! A tile is nothing more than a grid coordinate: a row letter and a column
//! number. Two tiles are the same tile iff both coordinates match, so every
//! membership and removal check in the board relies on the derived equality.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Lowest legal column number.
pub const MIN_COLUMN: u8 = 1;

/// Highest legal column number.
pub const MAX_COLUMN: u8 = 12;

/// First row letter of the standard board.
pub const FIRST_ROW: char = 'A';

/// Last row letter of the standard board.
pub const LAST_ROW: char = 'I';

/// A grid position: `(row, column)`.
///
/// The derived ordering compares the row first, then the column numerically,
/// which is exactly the order used when serializing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tile {
    pub row: char,
    pub column: u8,
}

impl Tile {
    /// Creates a tile at the given row and column. No range checks are made.
    pub const fn new(row: char, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns true if the column lies within `[MIN_COLUMN, MAX_COLUMN]`.
    pub const fn has_valid_column(self) -> bool {
        self.column >= MIN_COLUMN && self.column <= MAX_COLUMN
    }

    /// Zero-based row offset from `FIRST_ROW`, used for grid arithmetic.
    pub(crate) fn row_index(self) -> i32 {
        self.row as i32 - FIRST_ROW as i32
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

/// Errors that can occur when parsing a tile from text such as `B7`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileParseError {
    #[error("empty tile text")]
    Empty,

    #[error("invalid row '{0}': expected a letter")]
    InvalidRow(char),

    #[error("invalid column in tile '{0}'")]
    InvalidColumn(String),
}

impl FromStr for Tile {
    type Err = TileParseError;

    /// Parses `<letter><number>`. The row is normalized to uppercase; the
    /// column only has to fit in a `u8`, range checks belong to the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let row = chars.next().ok_or(TileParseError::Empty)?;
        if !row.is_ascii_alphabetic() {
            return Err(TileParseError::InvalidRow(row));
        }
        let rest = chars.as_str();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TileParseError::InvalidColumn(s.to_string()));
        }
        let column = rest
            .parse::<u8>()
            .map_err(|_| TileParseError::InvalidColumn(s.to_string()))?;
        Ok(Tile::new(row.to_ascii_uppercase(), column))
    }
}
