//! The board: placed unaffiliated tiles plus the hotel chains in play.
//!
//! Every mutation validates against the board's invariants before touching
//! state:
//!
//! - an unaffiliated tile appears at most once,
//! - its column lies in `[1, 12]`,
//! - it does not touch any tile owned by a hotel at the time it is placed,
//! - hotel names are unique.
//!
//! A tile that would touch a chain belongs in that chain, so the caller has
//! to grow the chain instead of placing the tile here. The board never logs;
//! every violation is handed straight back as a `BoardError`.

use super::adjacency::{Connectivity, GridAdjacency};
use super::hotel::{Hotel, HotelChain};
use super::tile::Tile;
use crate::protocol::xml::encode_board_xml;

/// Invariant violations reported by board mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("tile {0} is already on the board")]
    DuplicateTile(Tile),

    #[error("tile {0} has a column outside 1..=12")]
    InvalidColumn(Tile),

    #[error("tile {tile} is directly connected to hotel tile {hotel_tile}")]
    IsolatedAdjacency { tile: Tile, hotel_tile: Tile },

    #[error("tile {0} is not on the board")]
    TileNotFound(Tile),

    #[error("hotel '{0}' is already in play")]
    DuplicateHotel(String),

    #[error("hotel '{0}' is not in play")]
    HotelNotFound(String),
}

/// Validated container of unaffiliated tiles and hotel chains.
///
/// Both collections keep insertion order. The adjacency rule is supplied by
/// `C`; the default is the standard orthogonal grid.
#[derive(Debug, Clone)]
pub struct Board<H = Hotel, C = GridAdjacency> {
    tiles: Vec<Tile>,
    hotels: Vec<H>,
    connectivity: C,
}

impl Board {
    /// Creates an empty board on the standard orthogonal grid.
    pub fn new() -> Self {
        Self::with_connectivity(GridAdjacency::default())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HotelChain, C: Connectivity> Board<H, C> {
    /// Creates an empty board that uses `connectivity` for adjacency checks.
    pub fn with_connectivity(connectivity: C) -> Self {
        Board {
            tiles: Vec::new(),
            hotels: Vec::new(),
            connectivity,
        }
    }

    /// Unaffiliated tiles in placement order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns true if an unaffiliated tile sits at this position.
    pub fn has_tile(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }

    /// Returns true if **every** given tile is on the board.
    ///
    /// Despite the name this is an "all" check: it stops at the first missing
    /// tile, and an empty slice is vacuously true.
    pub fn has_any_tiles(&self, tiles: &[Tile]) -> bool {
        tiles.iter().all(|t| self.has_tile(t))
    }

    /// Places an unaffiliated tile.
    ///
    /// Checks run in order: duplicate, column range, adjacency to any hotel
    /// tile. On error the board is unchanged.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        if self.has_tile(&tile) {
            return Err(BoardError::DuplicateTile(tile));
        }
        if !tile.has_valid_column() {
            return Err(BoardError::InvalidColumn(tile));
        }
        if let Some(hotel_tile) = self
            .flatten_hotel_tiles()
            .into_iter()
            .find(|h| self.connectivity.is_directly_connected(&tile, h))
        {
            return Err(BoardError::IsolatedAdjacency { tile, hotel_tile });
        }
        self.tiles.push(tile);
        Ok(())
    }

    /// Removes every entry at `position`.
    pub fn remove_tile(&mut self, position: &Tile) -> Result<(), BoardError> {
        if !self.has_tile(position) {
            return Err(BoardError::TileNotFound(*position));
        }
        self.tiles.retain(|t| t != position);
        Ok(())
    }

    /// Removes each tile in order, stopping at the first failure.
    ///
    /// Tiles removed before the failing one stay removed.
    pub fn remove_tiles(&mut self, positions: &[Tile]) -> Result<(), BoardError> {
        for position in positions {
            self.remove_tile(position)?;
        }
        Ok(())
    }

    /// Hotels in the order they were added.
    pub fn hotels(&self) -> &[H] {
        &self.hotels
    }

    /// Name-based membership; object identity is irrelevant.
    pub fn has_hotel(&self, hotel: &H) -> bool {
        self.has_hotel_name(hotel.name())
    }

    /// Returns true if a hotel with this name is in play.
    pub fn has_hotel_name(&self, name: &str) -> bool {
        self.hotels.iter().any(|h| h.name() == name)
    }

    /// Adds a hotel; fails if one with the same name is already in play.
    pub fn add_hotel(&mut self, hotel: H) -> Result<(), BoardError> {
        if self.has_hotel(&hotel) {
            return Err(BoardError::DuplicateHotel(hotel.name().to_string()));
        }
        self.hotels.push(hotel);
        Ok(())
    }

    /// Removes every hotel sharing `hotel`'s name.
    pub fn remove_hotel(&mut self, hotel: &H) -> Result<(), BoardError> {
        self.remove_hotel_name(hotel.name())
    }

    /// Removes every hotel called `name`.
    pub fn remove_hotel_name(&mut self, name: &str) -> Result<(), BoardError> {
        if !self.has_hotel_name(name) {
            return Err(BoardError::HotelNotFound(name.to_string()));
        }
        self.hotels.retain(|h| h.name() != name);
        Ok(())
    }

    /// All hotel-owned tiles, hotel by hotel in insertion order.
    pub fn flatten_hotel_tiles(&self) -> Vec<Tile> {
        self.hotels
            .iter()
            .flat_map(|h| h.tiles().iter().copied())
            .collect()
    }

    /// Returns true if any hotel owns a tile at this position.
    pub fn hotels_have_tile(&self, tile: &Tile) -> bool {
        self.hotels.iter().any(|h| h.tiles().contains(tile))
    }

    /// Serializes the board to its CR-LF XML snapshot.
    ///
    /// Stored order is left untouched; sorting happens on copies.
    pub fn generate_xml(&self) -> String {
        encode_board_xml(self)
    }
}
