//! JSON view of a board for tooling and debugging.
//!
//! Mirrors the XML snapshot: sorted unaffiliated tiles, then hotels in
//! insertion order with their sorted tiles.

use serde::Serialize;

use crate::board::adjacency::Connectivity;
use crate::board::hotel::HotelChain;
use crate::board::state::Board;
use crate::board::tile::Tile;
use crate::protocol::xml::sorted_tiles;

/// One hotel block of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotelSnapshot {
    pub name: String,
    pub tiles: Vec<Tile>,
}

/// Serializable copy of a board's contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub tiles: Vec<Tile>,
    pub hotels: Vec<HotelSnapshot>,
}

pub fn snapshot<H: HotelChain, C: Connectivity>(board: &Board<H, C>) -> BoardSnapshot {
    BoardSnapshot {
        tiles: sorted_tiles(board.tiles()),
        hotels: board
            .hotels()
            .iter()
            .map(|h| HotelSnapshot {
                name: h.name().to_string(),
                tiles: sorted_tiles(h.tiles()),
            })
            .collect(),
    }
}

/// Encodes the board snapshot as a single line of JSON.
pub fn to_json<H: HotelChain, C: Connectivity>(
    board: &Board<H, C>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&snapshot(board))
}
