//! Board representation.
//!
//! Contains the tile value type, the adjacency contract, the hotel chain
//! capability and the validated `Board` container built on them.

pub mod adjacency;
pub mod hotel;
pub mod state;
pub mod tile;

pub use adjacency::{is_directly_connected, Connectivity, GridAdjacency, Topology};
pub use hotel::{Hotel, HotelChain};
pub use state::{Board, BoardError};
pub use tile::{Tile, TileParseError, FIRST_ROW, LAST_ROW, MAX_COLUMN, MIN_COLUMN};
