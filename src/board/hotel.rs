//! Hotel chains as seen by the board.
//!
//! The board only ever needs a chain's name and the positions it owns, so it
//! depends on the `HotelChain` capability rather than on a concrete type.
//! Growth and merge rules live with whoever implements the trait.

use serde::Serialize;

use super::tile::Tile;

/// The two members of a hotel chain the board relies on.
pub trait HotelChain {
    /// Stable chain name, unique within a board.
    fn name(&self) -> &str;

    /// Positions owned by the chain, in the chain's own order.
    fn tiles(&self) -> &[Tile];
}

/// A plain named chain of tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotel {
    name: String,
    tiles: Vec<Tile>,
}

impl Hotel {
    pub fn new(name: impl Into<String>, tiles: Vec<Tile>) -> Self {
        Self {
            name: name.into(),
            tiles,
        }
    }
}

impl HotelChain for Hotel {
    fn name(&self) -> &str {
        &self.name
    }

    fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl<T: HotelChain + ?Sized> HotelChain for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn tiles(&self) -> &[Tile] {
        (**self).tiles()
    }
}
