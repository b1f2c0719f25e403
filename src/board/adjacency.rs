//! Direct-adjacency predicate between tiles.
//!
//! The board does not own the grid topology. It consumes a `Connectivity`
//! implementation and asks it whether two positions touch. The predicate must
//! be pure, total and symmetric.
//!
//! `GridAdjacency` is the stock implementation: orthogonal neighbours for the
//! standard game, or king-move neighbours for variants that also count
//! corners. Any `Fn(&Tile, &Tile) -> bool` closure is also a `Connectivity`.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Answers whether two tile positions are directly connected on the grid.
pub trait Connectivity {
    fn is_directly_connected(&self, a: &Tile, b: &Tile) -> bool;
}

impl<F> Connectivity for F
where
    F: Fn(&Tile, &Tile) -> bool,
{
    fn is_directly_connected(&self, a: &Tile, b: &Tile) -> bool {
        self(a, b)
    }
}

/// Neighbourhood rule used by `GridAdjacency`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Tiles sharing an edge (up, down, left, right).
    #[default]
    Orthogonal,
    /// Tiles sharing an edge or a corner.
    King,
}

/// Rectangular grid adjacency with a configurable neighbourhood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridAdjacency {
    pub topology: Topology,
}

impl GridAdjacency {
    pub const fn new(topology: Topology) -> Self {
        Self { topology }
    }
}

impl Connectivity for GridAdjacency {
    fn is_directly_connected(&self, a: &Tile, b: &Tile) -> bool {
        let dr = (a.row_index() - b.row_index()).abs();
        let dc = (a.column as i32 - b.column as i32).abs();
        match self.topology {
            Topology::Orthogonal => dr + dc == 1,
            Topology::King => dr.max(dc) == 1,
        }
    }
}

/// Orthogonal adjacency: true iff the tiles share an edge.
pub fn is_directly_connected(a: &Tile, b: &Tile) -> bool {
    GridAdjacency::new(Topology::Orthogonal).is_directly_connected(a, b)
}
