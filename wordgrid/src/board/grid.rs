//! Defines the sparse tile storage shared by the board's operations. The grid
//! is position-keyed with no bounds; a cell exists only while a tile occupies
//! it.

use std::collections::HashMap;

use crate::board::Position;

/// A single placed letter tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Tile {
    /// The letter on this tile.
    pub(super) ch: char,

    /// Whether this tile is currently part of dictionary words along both
    /// axes. Recomputed after every board mutation.
    pub(super) valid: bool,
}

impl Tile {
    /// Create a freshly placed tile. New tiles start valid; the next
    /// validation pass settles the real value.
    pub(super) fn new(ch: char) -> Self {
        Self { ch, valid: true }
    }

    /// The letter on this tile.
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Whether this tile is part of dictionary words along both axes.
    pub fn valid(&self) -> bool {
        self.valid
    }
}

/// Sparse position-keyed storage for placed tiles. At most one tile per
/// position; iteration order is unspecified.
#[derive(Debug, Default)]
pub(super) struct Grid {
    tiles: HashMap<Position, Tile>,
}

impl Grid {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the tile at the given position, returning the
    /// previous tile if one was present.
    pub(super) fn set(&mut self, pos: Position, tile: Tile) -> Option<Tile> {
        self.tiles.insert(pos, tile)
    }

    /// Get a reference to the tile at the given position, if occupied.
    pub(super) fn get(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Get a mutable reference to the tile at the given position, if occupied.
    pub(super) fn get_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        self.tiles.get_mut(&pos)
    }

    /// Whether the given position is occupied.
    pub(super) fn contains(&self, pos: Position) -> bool {
        self.tiles.contains_key(&pos)
    }

    /// Number of placed tiles.
    pub(super) fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate all placed tiles in unspecified order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles.iter().map(|(&pos, tile)| (pos, tile))
    }

    /// Collect the occupied positions. Used where a walk needs to mutate
    /// tiles while traversing.
    pub(super) fn positions(&self) -> Vec<Position> {
        self.tiles.keys().copied().collect()
    }

    /// Reset every tile's validity flag to true. Start of a validation pass.
    pub(super) fn reset_valid(&mut self) {
        for tile in self.tiles.values_mut() {
            tile.valid = true;
        }
    }
}
