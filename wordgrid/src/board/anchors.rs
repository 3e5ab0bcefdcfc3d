//! Anchor tracking: the empty cells a new word may legally extend into.
//!
//! Anchors are derived state. The set is rebuilt from scratch after every
//! grid mutation rather than patched incrementally; at expected board sizes
//! the rebuild is cheap and cannot go stale.

use std::collections::HashMap;

use crate::board::{grid::Grid, Position};

/// An empty cell adjacent to an occupied one, annotated with the direction a
/// word placed there would extend in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Anchor {
    /// The single insertion direction this anchor implies, either
    /// [`Position::RIGHT`] or [`Position::DOWN`].
    direction: Position,

    /// Hover state for the rendering layer. Not part of the grid model.
    highlighted: bool,
}

impl Anchor {
    fn new(direction: Position) -> Self {
        Self {
            direction,
            highlighted: false,
        }
    }

    /// The insertion direction this anchor implies.
    pub fn direction(&self) -> Position {
        self.direction
    }

    /// Whether the rendering layer has marked this anchor hovered.
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub(super) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}

/// The set of anchors derived from the current grid.
///
/// Invariant: an anchor exists at position `P` with direction `D` iff `P` is
/// empty and `P - D` is occupied. An empty grid has no anchors; the
/// conventional starting anchor at the origin is a presentation-layer
/// fallback, not part of this set.
#[derive(Debug, Default)]
pub(super) struct AnchorSet {
    anchors: HashMap<Position, Anchor>,
}

impl AnchorSet {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Rebuild the anchor set from the given grid.
    ///
    /// When the cell right of one tile is also the cell below another, both
    /// axes claim the same anchor. The tie-break is deterministic: horizontal
    /// wins, regardless of grid iteration order.
    pub(super) fn generate(grid: &Grid) -> Self {
        let mut anchors = HashMap::new();
        for (pos, _) in grid.iter() {
            let right = pos + Position::RIGHT;
            if !grid.contains(right) {
                anchors.insert(right, Anchor::new(Position::RIGHT));
            }
            let below = pos + Position::DOWN;
            if !grid.contains(below) {
                anchors
                    .entry(below)
                    .or_insert_with(|| Anchor::new(Position::DOWN));
            }
        }
        Self { anchors }
    }

    /// Get the anchor at the given position, if one exists.
    pub(super) fn get(&self, pos: Position) -> Option<&Anchor> {
        self.anchors.get(&pos)
    }

    pub(super) fn get_mut(&mut self, pos: Position) -> Option<&mut Anchor> {
        self.anchors.get_mut(&pos)
    }

    /// Number of anchors.
    pub(super) fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Iterate all anchors in unspecified order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (Position, &Anchor)> {
        self.anchors.iter().map(|(&pos, anchor)| (pos, anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::grid::Tile;

    #[test]
    fn empty_grid_has_no_anchors() {
        let anchors = AnchorSet::generate(&Grid::new());
        assert_eq!(anchors.len(), 0);
    }

    #[test]
    fn single_tile_implies_right_and_down() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Tile::new('a'));
        let anchors = AnchorSet::generate(&grid);

        assert_eq!(anchors.len(), 2);
        assert_eq!(
            anchors.get(Position::new(1, 0)).map(|a| a.direction()),
            Some(Position::RIGHT)
        );
        assert_eq!(
            anchors.get(Position::new(0, 1)).map(|a| a.direction()),
            Some(Position::DOWN)
        );
        assert!(anchors.get(Position::new(0, 0)).is_none());
    }

    #[test]
    fn occupied_neighbors_are_not_anchors() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), Tile::new('a'));
        grid.set(Position::new(1, 0), Tile::new('b'));
        let anchors = AnchorSet::generate(&grid);

        assert!(anchors.get(Position::new(1, 0)).is_none());
        assert_eq!(
            anchors.get(Position::new(2, 0)).map(|a| a.direction()),
            Some(Position::RIGHT)
        );
    }

    // Tiles at (0, 1) and (1, 0) both claim the empty cell (1, 1): the first
    // from the right, the second from above. The original design let whichever
    // tile iterated later win; here the tie-break is pinned to horizontal.
    #[test]
    fn direction_collision_prefers_horizontal() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 1), Tile::new('a'));
        grid.set(Position::new(1, 0), Tile::new('b'));
        let anchors = AnchorSet::generate(&grid);

        assert_eq!(
            anchors.get(Position::new(1, 1)).map(|a| a.direction()),
            Some(Position::RIGHT)
        );
    }
}
