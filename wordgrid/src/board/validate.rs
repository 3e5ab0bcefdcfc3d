//! Word validation: recomputes every tile's `valid` flag from the grid and
//! the dictionary.
//!
//! A pass works per axis. For each axis the validator finds every maximal
//! contiguous run of tiles, reads it forward into a word, and on a dictionary
//! miss marks the whole run invalid. The reset to `valid = true` happens once
//! per pass, before either axis runs, so failures accumulate across axes: a
//! tile must sit in dictionary words both horizontally and vertically to end
//! the pass valid. A length-1 run counts as a word only for a tile isolated
//! on both axes; a tile inside a word is not re-judged as a one-letter word
//! on the crossing axis.

use std::collections::HashSet;

use crate::{
    board::{grid::Grid, Position},
    dict::DictionaryLookup,
};

/// Recompute the `valid` flag of every tile in the grid.
///
/// The dictionary must be ready; callers gate on
/// [`DictionaryLookup::ready`] before mutating the board.
pub(super) fn refresh<D: DictionaryLookup>(grid: &mut Grid, dict: &D) {
    debug_assert!(dict.ready(), "validation requires a ready dictionary");

    grid.reset_valid();
    validate_axis(grid, dict, Position::RIGHT);
    validate_axis(grid, dict, Position::DOWN);
}

/// Validate every maximal run along the given axis, marking misses invalid.
/// Only ever turns `valid` from true to false.
fn validate_axis<D: DictionaryLookup>(grid: &mut Grid, dict: &D, axis: Position) {
    // Every tile of an N-tile run tracks back to the same origin, so the
    // collected set holds each run once.
    let mut origins = HashSet::new();
    for pos in grid.positions() {
        origins.insert(run_origin(grid, pos, axis));
    }

    for origin in origins {
        // Every tile of a word is also a length-1 run on the crossing axis;
        // those are not words of their own. Only a fully isolated tile is
        // held to the dictionary as a single-character word.
        if !grid.contains(origin + axis) && in_cross_run(grid, origin, axis) {
            continue;
        }
        let word = read_run(grid, origin, axis);
        if !dict.has_word(&word.to_lowercase()) {
            let mut pos = origin;
            while let Some(tile) = grid.get_mut(pos) {
                tile.valid = false;
                pos = pos + axis;
            }
        }
    }
}

/// Whether the tile at `pos` sits in a longer run along the axis crossing
/// the given one.
fn in_cross_run(grid: &Grid, pos: Position, axis: Position) -> bool {
    let cross = if axis == Position::RIGHT {
        Position::DOWN
    } else {
        Position::RIGHT
    };
    grid.contains(pos + cross) || grid.contains(pos - cross)
}

/// Walk backward along the axis to the first tile of the run containing
/// `pos`.
fn run_origin(grid: &Grid, pos: Position, axis: Position) -> Position {
    let mut origin = pos;
    while grid.contains(origin - axis) {
        origin = origin - axis;
    }
    origin
}

/// Read the run starting at `origin` forward along the axis into a word.
fn read_run(grid: &Grid, origin: Position, axis: Position) -> String {
    let mut word = String::new();
    let mut pos = origin;
    while let Some(tile) = grid.get(pos) {
        word.push(tile.ch());
        pos = pos + axis;
    }
    word
}
