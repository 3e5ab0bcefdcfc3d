//! Sparse tile-grid model for crossword-style word games.
//!
//! The [`Board`][board::Board] owns a sparse grid of placed letter tiles on an
//! unbounded 2D plane. After every placement it re-derives two pieces of
//! state: the set of [anchors][board::Anchor] (empty cells a new word may
//! extend into) and the per-tile `valid` flag (whether the tile is part of
//! dictionary words along both axes).
//!
//! The board consumes two capabilities from its environment: a
//! [`DictionaryLookup`][dict::DictionaryLookup] word oracle and a
//! [`LetterSupply`][deck::LetterSupply] tile multiset. Reference
//! implementations of both are provided ([`WordSet`][dict::WordSet] and
//! [`Deck`][deck::Deck]); the core itself performs no I/O.

pub mod board;
pub mod deck;
pub mod dict;
