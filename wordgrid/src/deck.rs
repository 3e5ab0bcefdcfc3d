//! The letter-supply capability consumed by the board.
//!
//! A supply is a multiset of single characters: the board checks it before a
//! placement, draws the placed letter from it, and returns a replaced tile's
//! letter to it. [`Deck`] is the provided implementation, kept sorted for
//! display. With the `solitaire` feature it can also deal the standard
//! 21-tile starting hand.

/// A multiset of letters available for placement.
pub trait LetterSupply {
    /// Whether at least one copy of the letter is available.
    fn has_letter(&self, letter: char) -> bool;

    /// Add a copy of the letter to the supply.
    fn add(&mut self, letter: char);

    /// Remove one copy of the letter. Returns false if none was present.
    fn remove(&mut self, letter: char) -> bool;
}

/// The player's hand of undealt letters, kept sorted for display.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Deck {
    letters: Vec<char>,
}

impl Deck {
    /// Construct an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// The letters currently in the deck, in sorted order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the deck.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the deck holds no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl std::iter::FromIterator<char> for Deck {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut letters: Vec<char> = iter.into_iter().collect();
        letters.sort_unstable();
        Deck { letters }
    }
}

impl LetterSupply for Deck {
    fn has_letter(&self, letter: char) -> bool {
        self.letters.binary_search(&letter).is_ok()
    }

    fn add(&mut self, letter: char) {
        let at = match self.letters.binary_search(&letter) {
            Ok(at) | Err(at) => at,
        };
        self.letters.insert(at, letter);
    }

    fn remove(&mut self, letter: char) -> bool {
        match self.letters.binary_search(&letter) {
            Ok(at) => {
                self.letters.remove(at);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(feature = "solitaire")]
mod solitaire {
    use once_cell::sync::Lazy;
    use rand::{seq::SliceRandom, Rng};

    use super::Deck;

    /// How many of each letter the full tile pool holds.
    const FREQUENCIES: [(char, usize); 26] = [
        ('a', 13),
        ('b', 3),
        ('c', 3),
        ('d', 6),
        ('e', 18),
        ('f', 3),
        ('g', 4),
        ('h', 3),
        ('i', 12),
        ('j', 2),
        ('k', 2),
        ('l', 5),
        ('m', 3),
        ('n', 8),
        ('o', 11),
        ('p', 3),
        ('q', 2),
        ('r', 9),
        ('s', 6),
        ('t', 9),
        ('u', 6),
        ('v', 3),
        ('w', 3),
        ('x', 2),
        ('y', 3),
        ('z', 2),
    ];

    /// The full tile pool, one entry per physical tile.
    static POOL: Lazy<Vec<char>> = Lazy::new(|| {
        FREQUENCIES
            .iter()
            .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count))
            .collect()
    });

    impl Deck {
        /// Deal a solitaire starting hand: 21 tiles drawn without
        /// replacement from the standard frequency pool.
        pub fn solitaire<R: Rng>(rng: &mut R) -> Deck {
            POOL.choose_multiple(rng, 21).copied().collect()
        }
    }
}
