//! Types that make up the game board.

use crate::{
    deck::LetterSupply,
    dict::DictionaryLookup,
};

use self::{anchors::AnchorSet, grid::Grid};
pub use self::{
    anchors::Anchor,
    errors::{CannotPlaceReason, PlaceError},
    grid::Tile,
    position::Position,
};

mod anchors;
mod errors;
mod grid;
mod position;
mod validate;

/// The player's editing cursor: where the next letter lands and which way
/// typing advances. Transient UI-facing state, not part of the validated
/// model.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Cursor {
    /// Cell the next placed letter lands on.
    pub position: Position,
    /// Direction the cursor advances after a placement.
    pub direction: Position,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            position: Position::new(0, 0),
            direction: Position::RIGHT,
        }
    }
}

/// Result of a successful tile placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlaceOutcome {
    /// The cell was empty; the tile was placed.
    Placed,
    /// The cell was occupied; the previous tile's letter was returned to the
    /// letter supply and the new tile took its place.
    Replaced(char),
}

impl PlaceOutcome {
    /// Get the letter returned to the supply, if the placement replaced a
    /// tile.
    pub fn replaced(&self) -> Option<char> {
        match self {
            PlaceOutcome::Placed => None,
            PlaceOutcome::Replaced(ch) => Some(*ch),
        }
    }
}

/// A board of placed letter tiles on an unbounded sparse grid.
///
/// Owns the grid, the derived anchor set, the cursor, and the injected
/// dictionary. Every mutation goes through [`place`][Board::place], which
/// synchronously re-derives tile validity and the anchor set before
/// returning.
pub struct Board<D: DictionaryLookup> {
    /// Sparse tile storage.
    grid: Grid,

    /// Derived: legal next-placement cells. Rebuilt after every mutation.
    anchors: AnchorSet,

    /// Where the next letter lands, and which way typing advances.
    cursor: Cursor,

    /// The word oracle consulted during validation.
    dict: D,
}

impl<D: DictionaryLookup> Board<D> {
    /// Construct an empty board around the given dictionary.
    pub fn new(dict: D) -> Self {
        Self {
            grid: Grid::new(),
            anchors: AnchorSet::new(),
            cursor: Cursor::default(),
            dict,
        }
    }

    /// Get the dictionary this board validates against.
    pub fn dictionary(&self) -> &D {
        &self.dict
    }

    /// Get the current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Move the cursor to the given position. If an anchor exists there the
    /// cursor takes its direction, otherwise it defaults to rightward.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = Cursor {
            position: pos,
            direction: match self.anchors.get(pos) {
                Some(anchor) => anchor.direction(),
                None => Position::RIGHT,
            },
        };
    }

    /// Place a letter from the supply at the given position.
    ///
    /// On success the letter is consumed from the supply, any tile previously
    /// at the position has its letter returned to the supply, the cursor
    /// advances one step along its direction, and tile validity and the
    /// anchor set are re-derived. If the supply does not hold the letter the
    /// board is left untouched and the error reports the rejection.
    ///
    /// The dictionary must report [`ready`][DictionaryLookup::ready] before
    /// this is called; readiness is the caller's contract, not checked here.
    pub fn place<S: LetterSupply>(
        &mut self,
        pos: Position,
        letter: char,
        supply: &mut S,
    ) -> Result<PlaceOutcome, PlaceError> {
        if !supply.has_letter(letter) {
            return Err(PlaceError::new(
                CannotPlaceReason::LetterUnavailable,
                pos,
                letter,
            ));
        }
        supply.remove(letter);

        let outcome = match self.grid.set(pos, Tile::new(letter)) {
            Some(previous) => {
                supply.add(previous.ch());
                PlaceOutcome::Replaced(previous.ch())
            }
            None => PlaceOutcome::Placed,
        };

        self.cursor.position = pos + self.cursor.direction;
        validate::refresh(&mut self.grid, &self.dict);
        self.anchors = AnchorSet::generate(&self.grid);
        Ok(outcome)
    }

    /// Get the tile at the given position, if occupied.
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.grid.get(pos)
    }

    /// Number of placed tiles.
    pub fn tile_count(&self) -> usize {
        self.grid.len()
    }

    /// Iterate all placed tiles in unspecified order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.grid.iter()
    }

    /// Get the anchor at the given position, if one exists.
    pub fn anchor(&self, pos: Position) -> Option<&Anchor> {
        self.anchors.get(pos)
    }

    /// Number of anchors.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Iterate all anchors in unspecified order.
    pub fn iter_anchors(&self) -> impl Iterator<Item = (Position, &Anchor)> {
        self.anchors.iter()
    }

    /// Set the hover highlight on the anchor at the given position. Returns
    /// false if no anchor exists there. For the rendering layer.
    pub fn set_anchor_highlight(&mut self, pos: Position, highlighted: bool) -> bool {
        match self.anchors.get_mut(pos) {
            Some(anchor) => {
                anchor.set_highlighted(highlighted);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{deck::Deck, dict::WordSet};

    fn board(words: &[&str]) -> Board<WordSet> {
        Board::new(words.iter().copied().collect())
    }

    fn deck(letters: &str) -> Deck {
        letters.chars().collect()
    }

    fn type_word<D: DictionaryLookup>(board: &mut Board<D>, deck: &mut Deck, word: &str) {
        board.set_cursor(Position::new(0, 0));
        for ch in word.chars() {
            let pos = board.cursor().position;
            board.place(pos, ch, deck).unwrap();
        }
    }

    #[test]
    fn typing_a_dictionary_word_leaves_tiles_valid() {
        let mut board = board(&["cat"]);
        let mut deck = deck("cat");
        assert!(board.dictionary().has_word("cat"));
        type_word(&mut board, &mut deck, "cat");

        assert_eq!(board.tile_count(), 3);
        for x in 0..3 {
            assert!(board.tile(Position::new(x, 0)).unwrap().valid());
        }
        assert!(deck.is_empty());
    }

    #[test]
    fn typing_a_non_word_marks_tiles_invalid() {
        let mut board = board(&["dog"]);
        let mut deck = deck("cat");
        type_word(&mut board, &mut deck, "cat");

        for x in 0..3 {
            assert!(!board.tile(Position::new(x, 0)).unwrap().valid());
        }
    }

    #[test]
    fn placement_advances_cursor_along_direction() {
        let mut board = board(&["a"]);
        let mut deck = deck("a");
        board.set_cursor(Position::new(2, 5));
        board.place(Position::new(2, 5), 'a', &mut deck).unwrap();
        assert_eq!(board.cursor().position, Position::new(3, 5));
        assert_eq!(board.cursor().direction, Position::RIGHT);
    }

    #[test]
    fn cursor_takes_direction_from_anchor() {
        let mut board = board(&["a"]);
        let mut deck = deck("a");
        board.place(Position::new(0, 0), 'a', &mut deck).unwrap();

        // The cell below the tile carries a downward anchor.
        board.set_cursor(Position::new(0, 1));
        assert_eq!(board.cursor().direction, Position::DOWN);

        // A cell with no anchor defaults to rightward.
        board.set_cursor(Position::new(9, 9));
        assert_eq!(board.cursor().direction, Position::RIGHT);
    }

    #[test]
    fn unavailable_letter_is_rejected_without_state_change() {
        let mut board = board(&["a"]);
        let mut deck = deck("a");
        let err = board
            .place(Position::new(0, 0), 'z', &mut deck)
            .unwrap_err();

        assert_eq!(err.reason(), CannotPlaceReason::LetterUnavailable);
        assert_eq!(err.letter(), 'z');
        assert_eq!(err.position(), Position::new(0, 0));
        assert_eq!(board.tile_count(), 0);
        assert_eq!(board.anchor_count(), 0);
        assert_eq!(deck.letters(), &['a']);
    }

    #[test]
    fn replacing_a_tile_returns_its_letter_to_the_supply() {
        let mut board = board(&["b"]);
        let mut deck = deck("ab");
        board.place(Position::new(0, 0), 'a', &mut deck).unwrap();
        assert_eq!(deck.letters(), &['b']);

        let outcome = board.place(Position::new(0, 0), 'b', &mut deck).unwrap();
        assert_eq!(outcome, PlaceOutcome::Replaced('a'));
        assert_eq!(outcome.replaced(), Some('a'));
        assert_eq!(deck.letters(), &['a']);
        assert_eq!(board.tile(Position::new(0, 0)).unwrap().ch(), 'b');
        assert!(board.tile(Position::new(0, 0)).unwrap().valid());
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn anchors_follow_placements() {
        let mut board = board(&["a", "aa"]);
        let mut deck = deck("aa");
        board.place(Position::new(0, 0), 'a', &mut deck).unwrap();

        assert_eq!(board.anchor_count(), 2);
        assert_eq!(
            board.anchor(Position::new(1, 0)).map(|a| a.direction()),
            Some(Position::RIGHT)
        );
        assert_eq!(
            board.anchor(Position::new(0, 1)).map(|a| a.direction()),
            Some(Position::DOWN)
        );

        board.place(Position::new(1, 0), 'a', &mut deck).unwrap();
        assert!(board.anchor(Position::new(1, 0)).is_none());
        assert_eq!(board.anchor_count(), 3);
    }

    #[test]
    fn anchor_highlight_is_settable() {
        let mut board = board(&["a"]);
        let mut deck = deck("a");
        board.place(Position::new(0, 0), 'a', &mut deck).unwrap();

        let pos = Position::new(1, 0);
        assert!(!board.anchor(pos).unwrap().highlighted());
        assert!(board.set_anchor_highlight(pos, true));
        assert!(board.anchor(pos).unwrap().highlighted());
        assert!(!board.set_anchor_highlight(Position::new(5, 5), true));
    }
}
