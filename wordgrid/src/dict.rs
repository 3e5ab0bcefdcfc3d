//! The dictionary capability consumed by the board.
//!
//! How the word list gets into memory is the environment's business — a file,
//! a network fetch, a compiled-in array. The board only needs a membership
//! oracle, plus a readiness flag so a caller whose list arrives
//! asynchronously can gate mutations until it has loaded. The core never
//! performs the load itself.

use std::collections::HashSet;
use std::iter::FromIterator;

/// A word-list membership oracle.
///
/// Lookups are only defined while [`ready`][DictionaryLookup::ready] returns
/// true; callers must not consult a dictionary that has not finished loading.
pub trait DictionaryLookup {
    /// Whether the backing word list has finished loading.
    fn ready(&self) -> bool;

    /// Whether the word is in the dictionary. Words are queried in lowercase.
    fn has_word(&self, word: &str) -> bool;
}

impl<D: DictionaryLookup> DictionaryLookup for &D {
    fn ready(&self) -> bool {
        (**self).ready()
    }

    fn has_word(&self, word: &str) -> bool {
        (**self).has_word(word)
    }
}

/// `None` is a word list that has not arrived yet.
impl<D: DictionaryLookup> DictionaryLookup for Option<D> {
    fn ready(&self) -> bool {
        match self {
            Some(dict) => dict.ready(),
            None => false,
        }
    }

    fn has_word(&self, word: &str) -> bool {
        match self {
            Some(dict) => dict.has_word(word),
            None => false,
        }
    }
}

/// An in-memory word list. Always ready. Words are lowercased on insert, so
/// membership is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Construct an empty word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word set from newline-separated text, skipping blank lines.
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Add a word to the set.
    pub fn insert<S: AsRef<str>>(&mut self, word: S) {
        self.words.insert(word.as_ref().to_lowercase());
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = WordSet::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

impl DictionaryLookup for WordSet {
    fn ready(&self) -> bool {
        true
    }

    fn has_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let words: WordSet = ["Cat", "dog"].iter().collect();
        assert!(words.has_word("cat"));
        assert!(words.has_word("CAT"));
        assert!(words.has_word("Dog"));
        assert!(!words.has_word("bird"));
    }

    #[test]
    fn from_lines_skips_blanks() {
        let words = WordSet::from_lines("cat\n\n  dog  \n");
        assert_eq!(words.len(), 2);
        assert!(words.has_word("dog"));
    }

    #[test]
    fn unloaded_dictionary_is_not_ready() {
        let mut dict: Option<WordSet> = None;
        assert!(!dict.ready());

        dict = Some(["cat"].iter().collect());
        assert!(dict.ready());
        assert!(dict.has_word("cat"));
    }
}
