//! The word list candidates are drawn from

use super::PuzzleError;
use log::warn;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A candidate word. Shared between every domain that holds it.
pub type Word = Arc<str>;

/// Normalized, de-duplicated set of upper-case ASCII words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from raw entries. Entries are trimmed and upper-cased; blank
    /// entries are ignored and entries with anything but ASCII letters are skipped.
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = BTreeSet::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            if !entry.chars().all(|ch| ch.is_ascii_alphabetic()) {
                warn!("Skipping word with unsupported characters: {:?}", entry);
                continue;
            }
            words.insert(Word::from(entry.to_ascii_uppercase()));
        }
        Self { words }
    }

    /// Parse a word list with one word per line
    pub fn parse(content: &str) -> Result<Self, PuzzleError> {
        let vocabulary = Self::from_words(content.lines());
        if vocabulary.is_empty() {
            return Err(PuzzleError::EmptyVocabulary);
        }
        Ok(vocabulary)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn words(&self) -> &BTreeSet<Word> {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let vocabulary = Vocabulary::parse("one\nTwo\n  three  \n\nONE\n").unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("ONE"));
        assert!(vocabulary.contains("TWO"));
        assert!(vocabulary.contains("THREE"));
        assert!(!vocabulary.contains("one"));
    }

    #[test]
    fn test_unsupported_words_are_skipped() {
        let vocabulary = Vocabulary::from_words(["café", "don't", "ok"]);
        assert_eq!(vocabulary.iter().map(|w| w.as_ref()).collect::<Vec<_>>(), vec!["OK"]);
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        assert_eq!(Vocabulary::parse("\n  \n"), Err(PuzzleError::EmptyVocabulary));
    }
}
