//! Candidate words per variable

use crate::crossword::{Crossword, VarId, Vocabulary, Word};
use std::collections::BTreeSet;

/// Candidate word sets indexed by variable id.
///
/// Starts as a full copy of the vocabulary for every variable and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<BTreeSet<Word>>,
}

impl DomainStore {
    pub fn new(crossword: &Crossword, vocabulary: &Vocabulary) -> Self {
        Self {
            domains: vec![vocabulary.words().clone(); crossword.variable_count()],
        }
    }

    pub fn get(&self, id: VarId) -> &BTreeSet<Word> {
        &self.domains[id]
    }

    pub fn len(&self, id: VarId) -> usize {
        self.domains[id].len()
    }

    pub fn is_empty(&self, id: VarId) -> bool {
        self.domains[id].is_empty()
    }

    pub fn contains(&self, id: VarId, word: &str) -> bool {
        self.domains[id].contains(word)
    }

    /// Remove every listed word from the domain of `id`, returning how many were present
    pub fn remove_all(&mut self, id: VarId, words: &[Word]) -> usize {
        let domain = &mut self.domains[id];
        words.iter().filter(|&word| domain.remove(word)).count()
    }

    /// Sum of all domain sizes
    pub fn total_size(&self) -> usize {
        self.domains.iter().map(BTreeSet::len).sum()
    }

    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &BTreeSet<Word>)> {
        self.domains.iter().enumerate()
    }
}
