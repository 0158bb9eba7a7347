//! Partial and complete variable-to-word assignments

use crate::crossword::{Crossword, VarId, Word};
use std::collections::BTreeMap;

/// Words chosen so far, keyed by variable id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: BTreeMap<VarId, Word>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `word` to `id`, returning the word it replaces
    pub fn insert(&mut self, id: VarId, word: Word) -> Option<Word> {
        self.values.insert(id, word)
    }

    pub fn remove(&mut self, id: VarId) -> Option<Word> {
        self.values.remove(&id)
    }

    pub fn get(&self, id: VarId) -> Option<&Word> {
        self.values.get(&id)
    }

    pub fn contains(&self, id: VarId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether every variable of `crossword` has a word
    pub fn is_complete(&self, crossword: &Crossword) -> bool {
        (0..crossword.variable_count()).all(|id| self.contains(id))
    }

    /// Assigned `(variable id, word)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &Word)> {
        self.values.iter().map(|(&id, word)| (id, word))
    }
}

impl FromIterator<(VarId, Word)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (VarId, Word)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
