//! Seed words and the candidate set that accumulates across stages.

use std::collections::HashSet;
use std::fmt;

use crate::error::WordlistError;

/// A trimmed, non-empty seed word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseWord(String);

impl BaseWord {
    /// Trims `raw` and wraps it. Returns `None` if nothing is left.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(BaseWord(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BaseWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deduplicated collection of generated candidates.
///
/// Uniqueness comes from the underlying `HashSet`; ordering only exists
/// once the set is sorted for export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Adds a candidate. Returns `true` if it was not present yet.
    pub fn insert(&mut self, word: String) -> bool {
        self.words.insert(word)
    }

    /// Adds a candidate, failing once the set grows past `limit`.
    pub(crate) fn insert_bounded(
        &mut self,
        word: String,
        limit: Option<usize>,
    ) -> Result<(), WordlistError> {
        if self.words.insert(word) {
            check_limit(self.words.len(), limit)?;
        }
        Ok(())
    }

    /// Moves every entry of `other` into `self`, honouring `limit`.
    pub(crate) fn merge_bounded(
        &mut self,
        other: CandidateSet,
        limit: Option<usize>,
    ) -> Result<(), WordlistError> {
        self.words.reserve(other.len());
        for word in other.words {
            self.insert_bounded(word, limit)?;
        }
        Ok(())
    }

    /// Entries in ascending code-point order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

pub(crate) fn check_limit(len: usize, limit: Option<usize>) -> Result<(), WordlistError> {
    match limit {
        Some(limit) if len > limit => Err(WordlistError::CandidateLimitExceeded { limit }),
        _ => Ok(()),
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        CandidateSet {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl IntoIterator for CandidateSet {
    type Item = String;
    type IntoIter = std::collections::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
