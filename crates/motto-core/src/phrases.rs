//! The ordered list of phrases the animator cycles through.

use std::ops::Index;

use thiserror::Error;

/// Phrases shown when no override is configured.
pub const DEFAULT_PHRASES: &[&str] = &[
    "Keeping our campus clean and functional...",
    "Report issues quickly and easily.",
    "Efficient resolution, better environment.",
    "Your feedback helps us improve.",
    "Together, we make a difference.",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseError {
    #[error("phrase list must contain at least one phrase")]
    Empty,
}

/// Immutable, non-empty, ordered phrase list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl Default for PhraseList {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl PhraseList {
    /// Build a phrase list, rejecting an empty one.
    pub fn new<I, S>(phrases: I) -> Result<Self, PhraseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(PhraseError::Empty);
        }
        Ok(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Never true for a list built through `new` or `default`.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Index of the phrase following `index`, wrapping to the first.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

impl Index<usize> for PhraseList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.phrases[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phrases() {
        let list = PhraseList::default();
        assert_eq!(list.len(), 5);
        assert_eq!(&list[0], "Keeping our campus clean and functional...");
        assert_eq!(&list[4], "Together, we make a difference.");
    }

    #[test]
    fn test_empty_list_rejected() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(PhraseList::new(empty), Err(PhraseError::Empty));
    }

    #[test]
    fn test_next_index_wraps() {
        let list = PhraseList::new(["a", "b", "c"]).unwrap();
        assert_eq!(list.next_index(0), 1);
        assert_eq!(list.next_index(1), 2);
        assert_eq!(list.next_index(2), 0);
    }

    #[test]
    fn test_duplicates_keep_order() {
        let list = PhraseList::new(["x", "y", "x"]).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["x", "y", "x"]);
    }
}
