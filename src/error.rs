use thiserror::Error;

/// Failures reported by trie operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// The word has no terminal marker in the trie. It may still be
    /// a prefix of longer words; a prefix is not a word.
    #[error("no such word: {0}")]
    WordNotFound(String),
}
