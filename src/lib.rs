//! # Token Trie
//!
//! Prefix trees (tries) over sequences of tokens cut from byte strings.
//!
//! Four variants share one contract, [`WordSet`]:
//!
//! - [`MapTrie`]: a generic trie keyed by the tokens of a caller supplied
//!   [`Tokenizer`], children in a hash map
//! - [`LinkedTrie`]: the same, children in an ordered list scanned linearly
//! - [`AsciiTrie`]: one byte per level, 256 directly indexed child slots
//! - [`AsciiReduxTrie`]: each byte split into two nibbles on consecutive
//!   levels, 16 child slots per node
//!
//! The two ASCII variants always agree on membership; they differ only in
//! node width and tree depth.
//!
//! ## `contains` is a prefix test
//!
//! `contains` reports whether the tokens of a word form a path from the root,
//! so every prefix of an inserted word is "contained". `contains_word`
//! additionally requires that a word ends where the walk stops.
//!
//! ## Example
//!
//! ```rust
//! use token_trie::{CodePoints, MapTrie};
//!
//! let mut trie = MapTrie::new(CodePoints);
//! trie.insert("hello").unwrap();
//!
//! assert!(trie.contains("hello"));
//! assert!(trie.contains("hell"));
//! assert!(!trie.contains_word("hell"));
//! ```
//!
//! None of the tries lock internally. Share one across threads behind a
//! `RwLock` or similar.

mod ascii;
mod children;
mod node;
mod redux;
mod tokenizer;
mod trie;

use std::fmt;

pub use crate::ascii::AsciiTrie;
pub use crate::children::{ByteSlots, ChildStore, ListChildren, MapChildren};
pub use crate::node::Node;
pub use crate::redux::{next_nibble, AsciiReduxTrie, Nibble, NibbleSlots};
pub use crate::tokenizer::{Bytes, CodePoints, Token, TokenizeError, Tokenizer};
pub use crate::trie::{LinkedTrie, MapTrie, Trie};

/// The insertion and membership contract shared by every trie variant.
///
/// ```rust
/// use token_trie::{AsciiReduxTrie, AsciiTrie, WordSet};
///
/// fn load(set: &mut dyn WordSet, words: &[&str]) {
///     for w in words {
///         set.insert(w.as_bytes()).unwrap();
///     }
/// }
///
/// let mut direct = AsciiTrie::new();
/// let mut redux = AsciiReduxTrie::new();
/// load(&mut direct, &["cat", "car"]);
/// load(&mut redux, &["cat", "car"]);
///
/// assert_eq!(direct.contains(b"ca"), redux.contains(b"ca"));
/// ```
pub trait WordSet {
    /// Inserts a word, failing if it cannot be tokenized.
    fn insert(&mut self, word: &[u8]) -> Result<(), DecodeError>;

    /// Returns whether the tokens of `word` form a path from the root.
    fn contains(&self, word: &[u8]) -> bool;

    /// Returns whether `word` was inserted as a complete word.
    fn contains_word(&self, word: &[u8]) -> bool;
}

/// A word could not be split into tokens.
///
/// Nodes created for the tokens before `offset` remain in the trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    word: Vec<u8>,
    offset: usize,
    source: TokenizeError,
}

impl DecodeError {
    pub(crate) fn new(word: &[u8], offset: usize, source: TokenizeError) -> Self {
        DecodeError {
            word: word.to_vec(),
            offset,
            source,
        }
    }

    /// The word that was being inserted.
    pub fn word(&self) -> &[u8] {
        &self.word
    }

    /// Byte offset into the word where tokenizing failed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Human readable cause reported by the tokenizer.
    pub fn cause(&self) -> &str {
        &self.source.cause
    }

    /// The tokenizer's own error.
    pub fn tokenize_error(&self) -> &TokenizeError {
        &self.source
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not decode word {:?} at byte {}: {}",
            String::from_utf8_lossy(&self.word),
            self.offset,
            self.source.cause
        )
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::new(b"ab\xFF", 2, TokenizeError::new("bad byte", b"\xFF"));

        assert_eq!(err.to_string(), "could not decode word \"ab\u{FFFD}\" at byte 2: bad byte");
        assert_eq!(err.cause(), "bad byte");
        assert_eq!(err.word(), b"ab\xFF");
        assert!(err.source().is_some());
    }
}
