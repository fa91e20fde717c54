//! Byte trie with directly indexed children.

use crate::children::ByteSlots;
use crate::node::Node;
use crate::tokenizer::Bytes;
use crate::trie::Trie;
use crate::{DecodeError, WordSet};

/// A trie branching on one byte per level.
///
/// Every node has 256 child slots indexed by byte value, so a step down the
/// tree is a single array access. Any byte sequence can be inserted.
///
/// # Examples
///
/// ```
/// use token_trie::AsciiTrie;
///
/// let mut trie = AsciiTrie::new();
/// trie.insert("dog").unwrap();
///
/// assert!(trie.contains("do"));
/// assert!(!trie.contains("doge"));
/// ```
#[derive(Debug, Default)]
pub struct AsciiTrie {
    inner: Trie<Bytes, ByteSlots>,
}

impl AsciiTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        AsciiTrie {
            inner: Trie::new(Bytes),
        }
    }

    /// Inserts a word. Never fails; the empty word is a no-op.
    pub fn insert<W: AsRef<[u8]>>(&mut self, word: W) -> Result<(), DecodeError> {
        self.inner.insert(word)
    }

    /// Returns `true` if the bytes of `word` form a path from the root.
    ///
    /// Prefixes of inserted words are contained; the empty word is not.
    pub fn contains<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.inner.contains(word)
    }

    /// Returns `true` if `word` itself was inserted.
    pub fn contains_word<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.inner.contains_word(word)
    }

    /// Returns the number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of nodes, not counting the root.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node<u8, ByteSlots> {
        self.inner.root()
    }
}

impl WordSet for AsciiTrie {
    fn insert(&mut self, word: &[u8]) -> Result<(), DecodeError> {
        self.inner.insert(word)
    }

    fn contains(&self, word: &[u8]) -> bool {
        self.inner.contains(word)
    }

    fn contains_word(&self, word: &[u8]) -> bool {
        self.inner.contains_word(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::children::ChildStore;

    #[test]
    fn test_one_node_per_byte() {
        let mut trie = AsciiTrie::new();
        trie.insert([0xABu8]).unwrap();

        assert_eq!(trie.node_count(), 1);
        let child = trie.root().child(&0xAB).unwrap();
        assert!(child.is_terminal());
        assert!(child.is_leaf());
    }

    #[test]
    fn test_shared_prefix_shares_nodes() {
        let mut trie = AsciiTrie::new();
        trie.insert("cat").unwrap();
        trie.insert("car").unwrap();

        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.root().children().len(), 1);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_any_byte_is_insertable() {
        let mut trie = AsciiTrie::new();
        let word: Vec<u8> = (0..=255).collect();
        trie.insert(&word).unwrap();

        assert!(trie.contains_word(&word));
        assert!(trie.contains(&word[..100]));
        assert!(!trie.contains_word(&word[..100]));
    }

    #[test]
    fn test_empty_word() {
        let mut trie = AsciiTrie::new();
        trie.insert("").unwrap();

        assert!(!trie.root().is_terminal());
        assert!(!trie.contains(""));
        assert!(trie.is_empty());
    }
}
