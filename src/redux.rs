//! Byte trie using alphabet reduction.
//!
//! Each input byte is read as two 4-bit symbols on two consecutive levels:
//! first its high nibble, then its low nibble. Nodes only need 16 child slots
//! instead of 256, at the price of a tree twice as deep.
//!
//! Which half of the next byte a node branches on is stored in the node
//! itself (see [`Nibble`]) and alternates from parent to child. Reading the
//! high nibble leaves the byte in the input; reading the low nibble consumes
//! it. The tree walk is the generic one in [`Trie`]; only the child store
//! differs.

use std::fmt;

use crate::children::ChildStore;
use crate::node::Node;
use crate::tokenizer::{Bytes, Token, TokenizeError, Tokenizer};
use crate::trie::Trie;
use crate::{DecodeError, WordSet};

/// Which half of the next input byte a node branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nibble {
    /// Bits 4..8; the byte stays in the input.
    High,
    /// Bits 0..4; the byte is consumed.
    Low,
}

impl Nibble {
    /// The side used by the children of a node using `self`.
    pub fn flip(self) -> Nibble {
        match self {
            Nibble::High => Nibble::Low,
            Nibble::Low => Nibble::High,
        }
    }
}

/// Extracts the next nibble token from `input`.
///
/// The high nibble consumes no input, the low nibble consumes the whole byte.
/// Returns `None` on empty input.
///
/// ```
/// use token_trie::{next_nibble, Nibble, Token};
///
/// assert_eq!(next_nibble(&[0xAB], Nibble::High), Some(Token::new(0xA, 0)));
/// assert_eq!(next_nibble(&[0xAB], Nibble::Low), Some(Token::new(0xB, 1)));
/// ```
pub fn next_nibble(input: &[u8], side: Nibble) -> Option<Token<u8>> {
    let byte = *input.first()?;
    Some(match side {
        Nibble::High => Token::new(byte >> 4, 0),
        Nibble::Low => Token::new(byte & 0x0F, 1),
    })
}

/// 16 child slots indexed by nibble, plus the side this node branches on.
///
/// A fresh store (the root's) branches on the high nibble.
pub struct NibbleSlots {
    side: Nibble,
    slots: [Option<Box<Node<u8, NibbleSlots>>>; 16],
    len: usize,
}

impl NibbleSlots {
    fn new(side: Nibble) -> Self {
        NibbleSlots {
            side,
            slots: Default::default(),
            len: 0,
        }
    }

    /// Which half of the next byte selects a child here.
    pub fn side(&self) -> Nibble {
        self.side
    }
}

impl Default for NibbleSlots {
    fn default() -> Self {
        NibbleSlots::new(Nibble::High)
    }
}

impl ChildStore<u8> for NibbleSlots {
    /// Reads this node's half of the next byte; the tokenizer is not consulted.
    ///
    /// High nibbles consume nothing, which is safe because the child always
    /// reads the low nibble of the same byte and consumes it.
    fn next_token<K>(&self, _tokenizer: &K, input: &[u8]) -> Result<Token<u8>, TokenizeError>
    where
        K: Tokenizer<Token = u8>,
    {
        next_nibble(input, self.side)
            .ok_or_else(|| TokenizeError::new("unexpected end of input", input))
    }

    fn get(&self, token: &u8) -> Option<&Node<u8, Self>> {
        self.slots.get(usize::from(*token))?.as_deref()
    }

    /// # Panics
    ///
    /// Panics if `token` is not a nibble (greater than 15).
    fn get_or_insert(&mut self, token: u8) -> (&mut Node<u8, Self>, bool) {
        let child_side = self.side.flip();
        let slot = &mut self.slots[usize::from(token)];
        let created = slot.is_none();
        if created {
            self.len += 1;
        }
        let node = slot.get_or_insert_with(|| {
            Box::new(Node::with_token(token, NibbleSlots::new(child_side)))
        });
        (node, created)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn drain(&mut self) -> Vec<Node<u8, Self>> {
        self.len = 0;
        self.slots.iter_mut().filter_map(Option::take).map(|node| *node).collect()
    }
}

impl fmt::Debug for NibbleSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NibbleSlots")
            .field("side", &self.side)
            .field("len", &self.len)
            .finish()
    }
}

/// A byte trie with 16-wide nodes, two levels per input byte.
///
/// Membership results are identical to [`AsciiTrie`](crate::AsciiTrie) for
/// the same sequence of operations.
///
/// # Examples
///
/// ```
/// use token_trie::AsciiReduxTrie;
///
/// let mut trie = AsciiReduxTrie::new();
/// trie.insert([0xABu8]).unwrap();
///
/// assert_eq!(trie.node_count(), 2);
/// assert!(trie.contains([0xABu8]));
/// assert!(!trie.contains([0xA0u8]));
/// ```
#[derive(Debug, Default)]
pub struct AsciiReduxTrie {
    inner: Trie<Bytes, NibbleSlots>,
}

impl AsciiReduxTrie {
    /// Creates an empty trie. The root branches on the high nibble.
    pub fn new() -> Self {
        AsciiReduxTrie {
            inner: Trie::new(Bytes),
        }
    }

    /// Inserts a word. Never fails; the empty word is a no-op.
    pub fn insert<W: AsRef<[u8]>>(&mut self, word: W) -> Result<(), DecodeError> {
        self.inner.insert(word)
    }

    /// Returns `true` if the nibbles of `word` form a path from the root.
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
    pub fn root(&self) -> &Node<u8, NibbleSlots> {
        self.inner.root()
    }
}

impl WordSet for AsciiReduxTrie {
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
