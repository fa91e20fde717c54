//! The generic trie.
//!
//! This module contains `Trie`, which walks its input with a pluggable
//! tokenizer and stores children in a pluggable collection. The map-backed,
//! list-backed and direct byte-array tries are all instances of it.

use std::fmt;

use tracing::{debug, trace};

use crate::children::{ChildStore, ListChildren, MapChildren};
use crate::node::Node;
use crate::tokenizer::Tokenizer;
use crate::{DecodeError, WordSet};

/// A generic trie using a hash map for children.
pub type MapTrie<K> = Trie<K, MapChildren<<K as Tokenizer>::Token>>;

/// A generic trie using an ordered list for children.
///
/// Suited to alphabets with few distinct tokens per level.
pub type LinkedTrie<K> = Trie<K, ListChildren<<K as Tokenizer>::Token>>;

/// A prefix tree over the tokens produced by a tokenizer `K`, with children
/// held in a `C`.
///
/// Nodes are created lazily as words are inserted and never removed.
///
/// # Examples
///
/// ```
/// use token_trie::{CodePoints, MapTrie};
///
/// let mut trie = MapTrie::new(CodePoints);
/// trie.insert("日本語").unwrap();
///
/// assert!(trie.contains("日本語"));
/// assert!(trie.contains_word("日本語"));
/// assert!(!trie.contains("日本人"));
/// ```
pub struct Trie<K: Tokenizer, C: ChildStore<K::Token>> {
    /// The root node of the trie
    root: Node<K::Token, C>,

    /// Splits input into tokens
    tokenizer: K,

    /// The number of distinct complete words
    words: usize,

    /// The number of nodes below the root
    nodes: usize,
}

impl<K, C> Trie<K, C>
where
    K: Tokenizer,
    C: ChildStore<K::Token> + Default,
{
    /// Creates an empty trie splitting its input with `tokenizer`.
    pub fn new(tokenizer: K) -> Self {
        Trie {
            root: Node::root(C::default()),
            tokenizer,
            words: 0,
            nodes: 0,
        }
    }
}

impl<K, C> Default for Trie<K, C>
where
    K: Tokenizer + Default,
    C: ChildStore<K::Token> + Default,
{
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: Tokenizer, C: ChildStore<K::Token>> Trie<K, C> {
    /// Inserts a word.
    ///
    /// Inserting the empty word succeeds and changes nothing.
    ///
    /// If the tokenizer fails part way through, the nodes created for the
    /// tokens before the failure stay in the trie and the error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::{CodePoints, LinkedTrie};
    ///
    /// let mut trie = LinkedTrie::new(CodePoints);
    /// assert!(trie.insert("ok").is_ok());
    ///
    /// let err = trie.insert(b"a\xFF").unwrap_err();
    /// assert_eq!(err.offset(), 1);
    /// ```
    pub fn insert<W: AsRef<[u8]>>(&mut self, word: W) -> Result<(), DecodeError> {
        let word = word.as_ref();
        if word.is_empty() {
            return Ok(());
        }

        let mut node = &mut self.root;
        let mut offset = 0;
        while offset < word.len() {
            let token = match node.children.next_token(&self.tokenizer, &word[offset..]) {
                Ok(token) => token,
                Err(source) => {
                    debug!(
                        len = word.len(),
                        offset,
                        cause = %source.cause,
                        "insert aborted on decode failure"
                    );
                    return Err(DecodeError::new(word, offset, source));
                }
            };
            let (child, created) = node.children.get_or_insert(token.value);
            if created {
                self.nodes += 1;
            }
            node = child;
            offset += token.consumed;
        }

        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        Ok(())
    }

    /// Returns `true` if the tokens of `word` form a path from the root.
    ///
    /// This is a prefix test: after inserting `"hello"`, `contains("hell")`
    /// is `true` as well. Use [`contains_word`](Self::contains_word) for
    /// exact membership. The empty word and undecodable words are never
    /// contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use token_trie::{Bytes, MapTrie};
    ///
    /// let mut trie = MapTrie::new(Bytes);
    /// trie.insert("hello").unwrap();
    ///
    /// assert!(trie.contains("hell"));
    /// assert!(!trie.contains("help"));
    /// assert!(!trie.contains(""));
    /// ```
    pub fn contains<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.find(word.as_ref()).is_some()
    }

    /// Returns `true` if `word` itself was inserted.
    pub fn contains_word<W: AsRef<[u8]>>(&self, word: W) -> bool {
        self.find(word.as_ref()).map_or(false, Node::is_terminal)
    }

    /// Returns the number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the number of nodes, not counting the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node<K::Token, C> {
        &self.root
    }

    /// Returns the tokenizer.
    pub fn tokenizer(&self) -> &K {
        &self.tokenizer
    }

    // Walks the tokens of `word` without creating nodes, returning the node
    // reached once the input is used up.
    fn find(&self, word: &[u8]) -> Option<&Node<K::Token, C>> {
        if word.is_empty() {
            return None;
        }

        let mut node = &self.root;
        let mut offset = 0;
        while offset < word.len() {
            let token = match node.children.next_token(&self.tokenizer, &word[offset..]) {
                Ok(token) => token,
                Err(source) => {
                    trace!(offset, cause = %source.cause, "lookup stopped on decode failure");
                    return None;
                }
            };
            node = node.children.get(&token.value)?;
            offset += token.consumed;
        }
        Some(node)
    }
}

impl<K, C> fmt::Debug for Trie<K, C>
where
    K: Tokenizer + fmt::Debug,
    K::Token: fmt::Debug,
    C: ChildStore<K::Token>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("tokenizer", &self.tokenizer)
            .field("words", &self.words)
            .field("nodes", &self.nodes)
            .field("root", &self.root)
            .finish()
    }
}

impl<K: Tokenizer, C: ChildStore<K::Token>> WordSet for Trie<K, C> {
    fn insert(&mut self, word: &[u8]) -> Result<(), DecodeError> {
        Trie::insert(self, word)
    }

    fn contains(&self, word: &[u8]) -> bool {
        Trie::contains(self, word)
    }

    fn contains_word(&self, word: &[u8]) -> bool {
        Trie::contains_word(self, word)
    }
}

// Long words make deep chains; release them without recursing.
impl<K: Tokenizer, C: ChildStore<K::Token>> Drop for Trie<K, C> {
    fn drop(&mut self) {
        let mut stack = self.root.children.drain();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain());
        }
    }
}
