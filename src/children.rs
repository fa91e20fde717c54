//! Child collections: the "child lookup by token" capability and its
//! map, list and direct byte-array implementations.

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::hash::Hash;

use crate::node::Node;
use crate::tokenizer::{Token, TokenizeError, Tokenizer};

/// A collection of child nodes keyed by token.
///
/// The trie walks only ever look a child up or create it lazily, so this is
/// all a collection has to provide. The choice of collection is a type
/// parameter of the trie and is fixed at construction.
///
/// Implementations create children with [`Node::with_token`].
pub trait ChildStore<T>: Sized {
    /// Reads the token that selects a child of this node from the front of
    /// the (non-empty) remaining input.
    ///
    /// By default this asks the tokenizer and checks that the token consumes
    /// at least one byte and no more than `input` holds. Stores whose
    /// branching depends on their own state override it.
    fn next_token<K>(&self, tokenizer: &K, input: &[u8]) -> Result<Token<T>, TokenizeError>
    where
        K: Tokenizer<Token = T>,
    {
        let token = tokenizer.next_token(input)?;
        if token.consumed == 0 {
            return Err(TokenizeError::new("tokenizer consumed no input", input));
        }
        if token.consumed > input.len() {
            return Err(TokenizeError::new("tokenizer consumed past end of input", input));
        }
        Ok(token)
    }

    /// Returns the child reached through `token`, if any.
    fn get(&self, token: &T) -> Option<&Node<T, Self>>;

    /// Returns the child reached through `token`, creating it if needed.
    ///
    /// The flag is `true` when a new node was created.
    fn get_or_insert(&mut self, token: T) -> (&mut Node<T, Self>, bool);

    /// Returns the number of children.
    fn len(&self) -> usize;

    /// Returns whether there are no children.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves all children out, leaving the collection empty.
    ///
    /// Used to release deep trees without recursing.
    fn drain(&mut self) -> Vec<Node<T, Self>>;
}

/// Children in a hash map: expected O(1) lookup by token.
pub struct MapChildren<T> {
    map: HashMap<T, Node<T, MapChildren<T>>>,
}

impl<T> Default for MapChildren<T> {
    fn default() -> Self {
        MapChildren {
            map: HashMap::new(),
        }
    }
}

impl<T: Clone + Hash + Eq> ChildStore<T> for MapChildren<T> {
    fn get(&self, token: &T) -> Option<&Node<T, Self>> {
        self.map.get(token)
    }

    fn get_or_insert(&mut self, token: T) -> (&mut Node<T, Self>, bool) {
        match self.map.entry(token) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => {
                let node = Node::with_token(entry.key().clone(), MapChildren::default());
                (entry.insert(node), true)
            }
        }
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn drain(&mut self) -> Vec<Node<T, Self>> {
        self.map.drain().map(|(_, node)| node).collect()
    }
}

/// Children in an ordered list, found by linear scan on token equality.
///
/// Lookup is O(k) in the number of children, in exchange for no hashing and
/// a compact node. Worth it only when few distinct tokens follow each prefix.
/// New children are appended at the back.
pub struct ListChildren<T> {
    nodes: Vec<Node<T, ListChildren<T>>>,
}

impl<T> Default for ListChildren<T> {
    fn default() -> Self {
        ListChildren { nodes: Vec::new() }
    }
}

impl<T> ListChildren<T> {
    /// Iterates the children front to back, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<T, ListChildren<T>>> {
        self.nodes.iter()
    }
}

impl<T: PartialEq> ChildStore<T> for ListChildren<T> {
    fn get(&self, token: &T) -> Option<&Node<T, Self>> {
        self.nodes.iter().find(|node| node.token.as_ref() == Some(token))
    }

    fn get_or_insert(&mut self, token: T) -> (&mut Node<T, Self>, bool) {
        match self.nodes.iter().position(|node| node.token.as_ref() == Some(&token)) {
            Some(idx) => (&mut self.nodes[idx], false),
            None => {
                self.nodes.push(Node::with_token(token, ListChildren::default()));
                let last = self.nodes.len() - 1;
                (&mut self.nodes[last], true)
            }
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn drain(&mut self) -> Vec<Node<T, Self>> {
        std::mem::take(&mut self.nodes)
    }
}

/// 256 child slots indexed directly by byte value.
///
/// No hashing and no comparisons, at the price of a wide node.
pub struct ByteSlots {
    slots: [Option<Box<Node<u8, ByteSlots>>>; 256],
    len: usize,
}

impl Default for ByteSlots {
    fn default() -> Self {
        ByteSlots {
            slots: std::array::from_fn(|_| None),
            len: 0,
        }
    }
}

impl ChildStore<u8> for ByteSlots {
    fn get(&self, token: &u8) -> Option<&Node<u8, Self>> {
        self.slots[usize::from(*token)].as_deref()
    }

    fn get_or_insert(&mut self, token: u8) -> (&mut Node<u8, Self>, bool) {
        let slot = &mut self.slots[usize::from(token)];
        let created = slot.is_none();
        if created {
            self.len += 1;
        }
        let node = slot.get_or_insert_with(|| {
            Box::new(Node::with_token(token, ByteSlots::default()))
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

impl<T> fmt::Debug for MapChildren<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapChildren").field("len", &self.map.len()).finish()
    }
}

impl<T> fmt::Debug for ListChildren<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListChildren").field("len", &self.nodes.len()).finish()
    }
}

impl fmt::Debug for ByteSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteSlots").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Bytes;

    #[test]
    fn test_map_get_or_insert() {
        let mut children: MapChildren<char> = MapChildren::default();

        let (node, created) = children.get_or_insert('a');
        assert!(created);
        node.terminal = true;

        let (node, created) = children.get_or_insert('a');
        assert!(!created);
        assert!(node.is_terminal());

        assert_eq!(children.len(), 1);
        assert!(children.get(&'a').is_some());
        assert!(children.get(&'b').is_none());
    }

    #[test]
    fn test_list_keeps_creation_order() {
        let mut children: ListChildren<u8> = ListChildren::default();
        for b in b"cab" {
            children.get_or_insert(*b);
        }
        children.get_or_insert(b'a');

        let order: Vec<u8> = children.iter().filter_map(|n| n.token().copied()).collect();
        assert_eq!(order, b"cab".to_vec());
        assert_eq!(children.len(), 3);
    }

    #[test]
    fn test_byte_slots() {
        let mut children = ByteSlots::default();
        assert!(children.is_empty());

        let (_, created) = children.get_or_insert(0xFF);
        assert!(created);
        let (_, created) = children.get_or_insert(0xFF);
        assert!(!created);
        children.get_or_insert(0);

        assert_eq!(children.len(), 2);
        assert_eq!(children.get(&0xFF).and_then(Node::token), Some(&0xFF));
        assert!(children.get(&1).is_none());
    }

    #[test]
    fn test_drain_empties() {
        let mut map: MapChildren<u8> = MapChildren::default();
        let mut list: ListChildren<u8> = ListChildren::default();
        let mut slots = ByteSlots::default();
        for b in 0..10u8 {
            map.get_or_insert(b);
            list.get_or_insert(b);
            slots.get_or_insert(b);
        }

        assert_eq!(map.drain().len(), 10);
        assert_eq!(list.drain().len(), 10);
        assert_eq!(slots.drain().len(), 10);
        assert!(map.is_empty());
        assert!(list.is_empty());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_next_token_bounds() {
        let children: MapChildren<u8> = MapChildren::default();

        let token = children.next_token(&Bytes, b"ab").unwrap();
        assert_eq!(token, Token::new(b'a', 1));

        let greedy = |_: &[u8]| Ok::<_, TokenizeError>(Token::new(1u8, 10));
        let err = children.next_token(&greedy, b"abc").unwrap_err();
        assert_eq!(err.cause, "tokenizer consumed past end of input");

        let stuck = |_: &[u8]| Ok::<_, TokenizeError>(Token::new(1u8, 0));
        let err = children.next_token(&stuck, b"abc").unwrap_err();
        assert_eq!(err.cause, "tokenizer consumed no input");

        // Exactly the rest of the input is fine.
        let whole = |input: &[u8]| Ok::<_, TokenizeError>(Token::new(1u8, input.len()));
        assert_eq!(children.next_token(&whole, b"abc").unwrap(), Token::new(1, 3));
    }
}
