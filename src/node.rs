//! Node type shared by every trie variant.
//!
//! A `Node` is generic over its token type and over the collection holding its
//! children, so the same shape serves the map, list, byte-array and nibble-array
//! tries. Each node owns its children exclusively.

use std::fmt;

use crate::children::ChildStore;

/// A single trie node.
///
/// The root carries no token. Every other node carries the token on the edge
/// from its parent.
///
/// Nodes are neither `Clone` nor deeply `Debug`: both would recurse once per
/// level, and a single long word makes a chain as deep as the word.
pub struct Node<T, C> {
    /// Token on the edge from the parent, `None` for the root
    pub(crate) token: Option<T>,

    /// Whether an inserted word ends exactly here
    pub(crate) terminal: bool,

    /// Child nodes, keyed by token
    pub(crate) children: C,
}

impl<T, C> Node<T, C> {
    /// Creates a root node with the given (empty) child collection
    pub fn root(children: C) -> Self {
        Node {
            token: None,
            terminal: false,
            children,
        }
    }

    /// Creates a non-terminal node reached through `token`.
    ///
    /// [`ChildStore`] implementations use this to create children lazily.
    pub fn with_token(token: T, children: C) -> Self {
        Node {
            token: Some(token),
            terminal: false,
            children,
        }
    }

    /// Returns the token on the edge from the parent, or `None` for the root.
    pub fn token(&self) -> Option<&T> {
        self.token.as_ref()
    }

    /// Returns whether some inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the child collection.
    pub fn children(&self) -> &C {
        &self.children
    }

    /// Returns the child reached through `token`, if any.
    pub fn child(&self, token: &T) -> Option<&Node<T, C>>
    where
        C: ChildStore<T>,
    {
        self.children.get(token)
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool
    where
        C: ChildStore<T>,
    {
        self.children.is_empty()
    }
}

// Lists the direct children by count only.
impl<T: fmt::Debug, C: ChildStore<T>> fmt::Debug for Node<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("token", &self.token)
            .field("terminal", &self.terminal)
            .field("children", &self.children.len())
            .finish()
    }
}
