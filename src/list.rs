//! Arena-backed circular doubly linked list.
//!
//! Nodes live in a growable slot array and link to each other by slot index,
//! so splicing a node to a new position never allocates and never needs raw
//! pointers. Slot 0 is a sentinel that closes the chain into a ring: its
//! `next` is the front of the list and its `prev` is the back.
//!
//! ```text
//!   slots: [ S | A | B | C | _ ]        free: [4]
//!
//!        ┌──────────────────────────────────────┐
//!        ▼                                      │
//!      [ S ] ──► [ A ] ──► [ B ] ──► [ C ] ─────┘
//!        ▲  ◄──        ◄──       ◄──      │
//!        └────────────────────────────────┘ (prev)
//! ```
//!
//! Removed slots go onto a free list and are reused by the next insertion.
//! A [`NodeId`] is only meaningful while its slot is occupied; using a stale
//! handle is a caller bug and is caught by `debug_assert!` in debug builds.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

/// Slot index of the sentinel node.
const SENTINEL: usize = 0;

/// Stable handle to a node in a [`List`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct Node<T> {
    /// `None` for the sentinel and for vacant slots.
    value: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node {
            value: None,
            prev: SENTINEL,
            next: SENTINEL,
        }
    }
}

/// A circular doubly linked list whose nodes are addressed by [`NodeId`].
///
/// # Examples
///
/// ```
/// use lfucache::list::List;
///
/// let mut list = List::new();
/// let a = list.push_before("a", list.sentinel());
/// let b = list.push_before("b", list.sentinel());
/// list.move_before(b, a);
///
/// assert_eq!(list.values().copied().collect::<Vec<_>>(), ["b", "a"]);
/// assert_eq!(list.remove_last(), "a");
/// ```
pub struct List<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `cap` nodes before reallocating.
    pub fn with_capacity(cap: usize) -> Self {
        let mut nodes = Vec::with_capacity(cap + 1);
        nodes.push(Node::sentinel());
        List {
            nodes,
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of nodes in the list, excluding the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the sentinel handle. Inserting before it appends at the back.
    #[inline]
    pub fn sentinel(&self) -> NodeId {
        NodeId(SENTINEL)
    }

    /// Returns the first node, or `None` if the list is empty.
    #[inline]
    pub fn front(&self) -> Option<NodeId> {
        self.link(self.nodes[SENTINEL].next)
    }

    /// Returns the last node, or `None` if the list is empty.
    #[inline]
    pub fn back(&self) -> Option<NodeId> {
        self.link(self.nodes[SENTINEL].prev)
    }

    /// Returns the node following `node`. This is the sentinel when `node`
    /// is the back of the list.
    #[inline]
    pub fn next(&self, node: NodeId) -> NodeId {
        NodeId(self.nodes[node.0].next)
    }

    /// Returns the node preceding `node`. This is the sentinel when `node`
    /// is the front of the list.
    #[inline]
    pub fn prev(&self, node: NodeId) -> NodeId {
        NodeId(self.nodes[node.0].prev)
    }

    /// Returns the value stored at `node`, or `None` for the sentinel or a
    /// vacant slot.
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(node.0).and_then(|n| n.value.as_ref())
    }

    /// Mutable counterpart of [`List::get`].
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(node.0).and_then(|n| n.value.as_mut())
    }

    /// Inserts `value` immediately before `anchor` and returns its handle.
    ///
    /// Passing [`List::sentinel`] as the anchor appends at the back.
    pub fn push_before(&mut self, value: T, anchor: NodeId) -> NodeId {
        debug_assert!(self.is_linked(anchor), "anchor {anchor:?} is not in the list");

        let prev = self.nodes[anchor.0].prev;
        let node = Node {
            value: Some(value),
            prev,
            next: anchor.0,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.nodes[prev].next = slot;
        self.nodes[anchor.0].prev = slot;
        self.len += 1;
        NodeId(slot)
    }

    /// Unlinks `node` and splices it back in immediately before `anchor`.
    ///
    /// Does nothing when `node == anchor`. Never allocates.
    pub fn move_before(&mut self, node: NodeId, anchor: NodeId) {
        debug_assert!(self.is_occupied(node), "node {node:?} is not in the list");
        debug_assert!(self.is_linked(anchor), "anchor {anchor:?} is not in the list");

        if node == anchor {
            return;
        }
        self.unlink(node.0);

        let prev = self.nodes[anchor.0].prev;
        self.nodes[node.0].prev = prev;
        self.nodes[node.0].next = anchor.0;
        self.nodes[prev].next = node.0;
        self.nodes[anchor.0].prev = node.0;
    }

    /// Removes the last node and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn remove_last(&mut self) -> T {
        assert!(!self.is_empty(), "remove_last called on an empty list");
        let last = NodeId(self.nodes[SENTINEL].prev);
        self.remove(last)
    }

    /// Removes `node` from the list and returns its value.
    ///
    /// # Panics
    ///
    /// Panics if `node` is the sentinel or a vacant slot.
    pub fn remove(&mut self, node: NodeId) -> T {
        let value = match self.nodes.get_mut(node.0).and_then(|n| n.value.take()) {
            Some(value) => value,
            None => panic!("remove called with a vacant node {node:?}"),
        };
        self.unlink(node.0);

        let slot = &mut self.nodes[node.0];
        slot.prev = SENTINEL;
        slot.next = SENTINEL;
        self.free.push(node.0);
        self.len -= 1;
        value
    }

    /// Removes every node, keeping the backing allocation.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[SENTINEL] = Node::sentinel();
        self.free.clear();
        self.len = 0;
    }

    /// Returns a lazy front-to-back iterator over the stored values.
    ///
    /// Each call starts a fresh traversal of the current contents.
    pub fn values(&self) -> Values<'_, T> {
        Values {
            list: self,
            cursor: self.nodes[SENTINEL].next,
            remaining: self.len,
        }
    }

    fn link(&self, slot: usize) -> Option<NodeId> {
        if slot == SENTINEL {
            None
        } else {
            Some(NodeId(slot))
        }
    }

    fn unlink(&mut self, slot: usize) {
        let Node { prev, next, .. } = self.nodes[slot];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    fn is_occupied(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.value.is_some())
    }

    fn is_linked(&self, node: NodeId) -> bool {
        node.0 == SENTINEL || self.is_occupied(node)
    }

    /// Walks the ring in both directions and checks that every link is
    /// mirrored, that the walk length equals `len`, and that no occupied
    /// slot is on the free list.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let mut count = 0;
        let mut cursor = self.nodes[SENTINEL].next;
        let mut prev = SENTINEL;
        while cursor != SENTINEL {
            assert!(self.nodes[cursor].value.is_some(), "vacant slot {cursor} is linked");
            assert_eq!(self.nodes[cursor].prev, prev, "broken prev link at {cursor}");
            prev = cursor;
            cursor = self.nodes[cursor].next;
            count += 1;
            assert!(count <= self.len, "ring is longer than len");
        }
        assert_eq!(self.nodes[SENTINEL].prev, prev, "sentinel prev is not the back");
        assert_eq!(count, self.len);
        assert_eq!(self.nodes.len() - 1, self.len + self.free.len());
        for &slot in &self.free {
            assert!(self.nodes[slot].value.is_none(), "occupied slot {slot} is free");
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for List<T> {
    type Output = T;

    fn index(&self, node: NodeId) -> &T {
        match self.get(node) {
            Some(value) => value,
            None => panic!("no value at {node:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for List<T> {
    fn index_mut(&mut self, node: NodeId) -> &mut T {
        match self.get_mut(node) {
            Some(value) => value,
            None => panic!("no value at {node:?}"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Front-to-back iterator over the values of a [`List`].
///
/// Created by [`List::values`].
pub struct Values<'a, T> {
    list: &'a List<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        Values {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Values<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Values")
            .field("remaining", &self.remaining)
            .finish()
    }
}
