use std::fmt;

use crate::element::{require_present, Element};
use crate::Result;

/// Owning link to the rest of a chain; `None` marks the end.
pub type Link<T> = Option<Box<Node<T>>>;

/// A node's successor slot. Dropping it frees the rest of the chain one node
/// at a time, so deep chains never recurse.
pub(crate) struct Chain<T>(pub(crate) Link<T>);

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut link = self.0.take();
        while let Some(mut node) = link {
            link = node.next.0.take();
        }
    }
}

/// One cell of a singly-linked chain.
///
/// A node exclusively owns the node after it, so dropping a node drops
/// everything reachable from it. The value is never absent.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Chain<T>,
}

impl<T> Node<T> {
    pub(crate) fn detached(value: T, next: Link<T>) -> Self {
        Node {
            value,
            next: Chain(next),
        }
    }
}

impl<T: Element> Node<T> {
    pub fn new(value: T, next: Link<T>) -> Result<Self> {
        require_present(&value, "a node cannot hold an absent value")?;
        Ok(Node::detached(value, next))
    }

    /// A node with no successor.
    pub fn leaf(value: T) -> Result<Self> {
        Self::new(value, None)
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value and returns the previous one.
    pub fn set_value(&mut self, value: T) -> Result<T> {
        require_present(&value, "a node cannot hold an absent value")?;
        Ok(std::mem::replace(&mut self.value, value))
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.0.as_deref()
    }

    pub fn next_mut(&mut self) -> Option<&mut Node<T>> {
        self.next.0.as_deref_mut()
    }

    pub fn set_next(&mut self, next: Link<T>) {
        self.next = Chain(next);
    }

    /// Detaches and returns everything after this node.
    pub fn take_next(&mut self) -> Link<T> {
        self.next.0.take()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Shows this node's value and whether a successor exists, never the
/// successor itself.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.0.is_some())
            .finish()
    }
}

/// Copies the node and everything after it, walking the chain with a tail
/// cursor.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut head = Node::detached(self.value.clone(), None);
        let mut tail = &mut head.next.0;
        let mut source = self.next.0.as_deref();
        while let Some(node) = source {
            let copy = tail.insert(Box::new(Node::detached(node.value.clone(), None)));
            tail = &mut copy.next.0;
            source = node.next.0.as_deref();
        }
        head
    }
}

/// Two nodes are equal when the chains starting at them hold equal values.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut left = Some(self);
        let mut right = Some(other);
        loop {
            match (left, right) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.value == b.value => {
                    left = a.next.0.as_deref();
                    right = b.next.0.as_deref();
                }
                _ => return false,
            }
        }
    }
}
