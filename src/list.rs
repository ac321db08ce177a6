// =============================================================================
// LinkedList: an owning chain of nodes with a cached size
// =============================================================================

use std::fmt;

use itertools::Itertools;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};

use crate::element::{require_present, Element};
use crate::iter::Iter;
use crate::node::{Link, Node};
use crate::{ListError, Result};

/// A generic singly-linked list.
///
/// The list owns its first node and, through it, the whole chain. `size`
/// always equals the number of reachable nodes. Every operation validates
/// its arguments before touching the chain, so a failed call leaves the list
/// exactly as it was. Indexed operations walk from the head and cost
/// O(index).
pub struct LinkedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, size: 0 }
    }

    /// Number of elements. Cached, O(1).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// A fresh cursor positioned at the current head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref())
    }

    /// Removes and returns the first element.
    pub fn remove(&mut self) -> Result<T> {
        let value = Self::unlink(&mut self.head)
            .ok_or_else(|| ListError::no_such_element("the list is empty"))?;
        self.size -= 1;
        log::trace!("removed head, size now {}", self.size);
        Ok(value)
    }

    /// Drops every node. Unlinks one node at a time so long chains do not
    /// recurse.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.0.take();
        }
        self.size = 0;
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The slot that owns the node at `index`. `index == size` yields the
    /// empty slot after the tail.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next.0,
                None => break,
            }
        }
        link
    }

    /// Takes the node out of `link`, splices its successor in, and returns
    /// its value.
    fn unlink(link: &mut Link<T>) -> Option<T> {
        link.take().map(|boxed| {
            let Node { value, mut next } = *boxed;
            *link = next.0.take();
            value
        })
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index >= bound {
            log::debug!("index {} rejected for size {}", index, self.size);
            return Err(ListError::index_out_of_range(index, self.size));
        }
        Ok(())
    }
}

impl<T: Element> LinkedList<T> {
    /// Builds a list by appending each element of `seq` in order.
    ///
    /// `None` stands for an absent sequence and is rejected. An absent
    /// element anywhere in the sequence fails the whole construction.
    pub fn new_from<I>(seq: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let seq = seq.ok_or_else(|| {
            ListError::invalid_argument("cannot build a list from an absent sequence")
        })?;

        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for value in seq {
            require_present(&value, "cannot add an absent element")?;
            let node = tail.insert(Box::new(Node::detached(value, None)));
            tail = &mut node.next.0;
            list.size += 1;
        }
        Ok(list)
    }

    /// Appends at the tail. O(n).
    pub fn add(&mut self, value: T) -> Result<()> {
        require_present(&value, "cannot add an absent element")?;

        let mut tail = &mut self.head;
        while let Some(node) = tail {
            tail = &mut node.next.0;
        }
        *tail = Some(Box::new(Node::detached(value, None)));
        self.size += 1;
        log::trace!("appended, size now {}", self.size);
        Ok(())
    }

    /// Inserts before position `index`; `index == size` appends.
    pub fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index, self.size + 1)?;
        require_present(&value, "cannot add an absent element")?;

        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(Node::detached(value, next)));
        self.size += 1;
        log::trace!("inserted at {}, size now {}", index, self.size);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// An empty list reports `NoSuchElement` whatever the index.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::no_such_element("the list is empty"));
        }
        self.check_index(index, self.size)?;

        let size = self.size;
        let value =
            Self::unlink(self.link_at(index)).unwrap_or_else(|| broken_chain(index, size));
        self.size -= 1;
        log::trace!("removed at {}, size now {}", index, self.size);
        Ok(value)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Every node is compared, the tail included.
    pub fn remove_value(&mut self, value: &T) -> Result<T> {
        require_present(value, "cannot remove an absent element")?;
        if self.is_empty() {
            return Err(ListError::no_such_element("the list is empty"));
        }

        let mut link = &mut self.head;
        while link.as_ref().map_or(false, |node| node.value != *value) {
            link = &mut link.as_mut().unwrap().next.0;
        }
        let removed = Self::unlink(link).ok_or_else(|| {
            log::debug!("value {:?} not found", value);
            ListError::no_such_element("the element is not in the list")
        })?;
        self.size -= 1;
        log::trace!("removed by value, size now {}", self.size);
        Ok(removed)
    }

    /// Replaces the element at `index` and returns the one it held.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index, self.size)?;
        require_present(&value, "cannot set an absent element")?;

        let size = self.size;
        let node = self
            .link_at(index)
            .as_deref_mut()
            .unwrap_or_else(|| broken_chain(index, size));
        log::trace!("replaced value at {}", index);
        Ok(std::mem::replace(&mut node.value, value))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, self.size)?;
        Ok(self
            .iter()
            .nth(index)
            .unwrap_or_else(|| broken_chain(index, self.size)))
    }

    pub fn contains(&self, value: &T) -> Result<bool> {
        require_present(value, "cannot search for an absent element")?;
        Ok(self.iter().any(|candidate| candidate == value))
    }
}

/// Indices are checked against the cached size before any walk, so a walk
/// that runs off the chain means the size no longer matches the nodes.
fn broken_chain(index: usize, size: usize) -> ! {
    unreachable!("chain ends before index {} although size is {}", index, size)
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for value in self.iter() {
            let node = tail.insert(Box::new(Node::detached(value.clone(), None)));
            tail = &mut node.next.0;
        }
        list.size = self.size;
        list
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Multi-line summary: identity, emptiness, size, head and contents.
impl<T: fmt::Debug> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== LINKEDLIST {:p} =====", self)?;
        writeln!(f, "is_empty: {}", self.is_empty())?;
        writeln!(f, "size: {}", self.size)?;
        match self.head() {
            Some(node) => writeln!(f, "head: {:?}", node.value)?,
            None => writeln!(f, "head: none")?,
        }
        writeln!(
            f,
            "data: [{}]",
            self.iter().map(|value| format!("{:?}", value)).join(", ")
        )?;
        write!(f, "============================")
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator; pops from the head.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T: Element> TryFrom<Vec<T>> for LinkedList<T> {
    type Error = ListError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        LinkedList::new_from(Some(values))
    }
}

impl<T: Serialize> Serialize for LinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for LinkedList<T>
where
    T: Element + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        LinkedList::new_from(Some(values)).map_err(D::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(test)]
mod properties {
    use crate::{LinkedList, ListError};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_size_tracks_successful_operations(
            ops in prop::collection::vec((any::<bool>(), any::<i16>()), 0..64)
        ) {
            let mut list = LinkedList::new();
            let mut expected = 0usize;
            for (is_add, value) in ops {
                if is_add {
                    list.add(value).unwrap();
                    expected += 1;
                } else if list.remove().is_ok() {
                    expected -= 1;
                }
            }
            prop_assert_eq!(list.size(), expected);
            prop_assert_eq!(list.to_vec().len(), list.size());
            prop_assert_eq!(list.iter().count(), list.size());
        }

        #[test]
        fn prop_round_trip_through_to_vec(values in prop::collection::vec(any::<i32>(), 0..50)) {
            let list = LinkedList::new_from(Some(values.clone())).unwrap();
            let rebuilt = LinkedList::new_from(Some(list.to_vec())).unwrap();
            prop_assert_eq!(&rebuilt, &list);
            prop_assert_eq!(rebuilt.to_vec(), values);
        }

        #[test]
        fn prop_size_queries_are_stable(values in prop::collection::vec(any::<u8>(), 0..20)) {
            let list = LinkedList::new_from(Some(values)).unwrap();
            prop_assert_eq!(list.size(), list.size());
            prop_assert_eq!(list.is_empty(), list.is_empty());
        }

        #[test]
        fn prop_add_at_size_equals_add(
            values in prop::collection::vec(any::<i32>(), 0..30),
            extra in any::<i32>(),
        ) {
            let mut appended = LinkedList::new_from(Some(values.clone())).unwrap();
            let mut inserted = LinkedList::new_from(Some(values)).unwrap();
            appended.add(extra).unwrap();
            let size = inserted.size();
            inserted.add_at(size, extra).unwrap();
            prop_assert_eq!(appended, inserted);
        }

        #[test]
        fn prop_remove_at_zero_equals_remove(values in prop::collection::vec(any::<i32>(), 1..30)) {
            let mut a = LinkedList::new_from(Some(values.clone())).unwrap();
            let mut b = LinkedList::new_from(Some(values)).unwrap();
            prop_assert_eq!(a.remove_at(0), b.remove());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_matches_vec_model(
            values in prop::collection::vec(0i32..10, 0..20),
            index in 0usize..25,
            value in 0i32..10,
        ) {
            let mut list = LinkedList::new_from(Some(values.clone())).unwrap();
            let mut model = values;

            let result = list.add_at(index, value);
            if index <= model.len() {
                prop_assert!(result.is_ok());
                model.insert(index, value);
            } else {
                prop_assert_eq!(result, Err(ListError::index_out_of_range(index, model.len())));
            }
            prop_assert_eq!(list.to_vec(), model.clone());

            let removed = list.remove_value(&value);
            if let Some(position) = model.iter().position(|v| *v == value) {
                prop_assert_eq!(removed, Ok(model.remove(position)));
            } else {
                prop_assert!(removed.is_err());
            }
            prop_assert_eq!(list.to_vec(), model);
        }
    }
}
