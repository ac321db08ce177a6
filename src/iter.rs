use std::fmt;

use crate::node::Node;
use crate::{ListError, Result};

/// Forward cursor over a list's chain.
///
/// The cursor is either *active* (it holds the next node to yield) or
/// *exhausted*. It borrows the list, so the chain cannot change under it.
/// Iteration is single pass; ask the list for a fresh cursor to rescan.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>) -> Self {
        Iter { next: head }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Yields the next value, failing once the cursor is exhausted.
    pub fn try_next(&mut self) -> Result<&'a T> {
        let node = self
            .next
            .ok_or_else(|| ListError::no_such_element("no more elements in the list"))?;
        self.next = node.next.0.as_deref();
        Ok(&node.value)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("next", &self.next.map(|node| &node.value))
            .finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

#[cfg(test)]
mod tests {
    use crate::{LinkedList, ListError};

    #[test]
    fn test_empty_list_starts_exhausted() {
        let list: LinkedList<i32> = LinkedList::new();
        let mut iter = list.iter();
        assert!(!iter.has_next());
        assert!(matches!(iter.try_next(), Err(ListError::NoSuchElement { .. })));
    }

    #[test]
    fn test_yields_in_order_then_exhausts() {
        let list = LinkedList::new_from(Some(vec![1, 2])).unwrap();
        let mut iter = list.iter();

        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok(&1));
        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok(&2));
        assert!(!iter.has_next());
        assert!(matches!(iter.try_next(), Err(ListError::NoSuchElement { .. })));
        // stays exhausted
        assert!(!iter.has_next());
    }

    #[test]
    fn test_std_iterator_adapter() {
        let list = LinkedList::new_from(Some(vec![3, 1, 4, 1, 5])).unwrap();
        let doubled: Vec<i32> = list.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, vec![6, 2, 8, 2, 10]);
        assert_eq!(list.iter().count(), list.size());
    }

    #[test]
    fn test_fresh_iterator_rescans() {
        let list = LinkedList::new_from(Some(vec!["a", "b"])).unwrap();
        let mut first = list.iter();
        while first.try_next().is_ok() {}

        let second: Vec<&&str> = list.iter().collect();
        assert_eq!(second, vec![&"a", &"b"]);
    }

    #[test]
    fn test_clone_is_independent() {
        let list = LinkedList::new_from(Some(vec![1, 2, 3])).unwrap();
        let mut iter = list.iter();
        iter.next();
        let rest: Vec<i32> = iter.clone().copied().collect();
        assert_eq!(rest, vec![2, 3]);
        assert_eq!(iter.next(), Some(&2));
    }

    #[test]
    fn test_debug_shows_pending_value_only() {
        let list = LinkedList::new_from(Some(0..200_000)).unwrap();
        let mut iter = list.iter();
        assert_eq!(format!("{:?}", iter), "Iter { next: Some(0) }");
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter { next: Some(1) }");

        let empty: LinkedList<i32> = LinkedList::new();
        assert_eq!(format!("{:?}", empty.iter()), "Iter { next: None }");
    }
}
