use crate::element::Element;
use crate::iter::Iter;
use crate::list::LinkedList;
use crate::Result;

/// The capability set of an indexed, iterable list.
///
/// [`LinkedList`] is the implementation shipped with the crate; code that
/// only needs list behaviour can take `impl List<T>` instead.
pub trait List<T: Element> {
    type Cursor<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, value: T) -> Result<()>;
    fn add_at(&mut self, index: usize, value: T) -> Result<()>;
    fn remove(&mut self) -> Result<T>;
    fn remove_at(&mut self, index: usize) -> Result<T>;
    fn remove_value(&mut self, value: &T) -> Result<T>;
    fn set(&mut self, index: usize, value: T) -> Result<T>;
    fn get(&self, index: usize) -> Result<&T>;
    fn contains(&self, value: &T) -> Result<bool>;
    fn clear(&mut self);
    fn is_empty(&self) -> bool;
    fn size(&self) -> usize;
    fn iter(&self) -> Self::Cursor<'_>;
}

impl<T: Element> List<T> for LinkedList<T> {
    type Cursor<'a> = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, value: T) -> Result<()> {
        LinkedList::add(self, value)
    }

    fn add_at(&mut self, index: usize, value: T) -> Result<()> {
        LinkedList::add_at(self, index, value)
    }

    fn remove(&mut self) -> Result<T> {
        LinkedList::remove(self)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        LinkedList::remove_at(self, index)
    }

    fn remove_value(&mut self, value: &T) -> Result<T> {
        LinkedList::remove_value(self, value)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        LinkedList::set(self, index, value)
    }

    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }

    fn contains(&self, value: &T) -> Result<bool> {
        LinkedList::contains(self, value)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }

    fn size(&self) -> usize {
        LinkedList::size(self)
    }

    fn iter(&self) -> Self::Cursor<'_> {
        LinkedList::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListError;

    fn fill<L: List<i32>>(list: &mut L, values: &[i32]) -> Result<()> {
        for &value in values {
            list.add(value)?;
        }
        Ok(())
    }

    fn total<L: List<i32>>(list: &L) -> i32 {
        list.iter().sum()
    }

    #[test]
    fn test_generic_code_drives_linked_list() {
        let mut list = LinkedList::new();
        fill(&mut list, &[1, 2, 3]).unwrap();
        assert_eq!(total(&list), 6);
        assert_eq!(List::size(&list), 3);
    }

    #[test]
    fn test_generic_remove_reports_empty_list() {
        fn take_head<L: List<Option<u8>>>(list: &mut L) -> Result<Option<u8>> {
            list.remove()
        }

        let mut list: LinkedList<Option<u8>> = LinkedList::new();
        assert!(matches!(
            take_head(&mut list),
            Err(ListError::NoSuchElement { .. })
        ));
        List::add(&mut list, Some(4)).unwrap();
        assert_eq!(take_head(&mut list), Ok(Some(4)));
    }

    #[test]
    fn test_trait_methods_match_inherent_methods() {
        let mut list = LinkedList::new_from(Some(vec![10, 20, 30])).unwrap();
        assert_eq!(List::get(&list, 1), Ok(&20));
        assert_eq!(List::set(&mut list, 1, 21), Ok(20));
        assert_eq!(List::contains(&list, &21), Ok(true));
        assert_eq!(List::remove_value(&mut list, &30), Ok(30));
        assert_eq!(List::remove_at(&mut list, 0), Ok(10));
        List::add_at(&mut list, 0, 5).unwrap();
        assert_eq!(list.to_vec(), vec![5, 21]);
        List::clear(&mut list);
        assert!(List::is_empty(&list));
    }
}
