use crate::buffer::cursor::BufferCursor;
use crate::buffer::BufferSequence;
use crate::cursor::SequenceCursor;
use crate::error::Result;
use crate::node::cursor::NodeCursor;
use crate::node::NodeSequence;

/// An ordered, index-addressable, mutable sequence.
///
/// Implemented by [`BufferSequence`] (contiguous storage) and
/// [`NodeSequence`] (doubly-linked nodes), which behave identically through
/// this trait and differ only in cost.
///
/// Every index-taking operation validates the index before it touches the
/// sequence: `0..len` for `get`, `set` and `remove`, `0..=len` for `insert`,
/// `insert_all` and `cursor_at`. On failure the sequence is left unchanged.
///
/// # Examples
///
/// ```
/// use sequences::{BufferSequence, NodeSequence, Sequence};
///
/// fn fill<S: Sequence<i32> + Default>() -> S {
///     let mut seq = S::default();
///     seq.add(1);
///     seq.add(3);
///     seq.insert(1, 2).unwrap();
///     seq
/// }
///
/// assert_eq!(fill::<BufferSequence<_>>().to_vec(), vec![1, 2, 3]);
/// assert_eq!(fill::<NodeSequence<_>>().to_vec(), vec![1, 2, 3]);
/// ```
pub trait Sequence<T> {
    type Cursor<'a>: SequenceCursor<T>
    where
        Self: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Result<&T>;

    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, item: T) -> Result<T>;

    /// Appends `item` to the end.
    fn add(&mut self, item: T);

    fn insert(&mut self, index: usize, item: T) -> Result<()>;

    /// Appends all `items`, returning `false` if there were none.
    fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> bool;

    /// Inserts all `items` at `index` in order, returning `false` if there
    /// were none.
    fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> Result<bool>;

    fn remove(&mut self, index: usize) -> Result<T>;

    /// Removes the first element equal to `item`.
    fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq;

    /// Removes every element matching `predicate`.
    fn remove_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> bool;

    /// Keeps only the elements matching `predicate`.
    fn retain_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> bool;

    /// Removes every element contained in `items`.
    ///
    /// Returns `false` without scanning when either side is empty.
    fn remove_all(&mut self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() || items.is_empty() {
            return false;
        }
        self.remove_where(|item| items.contains(item))
    }

    /// Removes every element not contained in `items`.
    ///
    /// Returns `false` without scanning when either side is empty.
    fn retain_all(&mut self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() || items.is_empty() {
            return false;
        }
        self.retain_where(|item| items.contains(item))
    }

    fn clear(&mut self);

    fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    fn last_index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq;

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        items.iter().all(|item| self.contains(item))
    }

    /// Copies the elements into a `Vec`, in order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;

    /// Provides a cursor before the first element.
    fn cursor(&mut self) -> Self::Cursor<'_>;

    /// Provides a cursor before the element at `index`.
    fn cursor_at(&mut self, index: usize) -> Result<Self::Cursor<'_>>;
}

macro_rules! impl_sequence {
    ($SEQUENCE:ident, $CURSOR:ident) => {
        impl<T> Sequence<T> for $SEQUENCE<T> {
            type Cursor<'a> = $CURSOR<'a, T> where Self: 'a;

            fn len(&self) -> usize {
                $SEQUENCE::len(self)
            }
            fn get(&self, index: usize) -> Result<&T> {
                $SEQUENCE::get(self, index)
            }
            fn get_mut(&mut self, index: usize) -> Result<&mut T> {
                $SEQUENCE::get_mut(self, index)
            }
            fn set(&mut self, index: usize, item: T) -> Result<T> {
                $SEQUENCE::set(self, index, item)
            }
            fn add(&mut self, item: T) {
                $SEQUENCE::add(self, item)
            }
            fn insert(&mut self, index: usize, item: T) -> Result<()> {
                $SEQUENCE::insert(self, index, item)
            }
            fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> bool {
                $SEQUENCE::add_all(self, items)
            }
            fn insert_all<I: IntoIterator<Item = T>>(
                &mut self,
                index: usize,
                items: I,
            ) -> Result<bool> {
                $SEQUENCE::insert_all(self, index, items)
            }
            fn remove(&mut self, index: usize) -> Result<T> {
                $SEQUENCE::remove(self, index)
            }
            fn remove_item(&mut self, item: &T) -> bool
            where
                T: PartialEq,
            {
                $SEQUENCE::remove_item(self, item)
            }
            fn remove_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> bool {
                $SEQUENCE::remove_where(self, predicate)
            }
            fn retain_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> bool {
                $SEQUENCE::retain_where(self, predicate)
            }
            fn clear(&mut self) {
                $SEQUENCE::clear(self)
            }
            fn index_of(&self, item: &T) -> Option<usize>
            where
                T: PartialEq,
            {
                $SEQUENCE::index_of(self, item)
            }
            fn last_index_of(&self, item: &T) -> Option<usize>
            where
                T: PartialEq,
            {
                $SEQUENCE::last_index_of(self, item)
            }
            fn to_vec(&self) -> Vec<T>
            where
                T: Clone,
            {
                $SEQUENCE::to_vec(self)
            }
            fn cursor(&mut self) -> Self::Cursor<'_> {
                $SEQUENCE::cursor(self)
            }
            fn cursor_at(&mut self, index: usize) -> Result<Self::Cursor<'_>> {
                $SEQUENCE::cursor_at(self, index)
            }
        }
    };
}

impl_sequence!(BufferSequence, BufferCursor);
impl_sequence!(NodeSequence, NodeCursor);

#[cfg(test)]
mod tests {
    use crate::{BufferSequence, Error, NodeSequence, Sequence, SequenceCursor};
    use std::fmt::Debug;

    fn sequence_of<S, I>(items: I) -> S
    where
        S: Sequence<i32> + Default,
        I: IntoIterator<Item = i32>,
    {
        let mut seq = S::default();
        seq.add_all(items);
        seq
    }

    fn check_scenarios<S: Sequence<i32> + Default + Debug>() {
        let mut seq: S = sequence_of([]);
        seq.add(1);
        seq.add(2);
        seq.add(3);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);

        let mut seq: S = sequence_of([1, 2, 3, 4]);
        assert_eq!(seq.insert(1, 5), Ok(()));
        assert_eq!(seq.to_vec(), vec![1, 5, 2, 3, 4]);
        assert_eq!(
            seq.remove(10),
            Err(Error::IndexOutOfBounds { index: 10, len: 5 })
        );
        assert_eq!(seq.to_vec(), vec![1, 5, 2, 3, 4]);

        let mut seq: S = sequence_of([1, 2, 3]);
        {
            let mut cursor = seq.cursor();
            assert_eq!(cursor.step_forward(), Ok(&1));
            assert_eq!(cursor.step_forward(), Ok(&2));
            assert_eq!(cursor.remove_current(), Ok(2));
            assert_eq!(cursor.next_index(), 1);
            assert_eq!(cursor.step_forward(), Ok(&3));
        }
        assert_eq!(seq.to_vec(), vec![1, 3]);

        let mut seq: S = sequence_of([1, 2, 3]);
        assert_eq!(seq.insert_all(1, [5, 6]), Ok(true));
        assert_eq!(seq.to_vec(), vec![1, 5, 6, 2, 3]);
        assert_eq!(seq.insert_all(1, []), Ok(false));
        assert_eq!(seq.to_vec(), vec![1, 5, 6, 2, 3]);

        let mut seq: S = sequence_of([1, 2, 3, 4]);
        assert!(seq.remove_all(&[2, 4]));
        assert_eq!(seq.to_vec(), vec![1, 3]);
        assert!(!seq.remove_all(&[2, 4]));
        assert_eq!(seq.to_vec(), vec![1, 3]);

        let mut seq: S = sequence_of([1, 2, 3, 4]);
        assert!(seq.retain_all(&[2, 4]));
        assert_eq!(seq.to_vec(), vec![2, 4]);
        assert!(!seq.retain_all(&[2, 4]));
        assert!(!seq.retain_all(&[0; 0]));
        assert_eq!(seq.to_vec(), vec![2, 4]);
    }

    fn check_membership<S: Sequence<i32> + Default>() {
        let seq: S = sequence_of([1, 1, 2, 2, 3, 3]);
        assert_eq!(seq.index_of(&1), Some(0));
        assert_eq!(seq.index_of(&3), Some(4));
        assert_eq!(seq.index_of(&4), None);
        assert_eq!(seq.last_index_of(&1), Some(1));
        assert_eq!(seq.last_index_of(&3), Some(5));
        assert_eq!(seq.last_index_of(&4), None);
        assert!(seq.contains(&2));
        assert!(!seq.contains(&4));
        assert!(seq.contains_all(&[1, 2, 3]));
        assert!(!seq.contains_all(&[1, 5]));
        assert!(seq.contains_all(&[0; 0]));
    }

    fn check_cursor_at<S: Sequence<i32> + Default>() {
        let mut seq: S = sequence_of([1, 2, 3]);
        assert!(matches!(
            seq.cursor_at(10).map(|cursor| cursor.next_index()),
            Err(Error::IndexOutOfBounds { index: 10, len: 3 })
        ));
        let mut cursor = seq.cursor_at(1).unwrap();
        assert!(cursor.has_next());
        assert!(cursor.has_previous());
        assert_eq!(cursor.previous_index(), Some(0));
        assert_eq!(cursor.step_forward(), Ok(&2));
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(cursor.step_backward(), Ok(&1));
        assert_eq!(cursor.previous_index(), None);
    }

    #[test]
    fn buffer_sequence_scenarios() {
        check_scenarios::<BufferSequence<i32>>();
        check_membership::<BufferSequence<i32>>();
        check_cursor_at::<BufferSequence<i32>>();
    }

    #[test]
    fn node_sequence_scenarios() {
        check_scenarios::<NodeSequence<i32>>();
        check_membership::<NodeSequence<i32>>();
        check_cursor_at::<NodeSequence<i32>>();
    }
}
