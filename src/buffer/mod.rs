use std::mem;

use crate::buffer::cursor::BufferCursor;
use crate::error::{check_index, check_position, Error, Result};

pub mod cursor;

mod algorithms;

/// Capacity of a `BufferSequence` created by [`BufferSequence::new`], and the
/// capacity it returns to on [`BufferSequence::clear`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Returns the capacity a buffer of capacity `old` grows to when it needs
/// room for `min` elements (`min > old`).
///
/// The buffer grows by half of its capacity, unless the immediate need is
/// larger than that.
///
/// # Examples
///
/// ```
/// use sequences::grown_capacity;
///
/// assert_eq!(grown_capacity(10, 11), 15);
/// assert_eq!(grown_capacity(10, 30), 30);
/// assert_eq!(grown_capacity(0, 1), 1);
/// ```
pub fn grown_capacity(old: usize, min: usize) -> usize {
    debug_assert!(min > old, "no growth needed");
    let min_growth = min - old;
    let preferred_growth = old >> 1;
    old + min_growth.max(preferred_growth)
}

/// The `BufferSequence` is a sequence stored in one contiguous, growable
/// buffer. Reading or writing at any index takes *O*(1) time, while inserting
/// or removing in the middle shifts the elements after it.
///
/// The buffer grows according to [`grown_capacity`], so appending is
/// amortised *O*(1).
///
/// # Examples
///
/// ```
/// use sequences::BufferSequence;
///
/// let mut seq = BufferSequence::new();
/// seq.add(1);
/// seq.add(3);
/// seq.insert(1, 2).unwrap();
///
/// assert_eq!(seq.as_slice(), &[1, 2, 3]);
/// assert_eq!(seq.capacity(), 10);
/// ```
#[derive(Clone)]
pub struct BufferSequence<T> {
    items: Vec<T>,
    initial_capacity: usize,
}

// private methods
impl<T> BufferSequence<T> {
    /// Makes room for at least `min_capacity` elements, following the
    /// growth policy.
    fn ensure_capacity(&mut self, min_capacity: usize) {
        let capacity = self.items.capacity();
        if min_capacity > capacity {
            let new_capacity = grown_capacity(capacity, min_capacity);
            self.items.reserve_exact(new_capacity - self.items.len());
        }
    }

    /// Inserts `item` at an index already checked against `0..=len`.
    pub(crate) fn insert_at(&mut self, index: usize, item: T) {
        debug_assert!(index <= self.items.len());
        self.ensure_capacity(self.items.len() + 1);
        self.items.insert(index, item);
    }

    /// Drops every element for which `predicate` returns `remove_if_matches`,
    /// keeping the others in order in a fresh buffer of the same capacity.
    ///
    /// Returns whether any element was dropped.
    pub(crate) fn remove_matching<F>(&mut self, mut predicate: F, remove_if_matches: bool) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut survivors = Vec::with_capacity(self.items.capacity());
        let mut removed = 0;
        for item in self.items.drain(..) {
            if predicate(&item) == remove_if_matches {
                removed += 1;
            } else {
                survivors.push(item);
            }
        }
        self.items = survivors;
        removed > 0
    }
}

impl<T> BufferSequence<T> {
    /// Creates an empty `BufferSequence` with [`DEFAULT_INITIAL_CAPACITY`].
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty `BufferSequence` with room for `capacity` elements.
    ///
    /// The capacity is also the one [`clear`](BufferSequence::clear) resets to.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let mut seq = BufferSequence::with_capacity(2);
    /// seq.add(1);
    /// seq.add(2);
    /// assert_eq!(seq.capacity(), 2);
    ///
    /// seq.add(3);
    /// assert_eq!(seq.capacity(), 3);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            initial_capacity: capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements the buffer holds without growing.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::{BufferSequence, Error};
    ///
    /// let seq = BufferSequence::from_iter([1, 2, 3]);
    /// assert_eq!(seq.get(1), Ok(&2));
    /// assert_eq!(seq.get(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let mut seq = BufferSequence::from_iter([0]);
    /// assert_eq!(seq.set(0, 1), Ok(0));
    /// assert_eq!(seq.get(0), Ok(&1));
    /// ```
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, item))
    }

    /// Appends an element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortised *O*(1) time.
    pub fn add(&mut self, item: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(item);
    }

    /// Inserts an element at `index`, shifting everything after it one slot
    /// to the right. Inserting at `len` appends.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::{BufferSequence, Error};
    ///
    /// let mut seq = BufferSequence::from_iter([3]);
    /// seq.insert(1, 4).unwrap();
    /// seq.insert(0, 1).unwrap();
    /// seq.insert(1, 2).unwrap();
    /// assert_eq!(seq.as_slice(), &[1, 2, 3, 4]);
    ///
    /// assert_eq!(seq.insert(10, 5), Err(Error::IndexOutOfBounds { index: 10, len: 4 }));
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        check_position(index, self.items.len())?;
        if index == self.items.len() {
            self.add(item);
        } else {
            self.insert_at(index, item);
        }
        Ok(())
    }

    /// Appends all `items`, returning `false` if there were none.
    ///
    /// The buffer grows at most once.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> bool {
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return false;
        }
        self.ensure_capacity(self.items.len() + items.len());
        self.items.extend(items);
        true
    }

    /// Inserts all `items` at `index`, keeping their order, and returns
    /// `false` if there were none.
    ///
    /// The elements from `index` on are moved aside, `items` are written
    /// starting at `index`, and the saved elements are put back after them.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let mut seq = BufferSequence::from_iter([1, 2, 3]);
    /// assert_eq!(seq.insert_all(1, [5, 6]), Ok(true));
    /// assert_eq!(seq.as_slice(), &[1, 5, 6, 2, 3]);
    ///
    /// assert_eq!(seq.insert_all(1, []), Ok(false));
    /// assert_eq!(seq.as_slice(), &[1, 5, 6, 2, 3]);
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> Result<bool> {
        check_position(index, self.items.len())?;
        let items: Vec<T> = items.into_iter().collect();
        if items.is_empty() {
            return Ok(false);
        }
        if index == self.items.len() {
            return Ok(self.add_all(items));
        }
        self.ensure_capacity(self.items.len() + items.len());
        let tail = self.items.split_off(index);
        self.items.extend(items);
        self.items.extend(tail);
        Ok(true)
    }

    /// Removes the element at `index` and returns it, shifting everything
    /// after it one slot to the left.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::{BufferSequence, Error};
    ///
    /// let mut seq = BufferSequence::from_iter([1, 2, 3, 4]);
    /// assert_eq!(seq.remove(1), Ok(2));
    /// assert_eq!(seq.remove(2), Ok(4));
    /// assert_eq!(seq.as_slice(), &[1, 3]);
    ///
    /// assert_eq!(seq.remove(10), Err(Error::IndexOutOfBounds { index: 10, len: 2 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    /// Removes all elements and goes back to a fresh buffer with the
    /// configured initial capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let mut seq = BufferSequence::from_iter(0..100);
    /// assert!(seq.capacity() >= 100);
    ///
    /// seq.clear();
    /// assert!(seq.is_empty());
    /// assert_eq!(seq.capacity(), 10);
    /// ```
    pub fn clear(&mut self) {
        self.items = Vec::with_capacity(self.initial_capacity);
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Provides a cursor before the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let mut seq = BufferSequence::from_iter([1, 2, 3]);
    /// let mut cursor = seq.cursor();
    /// assert_eq!(cursor.step_forward(), Ok(&1));
    /// cursor.insert_here(4);
    /// assert_eq!(cursor.step_forward(), Ok(&2));
    ///
    /// assert_eq!(seq.as_slice(), &[1, 4, 2, 3]);
    /// ```
    pub fn cursor(&mut self) -> BufferCursor<'_, T> {
        BufferCursor::new(self, 0)
    }

    /// Provides a cursor before the element at `index`; `index == len`
    /// places it after the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::{BufferSequence, Error};
    ///
    /// let mut seq = BufferSequence::from_iter([1, 2, 3]);
    /// assert_eq!(seq.cursor_at(3).unwrap().step_backward(), Ok(&3));
    /// assert!(matches!(
    ///     seq.cursor_at(4),
    ///     Err(Error::IndexOutOfBounds { index: 4, len: 3 })
    /// ));
    /// ```
    pub fn cursor_at(&mut self, index: usize) -> Result<BufferCursor<'_, T>> {
        check_position(index, self.items.len())?;
        Ok(BufferCursor::new(self, index))
    }
}

impl<T> Default for BufferSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}
