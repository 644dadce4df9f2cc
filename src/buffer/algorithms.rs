use crate::buffer::BufferSequence;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for BufferSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for BufferSequence<T> {}

impl<T: PartialOrd> PartialOrd for BufferSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.items.partial_cmp(&other.items)
    }
}

impl<T: Ord> Ord for BufferSequence<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.items.cmp(&other.items)
    }
}

impl<T: Hash> Hash for BufferSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for BufferSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> FromIterator<T> for BufferSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = BufferSequence::new();
        seq.add_all(iter);
        seq
    }
}

impl<T> Extend<T> for BufferSequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for BufferSequence<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> IntoIterator for BufferSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BufferSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut BufferSequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> BufferSequence<T> {
    /// Returns the index of the first element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let seq = BufferSequence::from_iter([1, 2, 1]);
    /// assert_eq!(seq.index_of(&1), Some(0));
    /// assert_eq!(seq.last_index_of(&1), Some(2));
    /// assert_eq!(seq.index_of(&3), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|e| e == x)
    }

    /// Returns the index of the last element equal to `x`.
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|e| e == x)
    }

    /// Returns `true` if the `BufferSequence` contains an element equal to
    /// the given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(x)
    }

    /// Returns `true` if every element of `xs` is contained. An empty `xs`
    /// is always contained.
    pub fn contains_all(&self, xs: &[T]) -> bool
    where
        T: PartialEq,
    {
        xs.iter().all(|x| self.contains(x))
    }

    /// Removes the first element equal to `x`, returning whether there was
    /// one.
    pub fn remove_item(&mut self, x: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(x) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every element for which `predicate` returns `true`, keeping
    /// the order of the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let mut seq = BufferSequence::from_iter(1..=6);
    /// assert!(seq.remove_where(|x| x % 3 == 0));
    /// assert_eq!(seq.as_slice(), &[1, 2, 4, 5]);
    /// assert!(!seq.remove_where(|x| x % 3 == 0));
    /// ```
    pub fn remove_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> bool {
        self.remove_matching(predicate, true)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> bool {
        self.remove_matching(predicate, false)
    }

    /// Removes every element contained in `xs`.
    ///
    /// Returns `false` without scanning when either side is empty.
    pub fn remove_all(&mut self, xs: &[T]) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() || xs.is_empty() {
            return false;
        }
        self.remove_matching(|e| xs.contains(e), true)
    }

    /// Removes every element not contained in `xs`.
    ///
    /// Returns `false` without scanning when either side is empty, so an
    /// empty `xs` leaves the sequence as it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::BufferSequence;
    ///
    /// let mut seq = BufferSequence::from_iter([1, 2, 3, 4]);
    /// assert!(!seq.retain_all(&[]));
    /// assert!(seq.retain_all(&[2, 4]));
    /// assert_eq!(seq.as_slice(), &[2, 4]);
    /// ```
    pub fn retain_all(&mut self, xs: &[T]) -> bool
    where
        T: PartialEq,
    {
        if self.is_empty() || xs.is_empty() {
            return false;
        }
        self.remove_matching(|e| xs.contains(e), false)
    }
}
