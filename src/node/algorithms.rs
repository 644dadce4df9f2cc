use crate::node::NodeSequence;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for NodeSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for NodeSequence<T> {}

impl<T: PartialOrd> PartialOrd for NodeSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for NodeSequence<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for NodeSequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        let mut cursor = self.cursor();
        for elem_other in other {
            if cursor.step_forward().is_ok() {
                // a successful step always allows a replacement
                let _ = cursor.replace_current(elem_other.clone());
            } else {
                cursor.insert_here(elem_other.clone());
            }
        }
        while cursor.step_forward().is_ok() {
            let _ = cursor.remove_current();
        }
    }
}

impl<T: Hash> Hash for NodeSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T> NodeSequence<T> {
    /// Returns the index of the first element equal to `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::NodeSequence;
    ///
    /// let seq = NodeSequence::from_iter([1, 2, 1]);
    /// assert_eq!(seq.index_of(&1), Some(0));
    /// assert_eq!(seq.last_index_of(&1), Some(2));
    /// assert_eq!(seq.index_of(&3), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|e| e == x)
    }

    /// Returns the index of the last element equal to `x`, scanning from the
    /// back.
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|e| e == x)
    }

    /// Returns `true` if the `NodeSequence` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::NodeSequence;
    ///
    /// let mut seq = NodeSequence::new();
    ///
    /// seq.push_back(0);
    /// seq.push_back(1);
    /// seq.push_back(2);
    ///
    /// assert_eq!(seq.contains(&0), true);
    /// assert_eq!(seq.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == x)
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
        let mut cursor = self.cursor();
        while let Ok(e) = cursor.step_forward() {
            if e == x {
                return cursor.remove_current().is_ok();
            }
        }
        false
    }

    /// Removes every element for which `predicate` returns `true`, keeping
    /// the order of the rest.
    pub fn remove_where<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> bool {
        self.remove_matching(predicate, true)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::NodeSequence;
    ///
    /// let mut seq = NodeSequence::from_iter(1..=6);
    /// assert!(seq.retain_where(|x| x % 2 == 0));
    /// assert_eq!(seq.to_vec(), vec![2, 4, 6]);
    /// assert!(!seq.retain_where(|x| x % 2 == 0));
    /// ```
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

#[cfg(test)]
mod tests {
    use crate::NodeSequence;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(x: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn node_compare() {
        let a = NodeSequence::from_iter([1, 2, 3]);
        let b = NodeSequence::from_iter([1, 2, 4]);
        let c = a.clone();
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_ne!(a, NodeSequence::from_iter([1, 2]));
        assert!(a < b);
        assert_eq!(hash_of(&a), hash_of(&c));
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
    }

    #[test]
    fn node_clone_from() {
        let mut longer = NodeSequence::from_iter(0..8);
        let mut shorter = NodeSequence::from_iter(10..13);
        let source = NodeSequence::from_iter(20..25);

        longer.clone_from(&source);
        assert_eq!(longer, source);
        assert_eq!(longer.len(), 5);

        shorter.clone_from(&source);
        assert_eq!(shorter, source);
        assert_eq!(shorter.back(), Some(&24));

        shorter.clone_from(&NodeSequence::new());
        assert!(shorter.is_empty());
    }

    #[test]
    fn node_remove_item() {
        let mut seq = NodeSequence::from_iter([1, 2, 1, 2]);
        assert!(seq.remove_item(&2));
        assert_eq!(seq.to_vec(), [1, 1, 2]);
        assert!(!seq.remove_item(&3));
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn node_bulk_removal() {
        let mut seq = NodeSequence::from_iter(0..10);
        assert!(!seq.remove_all(&[]));
        assert!(seq.remove_all(&[1, 3, 5, 11]));
        assert_eq!(seq.to_vec(), [0, 2, 4, 6, 7, 8, 9]);
        assert!(seq.remove_where(|x| *x > 6));
        assert_eq!(seq.to_vec(), [0, 2, 4, 6]);
        assert!(!seq.retain_all(&[]));
        assert!(seq.retain_all(&[2, 6]));
        assert_eq!(seq.to_vec(), [2, 6]);

        let mut empty = NodeSequence::<i32>::new();
        assert!(!empty.remove_all(&[1]));
        assert!(!empty.retain_all(&[1]));
    }
}
