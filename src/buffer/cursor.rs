use std::fmt;
use std::fmt::Formatter;

use crate::buffer::BufferSequence;
use crate::cursor::{CursorState, ShiftDirection};
use crate::error::{Error, Result};

/// A cursor over a `BufferSequence` with editing operations.
///
/// The cursor holds the sequence's exclusive borrow and addresses it purely
/// by index; every mutation goes through the same index-based operations as
/// [`BufferSequence::remove`], [`BufferSequence::set`] and
/// [`BufferSequence::insert`].
///
/// In a sequence with length *n*, there are *n* + 1 valid positions for the
/// cursor, indexed by 0, 1, ..., *n*. See [`crate::cursor`] for the rules
/// governing mutation.
///
/// # Examples
///
/// ```
/// use sequences::{BufferSequence, Error};
///
/// let mut seq = BufferSequence::from_iter([1, 2, 3, 4]);
/// let mut cursor = seq.cursor();
///
/// // nothing to remove before the first step
/// assert_eq!(cursor.remove_current(), Err(Error::IllegalState));
///
/// assert_eq!(cursor.step_forward(), Ok(&1));
/// assert_eq!(cursor.step_forward(), Ok(&2));
/// assert_eq!(cursor.remove_current(), Ok(2)); // becomes [1, 3, 4]
/// assert_eq!(cursor.next_index(), 1);
///
/// assert_eq!(cursor.step_forward(), Ok(&3));
/// assert_eq!(cursor.step_backward(), Ok(&3));
/// assert_eq!(cursor.replace_current(5), Ok(3)); // becomes [1, 5, 4]
///
/// assert_eq!(seq.as_slice(), &[1, 5, 4]);
/// ```
pub struct BufferCursor<'a, T: 'a> {
    list: &'a mut BufferSequence<T>,
    state: CursorState,
}

impl<'a, T: 'a> BufferCursor<'a, T> {
    pub(crate) fn new(list: &'a mut BufferSequence<T>, index: usize) -> Self {
        debug_assert!(index <= list.len());
        Self {
            list,
            state: CursorState::new(index),
        }
    }

    /// Length of the underlying sequence.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Index of the element [`step_forward`](Self::step_forward) would return.
    pub fn next_index(&self) -> usize {
        self.state.index()
    }

    /// Index of the element [`step_backward`](Self::step_backward) would
    /// return, or `None` at the start.
    pub fn previous_index(&self) -> Option<usize> {
        self.state.index().checked_sub(1)
    }

    pub fn has_next(&self) -> bool {
        self.state.index() < self.list.len()
    }

    pub fn has_previous(&self) -> bool {
        self.state.index() > 0
    }

    pub fn last_move(&self) -> Option<ShiftDirection> {
        self.state.last_move()
    }

    /// The element a forward step would return, without stepping.
    pub fn peek_next(&self) -> Option<&T> {
        self.list.as_slice().get(self.state.index())
    }

    /// The element a backward step would return, without stepping.
    pub fn peek_previous(&self) -> Option<&T> {
        let index = self.previous_index()?;
        self.list.as_slice().get(index)
    }

    /// Returns the next element and moves past it, or fails with
    /// [`Error::NoSuchElement`] at the end.
    pub fn step_forward(&mut self) -> Result<&T> {
        if !self.has_next() {
            return Err(Error::NoSuchElement);
        }
        let index = self.state.step_forward();
        self.list.get(index)
    }

    /// Returns the previous element and moves back past it, or fails with
    /// [`Error::NoSuchElement`] at the start.
    pub fn step_backward(&mut self) -> Result<&T> {
        if !self.has_previous() {
            return Err(Error::NoSuchElement);
        }
        let index = self.state.step_backward();
        self.list.get(index)
    }

    /// Removes the element returned by the last step.
    ///
    /// After a forward step the cursor moves back with the shifted elements,
    /// so the next forward step still returns the removed element's successor.
    pub fn remove_current(&mut self) -> Result<T> {
        let index = self.state.mutation_index()?;
        let item = self.list.remove(index)?;
        self.state.removed();
        Ok(item)
    }

    /// Replaces the element returned by the last step and returns the old one.
    pub fn replace_current(&mut self, item: T) -> Result<T> {
        let index = self.state.mutation_index()?;
        self.list.set(index, item)
    }

    /// Inserts `item` at the cursor, which ends up right after it.
    ///
    /// The inserted element cannot be removed or replaced before the cursor
    /// steps again.
    pub fn insert_here(&mut self, item: T) {
        self.list.insert_at(self.state.index(), item);
        self.state.inserted();
    }

    /// Temporarily view the sequence.
    pub fn view(&self) -> &BufferSequence<T> {
        self.list
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for BufferCursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferCursor")
            .field("list", &self.list)
            .field("index", &self.state.index())
            .field("last_move", &self.state.last_move())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BufferSequence, Error, ShiftDirection};

    #[test]
    fn cursor_walk() {
        let mut seq = BufferSequence::from_iter([1, 2, 3]);
        let mut cursor = seq.cursor();
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.step_backward(), Err(Error::NoSuchElement));

        assert_eq!(cursor.step_forward(), Ok(&1));
        assert_eq!(cursor.step_forward(), Ok(&2));
        assert_eq!(cursor.step_forward(), Ok(&3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_index(), 3);
        assert_eq!(cursor.previous_index(), Some(2));
        assert_eq!(cursor.step_forward(), Err(Error::NoSuchElement));
        assert_eq!(cursor.last_move(), Some(ShiftDirection::Forward));

        assert_eq!(cursor.step_backward(), Ok(&3));
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(cursor.last_move(), Some(ShiftDirection::Backward));
        assert_eq!(cursor.step_forward(), Ok(&2));
        assert_eq!(cursor.peek_next(), Some(&3));
        assert_eq!(cursor.peek_previous(), Some(&2));
    }

    #[test]
    fn cursor_remove() {
        let mut seq = BufferSequence::from_iter([1, 2, 3, 4, 5]);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.remove_current(), Err(Error::IllegalState));

        // from the beginning
        assert_eq!(cursor.step_forward(), Ok(&1));
        assert_eq!(cursor.remove_current(), Ok(1));
        assert_eq!(cursor.next_index(), 0);
        assert_eq!(cursor.remove_current(), Err(Error::IllegalState));
        assert_eq!(cursor.step_forward(), Ok(&2));

        // from the middle
        assert_eq!(cursor.step_forward(), Ok(&3));
        assert_eq!(cursor.remove_current(), Ok(3));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.step_forward(), Ok(&4));

        // from the end
        assert_eq!(cursor.step_forward(), Ok(&5));
        assert_eq!(cursor.remove_current(), Ok(5));
        assert_eq!(cursor.next_index(), 2);
        assert!(!cursor.has_next());

        // backwards
        assert_eq!(cursor.step_backward(), Ok(&4));
        assert_eq!(cursor.remove_current(), Ok(4));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(cursor.remove_current(), Ok(2));
        assert_eq!(cursor.next_index(), 0);
        assert!(cursor.is_empty());

        assert!(seq.is_empty());
    }

    #[test]
    fn cursor_replace() {
        let mut seq = BufferSequence::from_iter([1, 2, 3]);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.replace_current(0), Err(Error::IllegalState));
        assert_eq!(cursor.step_forward(), Ok(&1));
        assert_eq!(cursor.replace_current(10), Ok(1));
        assert_eq!(cursor.replace_current(11), Ok(10));
        assert_eq!(cursor.step_forward(), Ok(&2));
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(cursor.replace_current(20), Ok(2));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(seq.to_vec(), [11, 20, 3]);
    }

    #[test]
    fn cursor_insert() {
        let mut seq = BufferSequence::from_iter([1, 2]);
        let mut cursor = seq.cursor();
        cursor.insert_here(0);
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.peek_previous(), Some(&0));
        assert_eq!(cursor.remove_current(), Err(Error::IllegalState));

        assert_eq!(cursor.step_forward(), Ok(&1));
        cursor.insert_here(5);
        assert_eq!(cursor.replace_current(6), Err(Error::IllegalState));
        assert_eq!(cursor.step_forward(), Ok(&2));
        cursor.insert_here(3);
        assert!(!cursor.has_next());
        assert_eq!(cursor.len(), 5);
        assert_eq!(cursor.view().to_vec(), [0, 1, 5, 2, 3]);
    }

    #[test]
    fn cursor_at_position() {
        let mut seq = BufferSequence::from_iter([1, 2, 3]);
        let mut cursor = seq.cursor_at(3).unwrap();
        assert_eq!(cursor.step_backward(), Ok(&3));
        assert_eq!(cursor.remove_current(), Ok(3));
        assert_eq!(cursor.next_index(), 2);
        assert!(matches!(
            seq.cursor_at(4),
            Err(Error::IndexOutOfBounds { index: 4, len: 2 })
        ));
    }
}
