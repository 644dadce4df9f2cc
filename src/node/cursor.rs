use std::fmt;
use std::fmt::Formatter;
use std::mem;
use std::ptr::NonNull;

use crate::cursor::{CursorState, ShiftDirection};
use crate::error::{Error, Result};
use crate::node::{Node, NodeSequence};

/// A cursor over a `NodeSequence` with editing operations.
///
/// Besides its index, the cursor keeps the node right after its position
/// (`None` at the end), so stepping, removing, replacing and inserting all
/// take *O*(1) time.
///
/// In a sequence with length *n*, there are *n* + 1 valid positions for the
/// cursor, indexed by 0, 1, ..., *n*. See [`crate::cursor`] for the rules
/// governing mutation.
///
/// # Examples
///
/// Here is a simple example showing how the cursor moves. (The cursor is
/// denoted by `|`).
/// ```
/// use sequences::{Error, NodeSequence};
///
/// // Create a sequence: [A B C D]
/// let mut seq = NodeSequence::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D] (index = 0)
/// let mut cursor = seq.cursor();
/// assert_eq!(cursor.step_backward(), Err(Error::NoSuchElement));
///
/// // Step forward twice: [A B|C D] (index = 2)
/// assert_eq!(cursor.step_forward(), Ok(&'A'));
/// assert_eq!(cursor.step_forward(), Ok(&'B'));
///
/// // Remove the element stepped over: [A|C D] (index = 1)
/// assert_eq!(cursor.remove_current(), Ok('B'));
/// assert_eq!(cursor.next_index(), 1);
///
/// // Insert at the cursor: [A E|C D] (index = 2)
/// cursor.insert_here('E');
/// assert_eq!(cursor.step_forward(), Ok(&'C'));
///
/// assert_eq!(seq.to_vec(), vec!['A', 'E', 'C', 'D']);
/// ```
pub struct NodeCursor<'a, T: 'a> {
    list: &'a mut NodeSequence<T>,
    next: Option<NonNull<Node<T>>>,
    state: CursorState,
}

// Private methods
impl<'a, T: 'a> NodeCursor<'a, T> {
    pub(crate) fn new(
        list: &'a mut NodeSequence<T>,
        next: Option<NonNull<Node<T>>>,
        index: usize,
    ) -> Self {
        debug_assert!(index <= list.len());
        Self {
            list,
            next,
            state: CursorState::new(index),
        }
    }

    fn prev_node(&self) -> Option<NonNull<Node<T>>> {
        // SAFETY: `next` is always a node of the list or `None`.
        unsafe { self.list.prev_of(self.next) }
    }

    /// The node the last step passed over, if a mutation is allowed.
    fn target_node(&self) -> Result<NonNull<Node<T>>> {
        match self.state.mutation_direction()? {
            ShiftDirection::Backward => self.next,
            ShiftDirection::Forward => self.prev_node(),
        }
        .ok_or(Error::IllegalState)
    }
}

impl<'a, T: 'a> NodeCursor<'a, T> {
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
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.prev_node().is_some()
    }

    pub fn last_move(&self) -> Option<ShiftDirection> {
        self.state.last_move()
    }

    /// The element a forward step would return, without stepping.
    pub fn peek_next(&self) -> Option<&T> {
        // SAFETY: `next` is a node of the list.
        self.next.map(|node| unsafe { &node.as_ref().element })
    }

    /// The element a backward step would return, without stepping.
    pub fn peek_previous(&self) -> Option<&T> {
        // SAFETY: the previous node is a node of the list.
        self.prev_node()
            .map(|node| unsafe { &node.as_ref().element })
    }

    /// Returns the next element and moves past it, or fails with
    /// [`Error::NoSuchElement`] at the end.
    pub fn step_forward(&mut self) -> Result<&T> {
        let node = self.next.ok_or(Error::NoSuchElement)?;
        // SAFETY: `node` is a node of the list.
        let node = unsafe { node.as_ref() };
        self.next = node.next;
        self.state.step_forward();
        Ok(&node.element)
    }

    /// Returns the previous element and moves back past it, or fails with
    /// [`Error::NoSuchElement`] at the start.
    pub fn step_backward(&mut self) -> Result<&T> {
        let node = self.prev_node().ok_or(Error::NoSuchElement)?;
        self.next = Some(node);
        self.state.step_backward();
        // SAFETY: `node` is a node of the list.
        Ok(unsafe { &node.as_ref().element })
    }

    /// Removes the element returned by the last step.
    ///
    /// After a backward step the removed node was the one right after the
    /// cursor, so the cursor moves on to its successor.
    pub fn remove_current(&mut self) -> Result<T> {
        let target = self.target_node()?;
        if self.next == Some(target) {
            // SAFETY: `target` is a node of the list.
            self.next = unsafe { target.as_ref().next };
        }
        // SAFETY: `target` is a node of the list, and the cursor no longer
        // refers to it.
        let node = unsafe { self.list.detach_node(target) };
        self.state.removed();
        Ok(node.element)
    }

    /// Replaces the element returned by the last step and returns the old one.
    pub fn replace_current(&mut self, item: T) -> Result<T> {
        let mut target = self.target_node()?;
        // SAFETY: `target` is a node of the list, which is borrowed mutably.
        Ok(mem::replace(unsafe { &mut target.as_mut().element }, item))
    }

    /// Inserts `item` at the cursor, which ends up right after it.
    ///
    /// The inserted element cannot be removed or replaced before the cursor
    /// steps again.
    pub fn insert_here(&mut self, item: T) {
        // SAFETY: `next` is the node after the cursor position.
        unsafe { self.list.attach_node(self.next, Node::new_detached(item)) };
        self.state.inserted();
    }

    /// Temporarily view the sequence.
    pub fn view(&self) -> &NodeSequence<T> {
        self.list
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for NodeCursor<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCursor")
            .field("list", &self.list)
            .field("next", &self.peek_next())
            .field("index", &self.state.index())
            .field("last_move", &self.state.last_move())
            .finish()
    }
}

unsafe impl<T: Send> Send for NodeCursor<'_, T> {}

unsafe impl<T: Sync> Sync for NodeCursor<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::{Error, NodeSequence, ShiftDirection};

    #[test]
    fn cursor_walk() {
        let mut seq = NodeSequence::from_iter([1, 2, 3]);
        let mut cursor = seq.cursor();
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());
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
        let mut seq = NodeSequence::from_iter([1, 2, 3, 4, 5]);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.remove_current(), Err(Error::IllegalState));

        // from the front
        assert_eq!(cursor.step_forward(), Ok(&1));
        assert_eq!(cursor.remove_current(), Ok(1));
        assert_eq!(cursor.next_index(), 0);
        assert!(!cursor.has_previous());
        assert_eq!(cursor.remove_current(), Err(Error::IllegalState));
        assert_eq!(cursor.step_forward(), Ok(&2));

        // from the middle
        assert_eq!(cursor.step_forward(), Ok(&3));
        assert_eq!(cursor.remove_current(), Ok(3));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.peek_previous(), Some(&2));
        assert_eq!(cursor.step_forward(), Ok(&4));

        // from the back
        assert_eq!(cursor.step_forward(), Ok(&5));
        assert_eq!(cursor.remove_current(), Ok(5));
        assert_eq!(cursor.next_index(), 2);
        assert!(!cursor.has_next());

        // backwards
        assert_eq!(cursor.step_backward(), Ok(&4));
        assert_eq!(cursor.remove_current(), Ok(4));
        assert_eq!(cursor.next_index(), 1);
        assert!(!cursor.has_next());
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(cursor.remove_current(), Ok(2));
        assert_eq!(cursor.next_index(), 0);
        assert!(cursor.is_empty());
        assert!(!cursor.has_next());
        assert!(!cursor.has_previous());

        assert!(seq.is_empty());
        assert_eq!(seq.front(), None);
        assert_eq!(seq.back(), None);
    }

    #[test]
    fn cursor_replace() {
        let mut seq = NodeSequence::from_iter([1, 2, 3]);
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
        let mut seq = NodeSequence::from_iter([1, 2]);
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
        assert_eq!(cursor.step_backward(), Ok(&3));
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(seq.back(), Some(&3));
    }

    #[test]
    fn cursor_on_empty() {
        let mut seq = NodeSequence::<i32>::new();
        let mut cursor = seq.cursor();
        assert_eq!(cursor.step_forward(), Err(Error::NoSuchElement));
        assert_eq!(cursor.step_backward(), Err(Error::NoSuchElement));
        cursor.insert_here(1);
        cursor.insert_here(2);
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(cursor.remove_current(), Ok(2));
        assert_eq!(seq.to_vec(), [1]);
    }

    #[test]
    fn cursor_at_position() {
        let mut seq = NodeSequence::from_iter([1, 2, 3]);
        let mut cursor = seq.cursor_at(3).unwrap();
        assert_eq!(cursor.step_backward(), Ok(&3));
        assert_eq!(cursor.remove_current(), Ok(3));
        assert_eq!(cursor.next_index(), 2);
        assert!(matches!(
            seq.cursor_at(4),
            Err(Error::IndexOutOfBounds { index: 4, len: 2 })
        ));
        let mut cursor = seq.cursor_at(1).unwrap();
        assert_eq!(cursor.step_forward(), Ok(&2));
        assert_eq!(cursor.step_backward(), Ok(&2));
        assert_eq!(cursor.step_backward(), Ok(&1));
    }
}
