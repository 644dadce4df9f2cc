//! The cursor protocol shared by [`BufferCursor`] and [`NodeCursor`].
//!
//! A cursor sits in a *gap* of the sequence. In a sequence with length *n*
//! there are *n* + 1 gaps, indexed by 0, 1, ..., *n*; gap *i* lies right
//! before the element at index *i*:
//! ```text
//!   [ A B C D ]
//!    ^ ^ ^ ^ ^
//!    0 1 2 3 4
//! ```
//! Stepping forward returns the element right after the gap and moves past
//! it; stepping backward returns the element right before the gap and moves
//! past it. A mutation ([`remove_current`], [`replace_current`]) always
//! targets the element the last step passed over, which is behind the cursor
//! after a forward step and ahead of it after a backward step.
//!
//! [`BufferCursor`]: crate::buffer::cursor::BufferCursor
//! [`NodeCursor`]: crate::node::cursor::NodeCursor
//! [`remove_current`]: SequenceCursor::remove_current
//! [`replace_current`]: SequenceCursor::replace_current

use crate::buffer::cursor::BufferCursor;
use crate::error::{Error, Result};
use crate::node::cursor::NodeCursor;

/// The direction of the last successful step of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// The cursor stepped towards the end; the element it passed is behind it.
    Forward,
    /// The cursor stepped towards the start; the element it passed is ahead of it.
    Backward,
}

/// A bidirectional cursor that can mutate its sequence while traversing it.
///
/// See the [module documentation](self) for the gap model.
pub trait SequenceCursor<T> {
    /// Length of the underlying sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the underlying sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the element a forward step would return.
    fn next_index(&self) -> usize;

    /// Index of the element a backward step would return, or `None` at the start.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    fn has_next(&self) -> bool {
        self.next_index() < self.len()
    }

    fn has_previous(&self) -> bool {
        self.next_index() > 0
    }

    /// Direction of the last successful step, if any.
    fn last_move(&self) -> Option<ShiftDirection>;

    /// Returns the next element and moves past it.
    ///
    /// Fails with [`Error::NoSuchElement`] at the end of the sequence.
    fn step_forward(&mut self) -> Result<&T>;

    /// Returns the previous element and moves back past it.
    ///
    /// Fails with [`Error::NoSuchElement`] at the start of the sequence.
    fn step_backward(&mut self) -> Result<&T>;

    /// Removes the element returned by the last step.
    ///
    /// Fails with [`Error::IllegalState`] unless the cursor has stepped since
    /// it was created or last mutated the sequence.
    fn remove_current(&mut self) -> Result<T>;

    /// Replaces the element returned by the last step, returning the old one.
    ///
    /// Fails with [`Error::IllegalState`] under the same conditions as
    /// [`SequenceCursor::remove_current`].
    fn replace_current(&mut self, item: T) -> Result<T>;

    /// Inserts `item` at the cursor; the new element ends up right behind it.
    fn insert_here(&mut self, item: T);
}

/// Position and validity bookkeeping of a cursor, independent of storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CursorState {
    index: usize,
    last_move: Option<ShiftDirection>,
    can_mutate: bool,
}

impl CursorState {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            last_move: None,
            can_mutate: false,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn last_move(&self) -> Option<ShiftDirection> {
        self.last_move
    }

    /// Records a forward step and returns the index of the element passed over.
    pub(crate) fn step_forward(&mut self) -> usize {
        let passed = self.index;
        self.index += 1;
        self.last_move = Some(ShiftDirection::Forward);
        self.can_mutate = true;
        passed
    }

    /// Records a backward step and returns the index of the element passed over.
    pub(crate) fn step_backward(&mut self) -> usize {
        debug_assert!(self.index > 0, "stepped backward from the start");
        self.index -= 1;
        self.last_move = Some(ShiftDirection::Backward);
        self.can_mutate = true;
        self.index
    }

    /// Direction of the step whose element a mutation would target.
    pub(crate) fn mutation_direction(&self) -> Result<ShiftDirection> {
        match self.last_move {
            Some(direction) if self.can_mutate => Ok(direction),
            _ => Err(Error::IllegalState),
        }
    }

    /// Index of the element a mutation would target.
    pub(crate) fn mutation_index(&self) -> Result<usize> {
        Ok(match self.mutation_direction()? {
            ShiftDirection::Backward => self.index,
            ShiftDirection::Forward => self.index - 1,
        })
    }

    /// Records the removal of the targeted element.
    ///
    /// After a forward step the element was behind the cursor, so the cursor
    /// follows the shift to keep pointing at the same successor.
    pub(crate) fn removed(&mut self) {
        if self.last_move == Some(ShiftDirection::Forward) {
            self.index -= 1;
        }
        self.can_mutate = false;
    }

    /// Records an insertion at the cursor.
    pub(crate) fn inserted(&mut self) {
        self.index += 1;
        self.can_mutate = false;
    }
}

macro_rules! impl_sequence_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> SequenceCursor<T> for $CURSOR<'a, T> {
            fn len(&self) -> usize {
                $CURSOR::len(self)
            }
            fn next_index(&self) -> usize {
                $CURSOR::next_index(self)
            }
            fn last_move(&self) -> Option<ShiftDirection> {
                $CURSOR::last_move(self)
            }
            fn step_forward(&mut self) -> Result<&T> {
                $CURSOR::step_forward(self)
            }
            fn step_backward(&mut self) -> Result<&T> {
                $CURSOR::step_backward(self)
            }
            fn remove_current(&mut self) -> Result<T> {
                $CURSOR::remove_current(self)
            }
            fn replace_current(&mut self, item: T) -> Result<T> {
                $CURSOR::replace_current(self, item)
            }
            fn insert_here(&mut self, item: T) {
                $CURSOR::insert_here(self, item)
            }
        }
    };
}

impl_sequence_cursor!(BufferCursor);
impl_sequence_cursor!(NodeCursor);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_cannot_mutate() {
        let state = CursorState::new(2);
        assert_eq!(state.index(), 2);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.mutation_index(), Err(Error::IllegalState));
    }

    #[test]
    fn forward_step_targets_element_behind() {
        let mut state = CursorState::new(0);
        assert_eq!(state.step_forward(), 0);
        assert_eq!(state.step_forward(), 1);
        assert_eq!(state.index(), 2);
        assert_eq!(state.mutation_index(), Ok(1));

        state.removed();
        assert_eq!(state.index(), 1);
        assert_eq!(state.mutation_index(), Err(Error::IllegalState));
    }

    #[test]
    fn backward_step_targets_element_ahead() {
        let mut state = CursorState::new(3);
        assert_eq!(state.step_backward(), 2);
        assert_eq!(state.mutation_direction(), Ok(ShiftDirection::Backward));
        assert_eq!(state.mutation_index(), Ok(2));

        state.removed();
        assert_eq!(state.index(), 2);
        assert_eq!(state.mutation_index(), Err(Error::IllegalState));
    }

    #[test]
    fn insertion_blocks_mutation() {
        let mut state = CursorState::new(1);
        state.step_forward();
        state.inserted();
        assert_eq!(state.index(), 3);
        assert_eq!(state.last_move(), Some(ShiftDirection::Forward));
        assert_eq!(state.mutation_index(), Err(Error::IllegalState));
    }
}
