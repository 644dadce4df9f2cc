//! This crate provides ordered, index-addressable sequences with two storage
//! engines behind one contract:
//!
//! - [`BufferSequence`] keeps its elements in one contiguous, growable buffer.
//!   Reading or writing at an index takes *O*(1) time; inserting or removing in
//!   the middle shifts the elements after it.
//! - [`NodeSequence`] keeps its elements in owned, doubly-linked nodes.
//!   Reaching an index takes *O*(*n*) time, walking from the closer end; once
//!   there, inserting or removing takes constant time.
//!
//! Both implement [`Sequence`], and both hand out a mutating, bidirectional
//! cursor implementing [`SequenceCursor`]. Through the traits the two engines
//! behave identically and differ only in cost.
//!
//! Here is a quick example showing how the sequences work.
//!
//! ```
//! use sequences::{BufferSequence, NodeSequence, Sequence, SequenceCursor};
//!
//! fn drop_odd<S: Sequence<i32>>(seq: &mut S) {
//!     let mut cursor = seq.cursor();
//!     while let Ok(&x) = cursor.step_forward() {
//!         if x % 2 == 1 {
//!             cursor.remove_current().unwrap();
//!         }
//!     }
//! }
//!
//! let mut buffer = BufferSequence::from_iter(1..=6);
//! let mut nodes = NodeSequence::from_iter(1..=6);
//! drop_odd(&mut buffer);
//! drop_odd(&mut nodes);
//!
//! assert_eq!(buffer.to_vec(), vec![2, 4, 6]);
//! assert_eq!(nodes.to_vec(), vec![2, 4, 6]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of a `NodeSequence` is like the following graph:
//! ```text
//!    ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──→ None
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                        ╟───────────╢
//! │  ║ payload T ║           ║ payload T ║                        ║ payload T ║
//! │  ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//! ↓      Node 0 ↑                Node 1                             Node n-1 ↑
//! None          └──────────────────────────────┐                             │
//! ╔═══════════╗                                │                             │
//! ║   head    ║ ───────────────────────────────┘                             │
//! ╟───────────╢                                                              │
//! ║   tail    ║ ─────────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!  NodeSequence
//! ```
//! Each node is allocated on heap. `head` and `tail` are both `None` in an
//! empty sequence.
//!
//! A `BufferSequence` is a `Vec` whose capacity follows [`grown_capacity`]:
//! it starts at [`DEFAULT_INITIAL_CAPACITY`] (or the capacity given to
//! [`BufferSequence::with_capacity`]), grows by half when full, and goes back
//! to its initial capacity on [`clear`](BufferSequence::clear).
//!
//! # Cursors
//!
//! [`BufferCursor`] and [`NodeCursor`] sit in the *gaps* between elements: in
//! a sequence with length *n*, there are *n* + 1 valid positions for a cursor,
//! indexed by 0, 1, ..., *n*. A cursor can:
//! - [`step_forward`]: return the next element and move past it;
//! - [`step_backward`]: return the previous element and move back past it;
//! - [`remove_current`]: remove the element returned by the last step;
//! - [`replace_current`]: replace the element returned by the last step;
//! - [`insert_here`]: insert an element at the cursor.
//!
//! Removing or replacing requires a step since the cursor was created or last
//! mutated the sequence, and fails with [`Error::IllegalState`] otherwise. See
//! the [`cursor`] module for details.
//!
//! ## Examples
//!
//! ```
//! use sequences::{Error, NodeSequence};
//!
//! let mut seq = NodeSequence::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = seq.cursor_at(2).unwrap(); // [1, 2 | 3, 4]
//! assert_eq!(cursor.step_backward(), Ok(&2)); // [1 | 2, 3, 4]
//! assert_eq!(cursor.remove_current(), Ok(2)); // [1 | 3, 4]
//! assert_eq!(cursor.remove_current(), Err(Error::IllegalState));
//!
//! cursor.insert_here(5); // [1, 5 | 3, 4]
//! assert_eq!(cursor.step_forward(), Ok(&3));
//! assert_eq!(cursor.replace_current(6), Ok(3)); // [1, 5, 6 | 4]
//!
//! assert_eq!(seq.to_vec(), vec![1, 5, 6, 4]);
//! ```
//!
//! # Errors
//!
//! Every fallible operation validates its arguments before touching the
//! sequence and returns an [`Error`]; a failed operation leaves the sequence
//! unchanged.
//!
//! [`step_forward`]: SequenceCursor::step_forward
//! [`step_backward`]: SequenceCursor::step_backward
//! [`remove_current`]: SequenceCursor::remove_current
//! [`replace_current`]: SequenceCursor::replace_current
//! [`insert_here`]: SequenceCursor::insert_here

#[doc(inline)]
pub use buffer::cursor::BufferCursor;
#[doc(inline)]
pub use buffer::{grown_capacity, BufferSequence, DEFAULT_INITIAL_CAPACITY};
#[doc(inline)]
pub use cursor::{SequenceCursor, ShiftDirection};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use node::cursor::NodeCursor;
#[doc(inline)]
pub use node::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use node::NodeSequence;
#[doc(inline)]
pub use sequence::Sequence;

pub mod buffer;
pub mod cursor;
pub mod node;

mod error;
mod sequence;
