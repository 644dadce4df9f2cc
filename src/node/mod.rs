use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::{check_index, check_position, Error, Result};
use crate::node::cursor::NodeCursor;
use crate::node::iterator::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `NodeSequence` is a sequence of owned, doubly-linked nodes.
/// Once a position is reached, inserting or removing there takes constant
/// time; reaching the position takes *O*(*n*) time, walking from whichever
/// end is closer.
///
/// The `NodeSequence` contains:
/// - the pointers `head` and `tail` to the first and last node, both `None`
///   if the sequence is empty;
/// - a length field `len`.
///
/// The `prev` link of the first node and the `next` link of the last node are
/// `None`. Code that links nodes treats a `None` neighbour as the boundary of
/// the sequence and updates `head` or `tail` in its place.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of nodes, both inclusive;
/// - `next`: the node right after a position, `None` at the end.
///
/// # Examples
///
/// ```
/// use sequences::NodeSequence;
///
/// let mut seq = NodeSequence::new();
/// seq.add(1);
/// seq.add(3);
/// seq.insert(1, 2).unwrap();
///
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// assert_eq!(seq.front(), Some(&1));
/// assert_eq!(seq.back(), Some(&3));
/// ```
pub struct NodeSequence<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) prev: Option<NonNull<Node<T>>>,
    pub(crate) element: T,
}

/// Nodes detached from a sequence, used in bulk insertion.
///
/// When detached, reading of `front.prev` and `back.next` is invalid.
pub(crate) struct DetachedNodes<T> {
    front: NonNull<Node<T>>,
    back: NonNull<Node<T>>,
    len: usize,
}

// private methods
impl<T> NodeSequence<T> {
    pub(crate) fn head_node(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }
    pub(crate) fn tail_node(&self) -> Option<NonNull<Node<T>>> {
        self.tail
    }

    /// Returns the node right before the position whose next node is `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// sequence.
    pub(crate) unsafe fn prev_of(&self, next: Option<NonNull<Node<T>>>) -> Option<NonNull<Node<T>>> {
        match next {
            Some(next) => next.as_ref().prev,
            None => self.tail,
        }
    }

    /// Links `prev` and `next` to each other. A `None` side is the boundary
    /// of the sequence, so `head` or `tail` is set instead.
    unsafe fn connect(&mut self, prev: Option<NonNull<Node<T>>>, next: Option<NonNull<Node<T>>>) {
        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(mut next) => next.as_mut().prev = prev,
            None => self.tail = prev,
        }
    }

    /// Detach a single node `node` from the sequence, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// sequence.
    ///
    /// If the `node` does not belong to the sequence, this function call will
    /// make the sequence ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.len -= 1;
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        node
    }

    /// Attach a single detached node `node` to the sequence, right before
    /// `next` (or at the end if `next` is `None`).
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// sequence.
    pub(crate) unsafe fn attach_node(&mut self, next: Option<NonNull<Node<T>>>, node: NonNull<Node<T>>) {
        let prev = self.prev_of(next);
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, Some(node));
        self.connect(Some(node), next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
    }

    /// Attach a range of detached nodes to the sequence, right before `next`
    /// (or at the end if `next` is `None`).
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// sequence.
    unsafe fn attach_nodes(&mut self, next: Option<NonNull<Node<T>>>, detached: DetachedNodes<T>) {
        let prev = self.prev_of(next);
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, Some(detached.front));
        self.connect(Some(detached.back), next);
        self.len += detached.len;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(detached.front));
            self.assert_adjacent(Some(detached.back), next);
        }
    }

    /// Detach all nodes from the sequence, and return the detached nodes, or
    /// return `None` if the sequence is empty.
    fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        let front = self.head.take()?;
        let back = self.tail.take()?;
        let len = mem::take(&mut self.len);
        Some(DetachedNodes { front, back, len })
    }

    /// Returns the node at `index`, walking from the closer end.
    pub(crate) fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>> {
        check_index(index, self.len)?;
        let node = if index < self.len / 2 {
            let mut node = self.head;
            for _ in 0..index {
                // SAFETY: there are more than `index` nodes after `head`.
                node = node.and_then(|node| unsafe { node.as_ref().next });
            }
            node
        } else {
            let mut node = self.tail;
            for _ in index + 1..self.len {
                // SAFETY: there are more than `len - 1 - index` nodes before `tail`.
                node = node.and_then(|node| unsafe { node.as_ref().prev });
            }
            node
        };
        node.ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns the node right after position `index`, or `None` if `index`
    /// is the end position.
    pub(crate) fn node_after(&self, index: usize) -> Result<Option<NonNull<Node<T>>>> {
        check_position(index, self.len)?;
        if index == self.len {
            Ok(None)
        } else {
            self.node_at(index).map(Some)
        }
    }

    /// Detaches every node for which `predicate` returns `remove_if_matches`,
    /// keeping the others linked in order.
    ///
    /// Returns whether any node was detached.
    pub(crate) fn remove_matching<F>(&mut self, mut predicate: F, remove_if_matches: bool) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = false;
        let mut node = self.head;
        while let Some(current) = node {
            // SAFETY: `current` is a node of the sequence, and its successor
            // is read before it is detached.
            unsafe {
                node = current.as_ref().next;
                if predicate(&current.as_ref().element) == remove_if_matches {
                    drop(self.detach_node(current));
                    removed = true;
                }
            }
        }
        removed
    }

    #[cfg(debug_assertions)]
    unsafe fn assert_adjacent(&self, prev: Option<NonNull<Node<T>>>, next: Option<NonNull<Node<T>>>) {
        match prev {
            Some(prev) => assert_eq!(prev.as_ref().next, next),
            None => assert_eq!(self.head, next),
        }
        match next {
            Some(next) => assert_eq!(next.as_ref().prev, prev),
            None => assert_eq!(self.tail, prev),
        }
    }
}

impl<T> NodeSequence<T> {
    /// Create an empty `NodeSequence`
    ///
    /// # Examples
    /// ```
    /// use sequences::NodeSequence;
    /// let seq: NodeSequence<u32> = NodeSequence::new();
    /// assert!(seq.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Provides a reference to the front element, or `None` if the sequence
    /// is empty.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a node of the sequence.
        self.head.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a reference to the back element, or `None` if the sequence
    /// is empty.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a node of the sequence.
        self.tail.map(|node| unsafe { &node.as_ref().element })
    }

    /// Adds an element first in the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: `head` is the node after position 0.
        unsafe { self.attach_node(self.head, Node::new_detached(elt)) }
    }

    /// Appends an element to the back of the sequence.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        // SAFETY: `None` is the node after the end position.
        unsafe { self.attach_node(None, Node::new_detached(elt)) }
    }

    /// Removes the first element and returns it, or `None` if the sequence is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::NodeSequence;
    ///
    /// let mut seq = NodeSequence::new();
    /// assert_eq!(seq.pop_front(), None);
    ///
    /// seq.push_front(1);
    /// seq.push_front(3);
    /// assert_eq!(seq.pop_front(), Some(3));
    /// assert_eq!(seq.pop_back(), Some(1));
    /// assert_eq!(seq.pop_back(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is a node of the sequence.
        Some(unsafe { self.detach_node(head) }.element)
    }

    /// Removes the last element and returns it, or `None` if the sequence is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        // SAFETY: `tail` is a node of the sequence.
        Some(unsafe { self.detach_node(tail) }.element)
    }

    /// Returns the element at `index`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*min*(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::{Error, NodeSequence};
    ///
    /// let seq = NodeSequence::from_iter([1, 2, 3]);
    /// assert_eq!(seq.get(2), Ok(&3));
    /// assert_eq!(seq.get(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index)?;
        // SAFETY: `node` is a node of the sequence.
        Ok(unsafe { &node.as_ref().element })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let mut node = self.node_at(index)?;
        // SAFETY: `node` is a node of the sequence, which is borrowed mutably.
        Ok(unsafe { &mut node.as_mut().element })
    }

    /// Replaces the element at `index` and returns the previous one.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        self.get_mut(index).map(|slot| mem::replace(slot, item))
    }

    /// Appends an element.
    #[inline]
    pub fn add(&mut self, item: T) {
        self.push_back(item);
    }

    /// Inserts an element right before the element at `index`. Inserting at
    /// `len` appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::{Error, NodeSequence};
    ///
    /// let mut seq = NodeSequence::from_iter([3]);
    /// seq.insert(1, 4).unwrap();
    /// seq.insert(0, 1).unwrap();
    /// seq.insert(1, 2).unwrap();
    /// assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(seq.insert(10, 5), Err(Error::IndexOutOfBounds { index: 10, len: 4 }));
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        let next = self.node_after(index)?;
        // SAFETY: `next` is the node after position `index`.
        unsafe { self.attach_node(next, Node::new_detached(item)) };
        Ok(())
    }

    /// Appends all `items`, returning `false` if there were none.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) -> bool {
        let mut other: NodeSequence<T> = items.into_iter().collect();
        match other.detach_all_nodes() {
            // SAFETY: `None` is the node after the end position.
            Some(detached) => unsafe {
                self.attach_nodes(None, detached);
                true
            },
            None => false,
        }
    }

    /// Inserts all `items` at `index`, keeping their order, and returns
    /// `false` if there were none.
    ///
    /// The items are linked into a chain of their own first, and the chain is
    /// spliced in with a single walk to `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::NodeSequence;
    ///
    /// let mut seq = NodeSequence::from_iter([1, 2, 3]);
    /// assert_eq!(seq.insert_all(1, [5, 6]), Ok(true));
    /// assert_eq!(seq.to_vec(), vec![1, 5, 6, 2, 3]);
    /// assert_eq!(seq.insert_all(5, []), Ok(false));
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, items: I) -> Result<bool> {
        let next = self.node_after(index)?;
        let mut other: NodeSequence<T> = items.into_iter().collect();
        Ok(match other.detach_all_nodes() {
            // SAFETY: `next` is the node after position `index`, and the
            // sequence was not touched since.
            Some(detached) => unsafe {
                self.attach_nodes(next, detached);
                true
            },
            None => false,
        })
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::{Error, NodeSequence};
    ///
    /// let mut seq = NodeSequence::from_iter([1, 2, 3, 4]);
    /// assert_eq!(seq.remove(1), Ok(2));
    /// assert_eq!(seq.remove(2), Ok(4));
    /// assert_eq!(seq.to_vec(), vec![1, 3]);
    ///
    /// assert_eq!(seq.remove(10), Err(Error::IndexOutOfBounds { index: 10, len: 2 }));
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index)?;
        // SAFETY: `node` is a node of the sequence.
        Ok(unsafe { self.detach_node(node) }.element)
    }

    /// Removes all elements from the `NodeSequence`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Copies the elements into a `Vec`, in order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::NodeSequence;
    ///
    /// let seq = NodeSequence::from_iter([0, 1, 2]);
    /// let mut iter = seq.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.len(), 1);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Provides a cursor before the first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use sequences::NodeSequence;
    ///
    /// let mut seq = NodeSequence::from_iter([1, 2, 3]);
    /// let mut cursor = seq.cursor();
    /// assert_eq!(cursor.step_forward(), Ok(&1));
    /// cursor.insert_here(4);
    /// assert_eq!(cursor.step_forward(), Ok(&2));
    ///
    /// assert_eq!(seq.to_vec(), vec![1, 4, 2, 3]);
    /// ```
    pub fn cursor(&mut self) -> NodeCursor<'_, T> {
        let next = self.head;
        NodeCursor::new(self, next, 0)
    }

    /// Provides a cursor before the element at `index`; `index == len`
    /// places it after the last element.
    pub fn cursor_at(&mut self, index: usize) -> Result<NodeCursor<'_, T>> {
        let next = self.node_after(index)?;
        Ok(NodeCursor::new(self, next, index))
    }
}

impl<T: Debug> Debug for NodeSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for NodeSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }
}

impl<T> Drop for NodeSequence<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for NodeSequence<T> {}

unsafe impl<T: Sync> Sync for NodeSequence<T> {}

// Ensure that `NodeSequence` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: NodeSequence<&'static str>) -> NodeSequence<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}
