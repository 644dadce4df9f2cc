use thiserror::Error;

/// Errors reported by sequence and cursor operations.
///
/// Every operation validates its arguments before touching the sequence, so
/// a returned error means the sequence is unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The index is outside the range accepted by the operation:
    /// `0..len` for reads, writes and removals, `0..=len` for insertions
    /// and cursor creation.
    #[error("index: {index}, size: {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A cursor was stepped past either end of the sequence.
    #[error("no such element")]
    NoSuchElement,
    /// A cursor mutation was attempted without a preceding step, or right
    /// after another mutation.
    #[error("cursor has not stepped onto an element since its last mutation")]
    IllegalState,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks `index` against `0..len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}

/// Checks `index` against `0..=len`.
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { index, len })
    }
}
