//! Error types for the contiguous collections.
//!
//! Fallible operations are strongly typed: each `try_` method returns the narrowest error it
//! can produce, and [`VectorError`] unions them for callers that funnel several fallible calls
//! through one [`Result`].

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The error produced when an index argument refers to a position outside the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The number of elements in the collection at the time of the request.
    pub len: usize
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The error produced when a logical length exceeds the capacity of the buffer meant to hold
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthOutOfBounds {
    /// The requested logical length.
    pub len: usize,
    /// The capacity of the backing buffer.
    pub cap: usize
}

impl Display for LengthOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Length {} out of bounds for buffer with capacity {}!", self.len, self.cap)
    }
}

impl Error for LengthOutOfBounds {}

/// The error produced when parsing a [`ResizePolicy`](super::ResizePolicy) from a name outside
/// the supported set.
///
/// The policy set is closed: an unknown name is rejected here rather than silently falling
/// back to the default policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedPolicy {
    /// The unrecognized policy name.
    pub name: String
}

impl Display for UnsupportedPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unsupported resize policy \"{}\"!", self.name)
    }
}

impl Error for UnsupportedPolicy {}

/// The error produced when a requested capacity would need a memory layout larger than
/// [`isize::MAX`] bytes. Surfaced by panicking, because no reasonable caller can recover from
/// it mid-operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// A union of the errors produced by fallible [`Vector`](super::Vector) operations, for
/// callers propagating more than one kind through a single [`Result`].
///
/// # Examples
/// ```
/// # use policy_vec::contiguous::Vector;
/// # use policy_vec::contiguous::error::VectorError;
/// fn rotate_front(vec: &mut Vector<u8>) -> Result<(), VectorError> {
///     let first = vec.try_remove(0)?;
///     vec.try_insert(vec.len(), first)?;
///     Ok(())
/// }
///
/// let mut vec: Vector<u8> = (1..=3).collect();
/// assert!(rotate_front(&mut vec).is_ok());
/// assert_eq!(&*vec, &[2, 3, 1]);
///
/// let mut empty: Vector<u8> = Vector::new();
/// assert!(rotate_front(&mut empty).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum VectorError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`LengthOutOfBounds`].
    LengthOutOfBounds(LengthOutOfBounds),
    /// See [`UnsupportedPolicy`].
    UnsupportedPolicy(UnsupportedPolicy)
}
