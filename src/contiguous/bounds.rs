//! Pure bounds guards shared by the contiguous collections.
//!
//! Every fallible operation validates its arguments through one of these functions before
//! touching any element, so a rejected call leaves the collection exactly as it was. Each
//! guard returns the error that the corresponding panicking method throws, allowing `try_`
//! variants to surface it as a value instead.

use super::error::{IndexOutOfBounds, LengthOutOfBounds};

/// Checks that `index` refers to an existing element, i.e. `index < len`.
///
/// `len` itself is never validated here; it is trusted to be the collection's own length.
///
/// # Examples
/// ```
/// # use policy_vec::contiguous::bounds;
/// assert!(bounds::check_index(2, 5).is_ok());
/// assert!(bounds::check_index(5, 5).is_err());
/// ```
pub const fn check_index(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index < len {
        Ok(())
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}

/// Checks that `index` is a valid insertion position, i.e. `index <= len`. Inserting at `len`
/// itself appends to the collection.
///
/// # Examples
/// ```
/// # use policy_vec::contiguous::bounds;
/// assert!(bounds::check_insert_index(5, 5).is_ok());
/// assert!(bounds::check_insert_index(6, 5).is_err());
/// ```
pub const fn check_insert_index(index: usize, len: usize) -> Result<(), IndexOutOfBounds> {
    if index <= len {
        Ok(())
    } else {
        Err(IndexOutOfBounds { index, len })
    }
}

/// Checks that a logical length of `len` elements fits within a buffer of capacity `cap`.
///
/// # Examples
/// ```
/// # use policy_vec::contiguous::bounds;
/// assert!(bounds::check_len(5, 5).is_ok());
/// assert!(bounds::check_len(6, 5).is_err());
/// ```
pub const fn check_len(len: usize, cap: usize) -> Result<(), LengthOutOfBounds> {
    if len <= cap {
        Ok(())
    } else {
        Err(LengthOutOfBounds { len, cap })
    }
}
