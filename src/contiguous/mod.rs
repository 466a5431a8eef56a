//! Contiguous collection types. Namely [`Array`] for fixed size buffers and [`Vector`] for
//! contiguous collections that vary in size at runtime, growing and shrinking per a
//! [`ResizePolicy`].
//!
//! Fallible operations report the typed errors in [`error`]; the index and length guards they
//! share live in [`bounds`].
#![warn(missing_docs)]

pub mod array;
pub mod bounds;
pub mod error;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::{ResizePolicy, Vector};
