//! A contiguous growable collection ([`Vector`]) and the resize policies
//! ([`ResizePolicy`]) that drive its capacity management.

mod iter;
mod policy;
mod vector;

pub use iter::*;
pub use policy::*;
pub use vector::*;
