//! Contiguous storage with policy-driven resizing.
//!
//! This crate provides two collection types built directly on the global allocator,
//! without using [`Vec`] anywhere:
//!
//! - [`Array<T>`](contiguous::Array): a contiguous block of storage whose size is fixed at
//!   runtime, similar to a [`Box<[T]>`](Box).
//! - [`Vector<T>`](contiguous::Vector): a growable collection layered over an `Array`, which
//!   decides *when* and *by how much* to reallocate through a
//!   [`ResizePolicy`](contiguous::ResizePolicy).
//!
//! # Resize Policies
//! Unlike [`Vec`], whose growth strategy is an implementation detail, a `Vector` carries an
//! explicit policy chosen at construction:
//!
//! | Policy | First allocation | Growth | Shrink |
//! |-|-|-|-|
//! | `Balanced` | 8 | ~1.5x | to 3/4 of capacity, floor 8 |
//! | `Spacious` | 32 | 2x | to 1/2 of capacity, floor 32 |
//! | `Trimmed` | 1 | +1 | always to exact length |
//!
//! Shrink thresholds sit well below the growth boundaries, so sequences that insert and
//! remove around a single boundary never reallocate back and forth. See
//! [`ResizePolicy`](contiguous::ResizePolicy) for the exact capacity functions.
//!
//! # Error Handling
//! Out-of-bounds arguments are programming errors, so the primary methods panic, matching
//! the expectations set by [`std`]'s collections. Every fallible operation also has a `try_`
//! form returning a strongly typed error from [`contiguous::error`], and the panicking forms
//! are thin wrappers over those. Validation is eager: an operation either fails before
//! mutating anything or completes in full.
//!
//! # Concurrency
//! None. Every mutating operation takes `&mut self`, so exclusive access is enforced by the
//! borrow checker rather than documented as a caller obligation. Both types are [`Send`] and
//! [`Sync`] whenever `T` is; wrap a `Vector` in a lock to share it.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod contiguous;

pub(crate) mod util;
