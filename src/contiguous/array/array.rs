use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::contiguous::Vector;
use crate::contiguous::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box).
///
/// Unlike a [`Vector`](crate::contiguous::Vector), an Array has no spare capacity: every cell
/// holds an element. `Vector` is built on top of an `Array<MaybeUninit<T>>`, which provides it
/// with the two primitives it needs from its backing buffer: allocation to an exact size
/// ([`Array::new_uninit`] / [`Array::realloc`]) and bulk cell movement ([`Array::copy_cells`] /
/// [`Array::copy_cells_within`]).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
/// | `copy_cells` | `O(n)` |
///
/// \* `realloc` may move the allocation, costing a copy of every element; for zero-sized types
/// or an unchanged size it is `O(1)`.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// let arr: Array<u8> = (1..=3).collect();
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0.
    ///
    /// This method isn't very helpful in most cases because the size remains zero after
    /// initialization. See [`Array::new_uninit`] or [`Array::from_iter`](FromIterator) for
    /// preferred methods of initialization.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the
    /// contained data and a [`usize`] representing the size.
    ///
    /// # Safety
    ///
    /// After calling this function, the caller is responsible for the safety of the allocated
    /// data. The parts can be used to reconstruct an Array with [`Array::from_parts`], allowing
    /// it to be used again and dropped normally.
    ///
    /// # Examples
    /// See [`Array::from_parts`].
    pub fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// # Safety
    ///
    /// This is extremely unsafe, nothing is checked during construction.
    ///
    /// For the produced value to be valid:
    /// - `ptr` needs to be a currently and correctly allocated pointer within the global
    ///   allocator.
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    /// - `size` needs to be less than or equal to [`isize::MAX`] / `size_of::<T>()`.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// let arr: Array<u8> = (1..=3).collect();
    /// let (ptr, size) = arr.into_parts();
    /// assert_eq!(
    ///     unsafe { Array::from_parts(ptr, size) },
    ///     (1..=3).collect()
    /// );
    /// ```
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`. Although it may not seem very useful by
    /// itself, this method acts as a counterpart to [`Array::assume_init`] and allows
    /// [`Array::realloc`] to be called on a previously initialized Array.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<u8> = (1..=3).collect();
    /// let mut new_arr = arr.forget_init();
    ///
    /// new_arr.realloc(4);
    /// new_arr[3] = MaybeUninit::new(4);
    ///
    /// // SAFETY: All values in new_arr are now initialized.
    /// let arr = unsafe { new_arr.assume_init() };
    ///
    /// assert_eq!(&*arr, &[1, 2, 3, 4]);
    /// ```
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, so the buffer is reused as is; its
        // cells are merely no longer assumed to be initialized.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size`
    /// number of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a
    /// dangling pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to
    /// do so is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T and the caller guarantees that every
        // cell holds an initialized value.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations
    /// uninitialized. Several checks are performed first to ensure that an allocation is
    /// actually required.
    ///
    /// When shrinking, the cells beyond `new_size` are discarded without being read; any
    /// initialized values they held are neither dropped nor moved, so the caller must have
    /// dropped or copied them out beforehand.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// arr.realloc(8);
    /// assert_eq!(arr.size(), 8);
    /// arr.realloc(2);
    /// assert_eq!(arr.size(), 2);
    /// ```
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types never allocate, so resizing only needs to update the
                // recorded size. The existing dangling pointer remains correct.
                self.ptr
            },
            (old, new) if old == new => {
                // The sizes are equal, there is no need to reallocate.
                return;
            },
            (0, _) => {
                // Nothing was allocated previously, so a fresh allocation is needed.
                Array::<MaybeUninit<T>>::make_ptr(
                    Array::<MaybeUninit<T>>::make_layout(new_size)
                )
            },
            (_, 0) => {
                let layout = Array::<MaybeUninit<T>>::make_layout(self.size);
                // SAFETY: ptr was allocated in the global allocator with this layout. The
                // layout has non-zero size because old size 0 and zero-sized types are both
                // matched above.
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast(), layout);
                }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Array::<MaybeUninit<T>>::make_layout(self.size);
                let new_layout = Array::<MaybeUninit<T>>::make_layout(new_size);

                // SAFETY: ptr was allocated in the global allocator with old_layout, and
                // new_layout has a non-zero size no greater than isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        old_layout,
                        new_layout.size()
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(new_layout)
                )
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }

    /// Copies `count` cells from `src`, starting at `src_start`, into self starting at
    /// `dst_start`. Cells are copied bitwise, without reading the values they may hold, so
    /// uninitialized cells may be copied freely. Copying an initialized cell makes both the
    /// source and destination cells initialized; at most one of the two copies may later be
    /// treated as owning the value.
    ///
    /// # Panics
    /// Panics if either range extends past the end of its Array.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// let src = (1_u8..=3).collect::<Array<_>>().forget_init();
    /// let mut dst = Array::<u8>::new_uninit(6);
    /// dst.copy_cells(0, &src, 0, 3);
    /// dst.copy_cells(3, &src, 0, 3);
    /// // SAFETY: All six cells have been filled from initialized source cells.
    /// let dst = unsafe { dst.assume_init() };
    /// assert_eq!(&*dst, &[1, 2, 3, 1, 2, 3]);
    /// ```
    pub fn copy_cells(
        &mut self,
        dst_start: usize,
        src: &Array<MaybeUninit<T>>,
        src_start: usize,
        count: usize,
    ) {
        assert!(
            src_start.checked_add(count).is_some_and(|end| end <= src.size)
                && dst_start.checked_add(count).is_some_and(|end| end <= self.size),
            "Cell range out of bounds during copy!"
        );

        // SAFETY: Both ranges have just been checked to be within their allocations, and the
        // borrow checker guarantees that self and src are distinct Arrays, so the ranges can't
        // overlap. MaybeUninit cells are valid for bitwise copies regardless of initialization.
        unsafe {
            ptr::copy_nonoverlapping(
                src.ptr.add(src_start).as_ptr().cast_const(),
                self.ptr.add(dst_start).as_ptr(),
                count
            );
        }
    }

    /// Copies `count` cells starting at `src_start` to the positions starting at `dst_start`,
    /// within self. The two ranges may overlap; cells are moved as if through an intermediate
    /// buffer.
    ///
    /// # Panics
    /// Panics if either range extends past the end of the Array.
    pub fn copy_cells_within(&mut self, src_start: usize, dst_start: usize, count: usize) {
        assert!(
            src_start.checked_add(count).is_some_and(|end| end <= self.size)
                && dst_start.checked_add(count).is_some_and(|end| end <= self.size),
            "Cell range out of bounds during copy!"
        );

        // SAFETY: Both ranges have just been checked to be within the allocation, and
        // ptr::copy supports overlapping ranges. MaybeUninit cells are valid for bitwise
        // copies regardless of initialization.
        unsafe {
            ptr::copy(
                self.ptr.add(src_start).as_ptr().cast_const(),
                self.ptr.add(dst_start).as_ptr(),
                count
            );
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    /// Creates an Array sized exactly to the iterator's contents, by first collecting into a
    /// [`Vector`] and then trimming the spare capacity.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Array;
    /// let arr: Array<u8> = (1..=3).collect();
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_iter(iter).into()
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        let layout = Array::<T>::make_layout(self.size);

        for i in 0..self.size {
            // SAFETY: The pointer is nonnull, as well as properly aligned, initialized and
            // ready to drop. All offsets below size are within the allocated range of the
            // Array.
            unsafe {
                ptr::drop_in_place(self.ptr.add(i).as_ptr());
            }
        }

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same
            // as when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has
        // a length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has
        // a length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents access throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send
// when T: Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
