use std::fmt::{self, Debug, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::contiguous::error::{CapacityOverflow, IndexOutOfBounds, LengthOutOfBounds};
use crate::contiguous::{Array, bounds};
use crate::util::result::ResultExtension;

use super::ResizePolicy;

/// A variable size contiguous collection, based on [`Array<T>`], which keeps spare cells past
/// its length so that appending is cheap.
///
/// The buffer only reallocates when completely full, and the replacement capacity is chosen
/// by the Vector's [`ResizePolicy`]. Removals normally leave the buffer alone;
/// [`shrink`](Vector::shrink) and [`remove_and_shrink`](Vector::remove_and_shrink) consult
/// the same policy to release spare memory once utilization drops far enough. Each policy's
/// shrink threshold sits below its growth boundary, so a workload mixing insertions and
/// removals doesn't reallocate on every step.
///
/// `len <= cap` holds at all times, and all cells below `len` are initialized. Equality
/// compares elements only, ignoring capacity and policy.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `swap_remove` | `O(1)` |
/// | `remove_and_shrink` | `O(n)` |
/// | `shrink` | `O(n)` |
/// | `reserve` | `O(n)`**, `O(1)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
/// Under [`ResizePolicy::Trimmed`] that is the case for every push.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) policy: ResizePolicy
}

impl<T> Vector<T> {
    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let vec: Vector<u8> = (1..=3).collect();
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed
    /// to be exactly the value produced by the resize policy or provided to any of the
    /// capacity manipulation functions.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the Vector's resize policy.
    pub const fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Creates a new Vector with length and capacity 0, using the default
    /// ([`Balanced`](ResizePolicy::Balanced)) policy. Memory will be allocated when the
    /// capacity changes.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new_uninit(0),
            len: 0,
            policy: ResizePolicy::default()
        }
    }

    /// Creates a new Vector with length and capacity 0, using the provided resize policy.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::{ResizePolicy, Vector};
    /// let mut vec = Vector::with_policy(ResizePolicy::Trimmed);
    /// vec.push('a');
    /// vec.push('b');
    /// assert_eq!(vec.cap(), 2);
    /// ```
    pub fn with_policy(policy: ResizePolicy) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(0),
            len: 0,
            policy
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values
    /// to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
            policy: ResizePolicy::default()
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, using the
    /// provided resize policy.
    pub fn with_cap_and_policy(cap: usize, policy: ResizePolicy) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
            policy
        }
    }

    /// Creates a Vector holding the first `len` elements of the provided Array, reusing its
    /// buffer. The remaining elements are dropped and their cells become spare capacity.
    ///
    /// Returns [`LengthOutOfBounds`] if `len` exceeds the Array's size, in which case the
    /// Array is dropped in full.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::error::LengthOutOfBounds;
    /// # use policy_vec::contiguous::{Array, Vector};
    /// let arr: Array<u8> = (1..=6).collect();
    /// let vec = Vector::try_from_prefix(arr, 4).unwrap();
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// assert_eq!(vec.cap(), 6);
    ///
    /// let arr: Array<u8> = (1..=2).collect();
    /// assert_eq!(
    ///     Vector::try_from_prefix(arr, 3),
    ///     Err(LengthOutOfBounds { len: 3, cap: 2 })
    /// );
    /// ```
    pub fn try_from_prefix(arr: Array<T>, len: usize) -> Result<Vector<T>, LengthOutOfBounds> {
        bounds::check_len(len, arr.size())?;

        let mut arr = arr.forget_init();
        for i in len..arr.size() {
            // SAFETY: Every cell of the original Array was initialized. Cells past len are
            // dropped exactly once here and not tracked by the new Vector.
            unsafe { arr[i].assume_init_drop(); }
        }

        Ok(Vector {
            arr,
            len,
            policy: ResizePolicy::default()
        })
    }

    /// Changes the Vector's resize policy. The buffer is left untouched; the new policy
    /// applies from the next grow or shrink decision.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::{ResizePolicy, Vector};
    /// let mut vec: Vector<u8> = (0..8).collect();
    /// vec.set_policy(ResizePolicy::Spacious);
    /// vec.push(8);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    pub fn set_policy(&mut self, policy: ResizePolicy) {
        self.policy = policy;
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity per the
    /// resize policy if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the grown buffer would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the
    /// provided value, using methods like [`reserve`](Vector::reserve) or
    /// [`with_cap`](Vector::with_cap) to do so. Using this method on a full Vector is
    /// undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::{Array, Vector};
    /// let arr: Array<u8> = (1..=3).collect();
    /// let mut vec = Vector::with_cap(arr.size());
    /// for value in arr {
    ///     // SAFETY: We know that vec has enough capacity to store all elements in arr.
    ///     unsafe { vec.push_unchecked(value); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for
        // this push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector
    /// has length greater than 0. The buffer is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<usize> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented, so the cell holds the Vector's last
            // element. The bitwise copy becomes the only tracked version of the value.
            let value = unsafe {
                self.arr.ptr.add(self.len).read().assume_init()
            };
            Some(value)
        }
    }

    /// Inserts the provided value at the given index, moving all following values back by one.
    /// Inserting at `len` itself appends. Grows per the resize policy if the buffer is full.
    ///
    /// Returns [`IndexOutOfBounds`] if `index > len`, leaving the Vector untouched.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::error::IndexOutOfBounds;
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = (0..3).collect();
    /// assert_eq!(vec.try_insert(5, 10), Err(IndexOutOfBounds { index: 5, len: 3 }));
    /// assert_eq!(vec.try_insert(3, 10), Ok(()));
    /// assert_eq!(&*vec, &[0, 1, 2, 10]);
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        bounds::check_insert_index(index, self.len)?;

        if self.len == self.cap() {
            self.grow_insert(index, value);
        } else {
            self.arr.copy_cells_within(index, index + 1, self.len - index);
            self.arr[index] = MaybeUninit::new(value);
            self.len += 1;
        }

        Ok(())
    }

    /// Inserts the provided value at the given index, moving all following values back by one.
    /// Inserting at `len` itself appends. Grows per the resize policy if the buffer is full.
    ///
    /// # Panics
    /// Panics if `index > len`. [`try_insert`](Vector::try_insert) is the fallible version.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<i32> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Removes the element at the provided index, moving all following values to fill in the
    /// gap. The buffer is left untouched; see
    /// [`try_remove_and_shrink`](Vector::try_remove_and_shrink) to release spare memory.
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the Vector untouched.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::error::IndexOutOfBounds;
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = (0..3).collect();
    /// assert_eq!(vec.try_remove(1), Ok(1));
    /// assert_eq!(vec.try_remove(2), Err(IndexOutOfBounds { index: 2, len: 2 }));
    /// assert_eq!(&*vec, &[0, 2]);
    /// ```
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        bounds::check_index(index, self.len)?;

        // SAFETY: index has been checked to be less than len, so the cell holds an
        // initialized value. The shift below overwrites the moved-out cell.
        let value = unsafe { self.arr.ptr.add(index).read().assume_init() };
        self.arr.copy_cells_within(index + 1, index, self.len - index - 1);
        self.len -= 1;

        Ok(value)
    }

    /// Removes the element at the provided index, moving all following values to fill in the
    /// gap. The buffer is left untouched.
    ///
    /// # Panics
    /// Panics if `index >= len`. [`try_remove`](Vector::try_remove) is the fallible version.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, moving the last element into the gap
    /// instead of shifting. Doesn't preserve element order, but runs in `O(1)`.
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the Vector untouched.
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        bounds::check_index(index, self.len)?;

        // SAFETY: index has been checked to be less than len, so the cell holds an
        // initialized value. The copy below overwrites the moved-out cell with the last
        // element.
        let value = unsafe { self.arr.ptr.add(index).read().assume_init() };
        self.arr.copy_cells_within(self.len - 1, index, 1);
        self.len -= 1;

        Ok(value)
    }

    /// Removes the element at the provided index, moving the last element into the gap
    /// instead of shifting. Doesn't preserve element order, but runs in `O(1)`.
    ///
    /// # Panics
    /// Panics if `index >= len`. [`try_swap_remove`](Vector::try_swap_remove) is the fallible
    /// version.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = [10, 20, 30, 40].into_iter().collect();
    /// assert_eq!(vec.swap_remove(1), 20);
    /// assert_eq!(&*vec, &[10, 40, 30]);
    /// ```
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.try_swap_remove(index).throw()
    }

    /// Removes the element at the provided index, moving all following values to fill in the
    /// gap and shrinking the buffer if the resize policy calls for it at the reduced length.
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= len`, leaving the Vector untouched.
    pub fn try_remove_and_shrink(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        bounds::check_index(index, self.len)?;

        match self.policy.shrink_cap(self.len - 1, self.cap()) {
            Some(new_cap) => {
                // SAFETY: index has been checked to be less than len, so the cell holds an
                // initialized value. The copies below skip it, so only value owns it.
                let value = unsafe { self.arr.ptr.add(index).read().assume_init() };

                let mut new_arr = Array::new_uninit(new_cap);
                new_arr.copy_cells(0, &self.arr, 0, index);
                new_arr.copy_cells(index, &self.arr, index + 1, self.len - index - 1);

                self.arr = new_arr;
                self.len -= 1;
                Ok(value)
            },
            None => self.try_remove(index)
        }
    }

    /// Removes the element at the provided index, moving all following values to fill in the
    /// gap and shrinking the buffer if the resize policy calls for it at the reduced length.
    ///
    /// # Panics
    /// Panics if `index >= len`. [`try_remove_and_shrink`](Vector::try_remove_and_shrink) is
    /// the fallible version.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(16);
    /// vec.extend(0..5);
    ///
    /// assert_eq!(vec.remove_and_shrink(0), 0);
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// assert_eq!(vec.cap(), 12);
    /// ```
    pub fn remove_and_shrink(&mut self, index: usize) -> T {
        self.try_remove_and_shrink(index).throw()
    }

    /// Shrinks the buffer to the capacity the resize policy picks for the current length, if
    /// any. An empty Vector releases its buffer entirely.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(16);
    /// vec.extend(0..5);
    ///
    /// vec.shrink();
    /// assert_eq!(vec.cap(), 12);
    ///
    /// // 12 cells is below the policy's cut-in capacity, so the buffer is kept.
    /// vec.shrink();
    /// assert_eq!(vec.cap(), 12);
    /// ```
    pub fn shrink(&mut self) {
        if let Some(new_cap) = self.policy.shrink_cap(self.len, self.cap()) {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Shrinks the buffer to exactly the Vector's length, bypassing the resize policy.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(16);
    /// vec.extend(0..5);
    /// vec.shrink_to_fit();
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Grows the buffer so that at least `extra` more elements can be added without
    /// reallocation. Does nothing when enough spare cells already exist.
    ///
    /// # Panics
    /// Panics if the required capacity overflows [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    ///
    /// vec.push(1);
    /// vec.reserve(5);
    /// assert_eq!(vec.cap(), 10);
    /// ```
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Decomposes the Vector into its raw parts: the buffer, the number of initialized cells
    /// and the resize policy. [`from_parts`](Vector::from_parts) is the inverse.
    pub fn into_parts(self) -> (Array<MaybeUninit<T>>, usize, ResizePolicy) {
        // SAFETY: self is forgotten without running its destructor, so the buffer handle read
        // out of it is the allocation's sole owner.
        let arr = unsafe { ptr::read(&self.arr) };
        let parts = (arr, self.len, self.policy);
        mem::forget(self);
        parts
    }

    /// Recomposes a Vector from the parts returned by [`into_parts`](Vector::into_parts).
    /// Nothing is checked or dropped.
    ///
    /// # Safety
    /// `len` must not exceed the Array's size, and all cells of the Array below `len` must be
    /// initialized.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let vec: Vector<u8> = (1..=4).collect();
    /// let (arr, len, policy) = vec.into_parts();
    ///
    /// // SAFETY: The parts come from a valid Vector and are unchanged.
    /// let vec = unsafe { Vector::from_parts(arr, len, policy) };
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub const unsafe fn from_parts(
        arr: Array<MaybeUninit<T>>,
        len: usize,
        policy: ResizePolicy
    ) -> Vector<T> {
        Vector { arr, len, policy }
    }
}

impl<T> Vector<T> {
    /// Reallocates the buffer to hold exactly `new_cap` cells. `new_cap` must be at least
    /// `len` to keep every element.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.arr.realloc(new_cap);
    }

    /// Replaces the full buffer with one grown per the resize policy.
    pub(crate) fn grow(&mut self) {
        self.realloc_with_cap(self.policy.grow_cap(self.len));
    }

    /// Replaces the full buffer with one grown per the resize policy, inserting the provided
    /// value at `index` during the move so that elements are only copied once.
    fn grow_insert(&mut self, index: usize, value: T) {
        let mut new_arr = Array::new_uninit(self.policy.grow_cap(self.len));
        new_arr.copy_cells(0, &self.arr, 0, index);
        new_arr.copy_cells(index + 1, &self.arr, index, self.len - index);
        new_arr[index] = MaybeUninit::new(value);

        self.arr = new_arr;
        self.len += 1;
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All cells below len are initialized and dropped exactly once here.
            unsafe { self.arr.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // We don't need to handle the buffer, because it contains only MaybeUninit values,
        // which do nothing when dropped. The contained Array deallocates it.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: All cells below len are initialized, and MaybeUninit<T> has the same layout
        // as T.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: All cells below len are initialized, and MaybeUninit<T> has the same layout
        // as T.
        unsafe {
            slice::from_raw_parts_mut(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

// SAFETY: Vectors, when used safely, rely on unique pointers and are therefore safe for Send
// when T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap_and_policy(self.cap(), self.policy);

        for value in self.iter() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        // Dealloc all uninit values > len.
        value.shrink_to_fit();

        // SAFETY: A Vector contains len initialized values with the same layout and alignment
        // as an Array. value is forgotten, so the copied handle is the allocation's sole
        // owner.
        let arr = unsafe { mem::transmute_copy(&value.arr) };
        mem::forget(value);
        arr
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
            policy: ResizePolicy::default()
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("policy", &self.policy)
            .finish()
    }
}
