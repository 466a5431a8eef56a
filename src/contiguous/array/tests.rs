#![cfg(test)]

use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let arr: Array<ZeroSizedType> = iter::repeat(ZeroSizedType).take(5).collect();
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        arr.iter().as_slice().len(),
        5,
        "Should iterate over the right number of ZST instances."
    );

    let mut arr = arr.forget_init();
    let old_ptr = arr.ptr;

    arr.realloc(30);
    assert_eq!(
        arr.ptr, old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
    assert_eq!(arr.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr = Array::<usize>::new_uninit(5);
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(0);
    assert_ne!(
        arr.ptr, old_ptr,
        "Pointer should be replaced with a dangling one for 0 size."
    );

    let old_ptr = arr.ptr;
    arr.realloc(10);
    assert_ne!(
        arr.ptr, old_ptr,
        "Pointer should be replaced with an allocated one."
    );

    for i in 0..10 {
        arr[i] = MaybeUninit::new(i);
    }

    arr.realloc(15);
    for i in 0..10 {
        assert_eq!(
            // SAFETY: Cells below 10 were initialized before the reallocation.
            unsafe { arr[i].assume_init_read() },
            i,
            "When growing, all elements should remain in the Array."
        );
    }

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(5);
        arr.realloc(isize::MAX as usize + 1)
    });
}

#[test]
fn test_copy_cells() {
    let src = (0..6).collect::<Array<usize>>().forget_init();
    let mut dst = Array::<usize>::new_uninit(8);

    dst.copy_cells(0, &src, 0, 3);
    dst.copy_cells(3, &src, 3, 3);
    for i in 0..6 {
        assert_eq!(
            // SAFETY: Cells below 6 have been filled from initialized source cells.
            unsafe { dst[i].assume_init_read() },
            i,
            "Cells should be copied in order."
        );
    }

    dst.copy_cells_within(0, 6, 2);
    // SAFETY: Cells 6 and 7 have just been filled from initialized cells 0 and 1.
    assert_eq!(unsafe { dst[6].assume_init_read() }, 0);
    // SAFETY: As above.
    assert_eq!(unsafe { dst[7].assume_init_read() }, 1);

    // Overlapping ranges should shift correctly in both directions.
    dst.copy_cells_within(0, 1, 5);
    // SAFETY: Every cell of dst holds an initialized value at this point.
    assert_eq!(unsafe { dst[5].assume_init_read() }, 4, "Shifting up should preserve values.");
    dst.copy_cells_within(1, 0, 5);
    // SAFETY: As above.
    assert_eq!(unsafe { dst[0].assume_init_read() }, 0, "Shifting down should preserve values.");
    // SAFETY: As above.
    assert_eq!(unsafe { dst[4].assume_init_read() }, 4);

    assert_panics!({
        let src = Array::<usize>::new_uninit(3);
        let mut dst = Array::<usize>::new_uninit(3);
        dst.copy_cells(2, &src, 0, 2)
    });
    assert_panics!({
        let mut arr = Array::<usize>::new_uninit(4);
        arr.copy_cells_within(2, 0, 3)
    });

    // Ranges whose end position would overflow usize must be rejected, not wrapped.
    assert_panics!({
        let mut arr = Array::<usize>::new_uninit(4);
        arr.copy_cells_within(usize::MAX - 1, 0, 2)
    });
    assert_panics!({
        let src = Array::<usize>::new_uninit(4);
        let mut dst = Array::<usize>::new_uninit(4);
        dst.copy_cells(usize::MAX - 1, &src, 0, 2)
    });
    assert_panics!({
        let src = Array::<usize>::new_uninit(4);
        let mut dst = Array::<usize>::new_uninit(4);
        dst.copy_cells(0, &src, 2, usize::MAX)
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let arr: Array<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(arr);

    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_parts_round_trip() {
    let arr: Array<usize> = (0..5).collect();
    let (ptr, size) = arr.into_parts();
    assert_eq!(size, 5);

    // SAFETY: The parts come from into_parts unchanged, so they describe a valid allocation
    // of 5 initialized values.
    let arr = unsafe { Array::from_parts(ptr, size) };
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Reconstruction should restore the Array.");
}

#[test]
fn test_equality() {
    let arr: Array<usize> = (0..5).collect();

    assert_eq!(
        arr,
        [0, 1, 2, 3, 4].into_iter().collect(),
        "Different construction methods should produce equal results."
    );
    assert_ne!(arr, (0..4).collect());
    assert_ne!(arr, [0, 1, 2, 5, 4].into_iter().collect());

    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");
    assert_eq!(arr.as_ref(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_iterators() {
    let mut arr: Array<usize> = (0..5).collect();
    let collected: Array<usize> = arr.iter().cloned().collect();
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );

    assert_eq!(arr, arr.clone(), "Cloned array should be equal.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let arr: Array<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(arr.into_iter());
    assert_eq!(
        counter.count(),
        10,
        "Dropping an owned iterator should drop all elements."
    );

    let counter = CountedDrop::new();
    let arr: Array<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    let mut iter = arr.into_iter();
    assert!(iter.next().is_some());
    assert!(iter.next_back().is_some());
    drop(iter);
    assert_eq!(
        counter.count(),
        10,
        "Dropping a partially consumed iterator should drop the remaining elements."
    );
}
