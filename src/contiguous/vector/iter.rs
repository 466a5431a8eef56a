use crate::contiguous::Array;

use super::Vector;

#[doc(inline)]
pub use crate::contiguous::array::IntoIter;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Converts the Vector into an iterator over its elements by value. Spare capacity is
    /// released up front, so the iterator's buffer holds exactly the iterated elements.
    ///
    /// # Examples
    /// ```
    /// # use policy_vec::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::from_iter(1..=3);
    /// let mut iter = vec.into_iter();
    ///
    /// assert_eq!(iter.next(), Some(1));
    /// assert_eq!(iter.next_back(), Some(3));
    /// assert_eq!(iter.next(), Some(2));
    /// assert_eq!(iter.next(), None);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        Array::from(self).into_iter()
    }
}
