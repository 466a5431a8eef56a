use std::cell::Cell;
use std::rc::Rc;

/// A unit type for exercising collections of zero sized values.
#[allow(unused)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

/// Counts how many of its clones have been dropped, for checking that collections drop
/// exactly the elements they own.
///
/// Clones share one counter. Keep the original handle alive to read the count after the
/// clones are gone; the handle's own drop is counted too.
#[allow(unused)]
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

#[allow(unused)]
impl CountedDrop {
    /// Creates a fresh handle with a drop count of 0.
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops observed so far.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Default for CountedDrop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
