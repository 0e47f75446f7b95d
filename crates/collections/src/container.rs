use std::collections::VecDeque;

use crate::error::{Error, Result};

/// Anything that can be used to index a container: every primitive integer type. Values that do
/// not fit in a `usize` (negative ones, mostly) are reported as out of range instead of wrapping.
///
/// The reported index is the requested value as an `i128`. The one value range that has no such
/// representation, a `u128` above `i128::MAX`, is reported as `i128::MAX`.
pub trait Position: TryInto<usize> + TryInto<i128> + Copy {}

impl<T> Position for T where T: TryInto<usize> + TryInto<i128> + Copy {}

/// An ordered collection that exposes its length, indexed reads and an append operation.
///
/// Implementations must keep `get` consistent with `count`: `get(i)` is `Some` exactly when
/// `i < count()`. After `append`, `count` has grown by one and the new item is at `count() - 1`.
pub trait Container {
    type Item;

    /// The number of items currently stored.
    fn count(&self) -> usize;

    /// Bounds-checked read; `None` when `index >= count()`.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn append(&mut self, item: Self::Item);

    /// Read the item at `index`, counted from the front (the first item appended).
    fn at<I: Position>(&self, index: I) -> Result<&Self::Item> {
        let count = self.count();
        let index = match util::try_index!(index) {
            Ok(index) => index,
            Err(index) => {
                log::debug!("rejected index {index} (count {count})");
                return Err(Error::IndexOutOfRange { index, count });
            }
        };
        self.get(index).ok_or_else(|| {
            log::debug!("index {index} out of range (count {count})");
            Error::IndexOutOfRange {
                index: index as i128,
                count,
            }
        })
    }

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T> Container for Vec<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn append(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Container for VecDeque<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn append(&mut self, item: T) {
        self.push_back(item);
    }
}
