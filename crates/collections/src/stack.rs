use crate::{
    container::{Container, Position},
    error::{Error, Result},
};

/// An unbounded last-in-first-out stack.
///
/// Items are stored bottom to top: index 0 is the first item pushed, and the top of the stack is
/// at `count() - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    inner: Vec<T>,
}

/// Construction options for a [Stack].
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Number of items to reserve space for up front. This is only a hint, the stack grows past
    /// it as needed.
    pub capacity: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(Options { capacity })
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            inner: Vec::with_capacity(options.capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.inner.push(item);
        log::trace!("push (count {})", self.inner.len());
    }

    /// Remove and return the top of the stack.
    pub fn pop(&mut self) -> Result<T> {
        let Some(item) = self.inner.pop() else {
            log::debug!("pop on an empty stack");
            return Err(Error::EmptyContainer);
        };
        log::trace!("pop (count {})", self.inner.len());
        Ok(item)
    }

    /// The top of the stack, if any, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.inner.last()
    }

    pub fn count(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Read the item at `index` without removing it. Index 0 is the bottom of the stack.
    pub fn at<I: Position>(&self, index: I) -> Result<&T> {
        Container::at(self, index)
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Iterate from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner
    }
}

impl<T> Container for Stack<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.inner.as_slice().get(index)
    }

    fn append(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The last element of the vector becomes the top of the stack.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(inner: Vec<T>) -> Self {
        Self { inner }
    }
}

impl<T> From<Stack<T>> for Vec<T> {
    fn from(stack: Stack<T>) -> Self {
        stack.inner
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Options, Stack};
    use crate::{Container, Error};

    #[test]
    fn lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
    }

    #[test]
    fn empty_pop() {
        let mut stack = Stack::<String>::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(Error::EmptyContainer));
        assert_eq!(stack.count(), 0);
    }

    #[test]
    fn count() {
        let mut stack = Stack::with_capacity(2);
        for k in 0..5 {
            stack.push(k);
        }
        stack.pop().unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.count(), 3);
        assert_eq!(stack.peek(), Some(&2));
    }

    #[test]
    fn at() {
        let stack = Stack::from(vec!["uno", "dos", "tres"]);
        assert_eq!(stack.at(0), Ok(&"uno"));
        assert_eq!(stack.at(2), Ok(&"tres"));
        assert_eq!(
            stack.at(3),
            Err(Error::IndexOutOfRange { index: 3, count: 3 })
        );
        assert_eq!(
            stack.at(-1),
            Err(Error::IndexOutOfRange {
                index: -1,
                count: 3
            })
        );
    }

    #[test]
    fn append_is_push() {
        let mut stack = Stack::with_options(Options { capacity: 8 });
        stack.push('a');
        stack.append('b');
        assert_eq!(Container::count(&stack), 2);
        assert_eq!(stack.at(1), Ok(&'b'));
        assert_eq!(stack.pop(), Ok('b'));
    }

    #[test]
    fn collect_and_extend() {
        let mut stack: Stack<u32> = (1..=3).collect();
        stack.extend([4, 5]);
        assert_eq!(stack.peek(), Some(&5));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn conversions() {
        let stack = Stack::from(vec![1, 2, 3]);
        let mut seen = Vec::new();
        for item in &stack {
            seen.push(*item);
        }
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(stack.clone().into_vec(), vec![1, 2, 3]);

        let mut stack = stack;
        stack.push(4);
        let items: Vec<i32> = stack.into();
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn no_bounds_on_items() {
        struct Opaque(#[allow(dead_code)] u8);
        let mut stack = Stack::new();
        stack.push(Opaque(1));
        stack.push(Opaque(2));
        assert!(matches!(stack.pop(), Ok(Opaque(2))));
        assert_eq!(stack.count(), 1);
    }
}
