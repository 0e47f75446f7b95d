use crate::container::Container;

/// Returns true if both containers hold equal items in the same order.
///
/// Containers of different lengths never match, and no item is read in that case. Otherwise items
/// are compared front to back and the comparison stops at the first mismatch.
pub fn containers_match<A, B>(a: &A, b: &B) -> bool
where
    A: Container,
    B: Container<Item = A::Item>,
    A::Item: PartialEq,
{
    let count = a.count();
    if count != b.count() {
        log::debug!("count mismatch: {count} != {}", b.count());
        return false;
    }
    for index in 0..count {
        match (a.at(index), b.at(index)) {
            (Ok(lhs), Ok(rhs)) if lhs == rhs => continue,
            _ => {
                log::debug!("item mismatch at index {index}");
                return false;
            }
        }
    }
    true
}

/// The index of the first item equal to `value`, if there is one.
pub fn find_index<C>(container: &C, value: &C::Item) -> Option<usize>
where
    C: Container,
    C::Item: PartialEq,
{
    (0..container.count()).find(|&index| container.get(index) == Some(value))
}

/// Exchange two values of the same type.
pub fn swap_values<T>(a: &mut T, b: &mut T) {
    std::mem::swap(a, b);
}
