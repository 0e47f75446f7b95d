/// Convert an index expression to a usize using TryInto. Evaluates to `Err(requested)` when the
/// value does not fit, where `requested` is the value widened to an i128 (saturating).
#[macro_export]
macro_rules! try_index {
    ($e:expr) => {{
        let index = $e;
        match <_ as TryInto<usize>>::try_into(index) {
            Ok(u) => Ok(u),
            Err(_) => Err(<_ as TryInto<i128>>::try_into(index).unwrap_or(i128::MAX)),
        }
    }};
}
pub use try_index;
