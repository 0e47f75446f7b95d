use thiserror::Error;

/// Failures reported by container operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pop was requested while the container held no elements.
    #[error("cannot pop from an empty container")]
    EmptyContainer,

    /// An indexed read fell outside `[0, count)`. Negative requests are kept as given.
    #[error("index {index} is out of range for a container of {count} elements")]
    IndexOutOfRange { index: i128, count: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
