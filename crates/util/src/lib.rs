//! Small pieces shared by the strata crates that are not collections themselves.
pub mod macros;
pub mod sync;

pub use sync::Exclusive;
