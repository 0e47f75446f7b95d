pub mod exclusive;
pub use exclusive::Exclusive;
