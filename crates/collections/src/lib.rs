//! Generic containers behind a common [Container] capability.
//!
//! ## Usage
//!
//! ```rust
//! use strata_collections::{containers_match, Container, Error, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push("Albert");
//! stack.push("Andrew");
//! stack.push("Betty");
//!
//! assert_eq!(stack.pop(), Ok("Betty"));
//! assert_eq!(stack.count(), 2);
//! assert_eq!(stack.at(5), Err(Error::IndexOutOfRange { index: 5, count: 2 }));
//!
//! // Any two containers with the same item type can be compared.
//! assert!(containers_match(&stack, &vec!["Albert", "Andrew"]));
//! ```
//!
//! None of the containers synchronize internally. To share one between threads, wrap it in
//! [util::Exclusive] (re-exported here) and hold the lock for each operation.
pub mod container;
pub mod error;
pub mod matching;
pub mod stack;

pub use container::{Container, Position};
pub use error::{Error, Result};
pub use matching::*;
pub use stack::Stack;
pub use util::Exclusive;
