//! Request handlers for guest operations.

mod guests;

pub use guests::*;
