//! Database module for SQLite persistence of guest records.

mod guests;
mod pool;
mod store;

pub use guests::*;
pub use pool::*;
pub use store::*;
