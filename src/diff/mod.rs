//! Coordinate set differencing
//!
//! Compares the target value coordinates of two snapshots.

mod change_set;

pub use change_set::{diff, ChangeDirection, ChangeSet};
