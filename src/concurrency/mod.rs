//! Concurrency building blocks for level-synchronous traversals.
//!
//! Important: brands enforce scoping, not synchronization. Everything shared
//! across workers here is either an atomic or a slice region owned by exactly
//! one task.

pub mod atomic;
pub mod scan;
pub mod scatter;

pub use scan::{exclusive_scan, exclusive_scan_padded};
pub use scatter::scatter_lists;
