//! Branded atomics backing per-traversal claim flags and distance cells.
//!
//! Each wrapper is `repr(transparent)` over its std atomic; the brand only
//! ties the value to the [`GhostToken`](crate::GhostToken) scope that
//! allocated it. The claim in [`GhostAtomicBool::test_and_set`] is the one
//! read-modify-write a traversal performs per edge.

/// Branded `AtomicBool`.
pub mod bool;
/// Branded `AtomicI32`.
pub mod i32;

pub use bool::GhostAtomicBool;
pub use i32::GhostAtomicI32;
