//! Internal per-traversal building blocks.
//!
//! This module is intentionally `pub(crate)` so both engines can share branded
//! claim flags and distance cells without exposing them as part of the public
//! API surface.

pub(crate) mod distances;
pub(crate) mod visited;

pub(crate) use distances::DistanceCells;
pub(crate) use visited::VisitedFlags;
