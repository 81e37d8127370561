//! GhostToken - the brand that scopes one traversal's scratch state.
//!
//! A `GhostToken<'brand>` is a zero-sized capability created by
//! [`GhostToken::new`]. Every claim flag and distance cell allocated for a
//! traversal carries the same `'brand`, so none of it can outlive the closure
//! that owns the token or be mixed with the state of another traversal.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`. The brand is
//! fresh for every call to `new`, and the invariant lifetime keeps the compiler
//! from unifying two brands.

/// Invariant lifetime definitions for branding.
pub mod invariant;

pub use invariant::InvariantLifetime;

/// A zero-sized token whose lifetime brands per-traversal state.
#[derive(Debug)]
pub struct GhostToken<'brand>(InvariantLifetime<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a new token and executes a closure with it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parbfs::GhostToken;
    ///
    /// let n = GhostToken::new(|token| {
    ///     assert!(token.is_valid());
    ///     7
    /// });
    /// assert_eq!(n, 7);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(InvariantLifetime::new()))
    }

    /// Returns whether the token represents a valid branding scope.
    ///
    /// This is always true for valid tokens, but allows for const evaluation.
    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        true
    }
}

