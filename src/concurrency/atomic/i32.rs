use core::{
    marker::PhantomData,
    sync::atomic::{AtomicI32, Ordering},
};

/// A branded `AtomicI32`.
#[repr(transparent)]
pub struct GhostAtomicI32<'brand> {
    inner: AtomicI32,
    _brand: PhantomData<&'brand mut ()>,
}

impl<'brand> GhostAtomicI32<'brand> {
    /// Creates a new branded atomic i32.
    #[inline(always)]
    pub const fn new(value: i32) -> Self {
        Self {
            inner: AtomicI32::new(value),
            _brand: PhantomData,
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn load(&self, order: Ordering) -> i32 {
        self.inner.load(order)
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store(&self, value: i32, order: Ordering) {
        self.inner.store(value, order);
    }

    /// Consumes the atomic and returns the contained value.
    #[inline(always)]
    pub fn into_inner(self) -> i32 {
        self.inner.into_inner()
    }
}
