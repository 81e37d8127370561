use core::{
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};

/// A branded `AtomicBool`.
#[repr(transparent)]
pub struct GhostAtomicBool<'brand> {
    inner: AtomicBool,
    _brand: PhantomData<&'brand mut ()>,
}

impl<'brand> GhostAtomicBool<'brand> {
    /// Creates a new branded atomic bool.
    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self {
            inner: AtomicBool::new(value),
            _brand: PhantomData,
        }
    }

    /// Loads the current value.
    #[inline(always)]
    pub fn load(&self, order: Ordering) -> bool {
        self.inner.load(order)
    }

    /// Stores a new value.
    #[inline(always)]
    pub fn store(&self, value: bool, order: Ordering) {
        self.inner.store(value, order);
    }

    /// Stores a value if the current value equals `current`.
    #[inline(always)]
    pub fn compare_exchange(
        &self,
        current: bool,
        new: bool,
        success: Ordering,
        failure: Ordering,
    ) -> Result<bool, bool> {
        self.inner.compare_exchange(current, new, success, failure)
    }

    /// Sets the flag if it is currently clear.
    ///
    /// Returns `true` iff this call performed the `false -> true` transition.
    /// Among any number of concurrent callers exactly one observes `true`.
    #[inline]
    pub fn test_and_set(&self, order: Ordering) -> bool {
        // A plain load first keeps already-claimed flags off the RMW path.
        if self.inner.load(Ordering::Relaxed) {
            return false;
        }
        self.compare_exchange(false, true, order, Ordering::Relaxed)
            .is_ok()
    }

    /// Consumes the flag and returns its value.
    #[inline(always)]
    pub fn into_inner(self) -> bool {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_set_wins_once() {
        let flag = GhostAtomicBool::new(false);
        assert!(flag.test_and_set(Ordering::Relaxed));
        assert!(!flag.test_and_set(Ordering::Relaxed));
        assert!(flag.load(Ordering::Relaxed));

        flag.store(false, Ordering::Relaxed);
        assert!(flag.test_and_set(Ordering::Relaxed));
        assert!(flag.into_inner());
    }

    #[test]
    fn concurrent_test_and_set_has_single_winner() {
        use std::sync::atomic::AtomicUsize;

        for _ in 0..64 {
            let flag = GhostAtomicBool::new(false);
            let winners = AtomicUsize::new(0);
            std::thread::scope(|s| {
                for _ in 0..8 {
                    s.spawn(|| {
                        if flag.test_and_set(Ordering::AcqRel) {
                            winners.fetch_add(1, Ordering::Relaxed);
                        }
                    });
                }
            });
            assert_eq!(winners.load(Ordering::Relaxed), 1);
        }
    }
}
