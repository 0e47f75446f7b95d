use std::{
    cell::UnsafeCell,
    marker::PhantomData,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, Ordering},
};

use crossbeam::utils::CachePadded;

/// Exclusive access to a value that is not synchronized on its own. Every access goes through a
/// guard, and only one guard exists at a time.
pub struct Exclusive<T> {
    locked: CachePadded<AtomicBool>,
    value: UnsafeCell<T>,
}

unsafe impl<T: Send> Send for Exclusive<T> {}
unsafe impl<T: Send> Sync for Exclusive<T> {}

/// Access to the locked value. Shared references to a guard cross threads only when `T: Sync`.
///
/// ```compile_fail
/// use std::cell::Cell;
///
/// fn shared<T: Sync>(_: &T) {}
///
/// let lock = strata_util::Exclusive::new(Cell::new(0u64));
/// let guard = lock.lock();
/// shared(&guard);
/// ```
pub struct Guard<'a, T> {
    lock: &'a Exclusive<T>,
    _unsync: PhantomData<*mut T>,
}

unsafe impl<T: Sync> Sync for Guard<'_, T> {}

impl<T> Exclusive<T> {
    pub fn new(value: T) -> Self {
        Self {
            locked: CachePadded::new(AtomicBool::new(false)),
            value: UnsafeCell::new(value),
        }
    }

    pub fn lock(&self) -> Guard<'_, T> {
        let mut iters = 1;
        let max_iters = 32;
        loop {
            match self.locked.compare_exchange_weak(
                false,
                true,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(_) => {
                    (0..iters).for_each(|_| std::hint::spin_loop());
                    iters = (iters * 2).min(max_iters);
                    if iters == max_iters {
                        std::thread::yield_now();
                    }
                }
            }
        }
        Guard {
            lock: self,
            _unsync: PhantomData,
        }
    }

    /// Run `f` with the lock held. The lock is released as soon as `f` returns.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.lock();
        f(&mut guard)
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T: Default> Default for Exclusive<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Deref for Guard<'_, T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.value.get() }
    }
}

impl<T> DerefMut for Guard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.lock.value.get() }
    }
}

impl<T> Drop for Guard<'_, T> {
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}
