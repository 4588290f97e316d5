use std::ops::{Deref, DerefMut};

use parking_lot::{Mutex, MutexGuard};

/// An integer shared by every caller of a session.
///
/// All access goes through the mutex; the guard returned by
/// [`SharedCounter::lock`] releases it on every exit path. `parking_lot`
/// mutexes are eventually fair, so no caller starves under contention.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: Mutex<u64>,
}

impl SharedCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one and returns the new value.
    pub fn increment(&self) -> u64 {
        let mut guard = self.lock();
        guard.increment()
    }

    pub fn read(&self) -> u64 {
        *self.lock()
    }

    /// Enters the critical section.
    pub fn lock(&self) -> CounterGuard<'_> {
        CounterGuard {
            inner: self.value.lock(),
        }
    }
}

/// Scoped access to a [`SharedCounter`].
#[derive(Debug)]
pub struct CounterGuard<'a> {
    inner: MutexGuard<'a, u64>,
}

impl CounterGuard<'_> {
    pub fn increment(&mut self) -> u64 {
        *self.inner += 1;
        *self.inner
    }
}

impl Deref for CounterGuard<'_> {
    type Target = u64;

    fn deref(&self) -> &u64 {
        &self.inner
    }
}

impl DerefMut for CounterGuard<'_> {
    fn deref_mut(&mut self) -> &mut u64 {
        &mut self.inner
    }
}
