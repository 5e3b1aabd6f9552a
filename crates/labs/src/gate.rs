//! Bounded-concurrency admission gate.
//!
//! Requests either get a slot immediately or are turned away; nothing waits.
//! A slot is held by an [`AdmissionPermit`] and released when the permit is
//! dropped, so every exit path of a request (success, error, panic or a
//! dropped future) gives the slot back exactly once.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
pub struct AdmissionGate {
    capacity: usize,
    in_flight: Mutex<usize>,
}

/// Proof of admission. Dropping it releases the slot.
#[derive(Debug)]
#[must_use = "dropping the permit releases the slot immediately"]
pub struct AdmissionPermit {
    gate: Arc<AdmissionGate>,
}

impl AdmissionGate {
    /// Create a gate with a fixed capacity. `capacity` must be non-zero.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "admission gate capacity must be non-zero");
        Self {
            capacity,
            in_flight: Mutex::new(0),
        }
    }

    /// Take a slot if one is free.
    ///
    /// The check and the increment happen under the same lock, so concurrent
    /// callers can never push the count past the capacity.
    pub fn try_enter(self: &Arc<Self>) -> Option<AdmissionPermit> {
        let mut in_flight = self.lock();
        if *in_flight < self.capacity {
            *in_flight += 1;
            Some(AdmissionPermit {
                gate: Arc::clone(self),
            })
        } else {
            None
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots currently held.
    pub fn in_flight(&self) -> usize {
        *self.lock()
    }

    fn leave(&self) {
        let mut in_flight = self.lock();
        debug_assert!(*in_flight > 0, "admission gate released more than entered");
        *in_flight = in_flight.saturating_sub(1);
    }

    // The counter stays consistent even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for AdmissionPermit {
    fn drop(&mut self) {
        self.gate.leave();
    }
}
