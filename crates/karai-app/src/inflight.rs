//! In-flight request sequencing and per-resource mutation serialization.
//!
//! Responses may arrive out of order relative to rapid repeated actions;
//! there is no request cancellation. Instead each resource carries a
//! monotonically increasing sequence: a response commits only if it started
//! after the latest applied one (last-write-wins by request start time, not
//! arrival time). Mutations against the same resource additionally serialize
//! through a per-key async lock so interleaved increment/decrement calls
//! cannot lose updates.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Monotonic sequence gate for one logical resource.
#[derive(Debug)]
pub struct SeqGate {
    next: AtomicU64,
    applied: AtomicU64,
}

impl SeqGate {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            applied: AtomicU64::new(0),
        }
    }

    /// Take a sequence number before issuing the request.
    pub fn begin(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Commit a completed request. Returns `false` when a newer request
    /// already committed — the caller must discard this response.
    pub fn try_commit(&self, seq: u64) -> bool {
        loop {
            let current = self.applied.load(Ordering::SeqCst);
            if seq <= current {
                return false;
            }
            if self
                .applied
                .compare_exchange(current, seq, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return true;
            }
        }
    }
}

impl Default for SeqGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazily created per-key async locks.
#[derive(Debug, Default)]
pub struct KeyedLocks {
    inner: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock handle for `key`; hold the guard across the mutation + refetch.
    pub fn lock_for(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.inner.lock().unwrap();
        Arc::clone(map.entry(key.to_owned()).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_commit_in_order_requests() {
        let gate = SeqGate::new();
        let first = gate.begin();
        let second = gate.begin();
        assert!(gate.try_commit(first));
        assert!(gate.try_commit(second));
    }

    #[test]
    fn should_discard_stale_response() {
        let gate = SeqGate::new();
        let older = gate.begin();
        let newer = gate.begin();
        // The newer request's response arrives first and commits.
        assert!(gate.try_commit(newer));
        // The older one straggles in afterwards and is discarded.
        assert!(!gate.try_commit(older));
    }

    #[test]
    fn should_reject_double_commit() {
        let gate = SeqGate::new();
        let seq = gate.begin();
        assert!(gate.try_commit(seq));
        assert!(!gate.try_commit(seq));
    }

    #[tokio::test]
    async fn should_serialize_same_key_and_not_others() {
        let locks = KeyedLocks::new();
        let a1 = locks.lock_for("cart_1");
        let a2 = locks.lock_for("cart_1");
        let b = locks.lock_for("cart_2");

        let guard = a1.lock().await;
        // Same key: second lock attempt would block.
        assert!(a2.try_lock().is_err());
        // Different key: independent.
        assert!(b.try_lock().is_ok());
        drop(guard);
        assert!(a2.try_lock().is_ok());
    }
}
