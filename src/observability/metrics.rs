//! Metrics registry for the song service
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters shared by all request handlers
///
/// Uses Relaxed ordering; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// List requests served
    songs_listed: AtomicU64,
    /// Songs created
    songs_created: AtomicU64,
    /// Songs updated in place
    songs_updated: AtomicU64,
    /// Delete requests served (including no-op deletes)
    songs_deleted: AtomicU64,
    /// Requests rejected with a client error
    requests_rejected: AtomicU64,
    /// Store operations that failed
    store_failures: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_songs_listed(&self) {
        self.songs_listed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_songs_created(&self) {
        self.songs_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_songs_updated(&self) {
        self.songs_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_songs_deleted(&self) {
        self.songs_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_requests_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_failures(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            songs_listed: self.songs_listed.load(Ordering::Relaxed),
            songs_created: self.songs_created.load(Ordering::Relaxed),
            songs_updated: self.songs_updated.load(Ordering::Relaxed),
            songs_deleted: self.songs_deleted.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }
}

/// Serializable counter values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub songs_listed: u64,
    pub songs_created: u64,
    pub songs_updated: u64,
    pub songs_deleted: u64,
    pub requests_rejected: u64,
    pub store_failures: u64,
}
