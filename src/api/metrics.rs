//! Process-wide counters served at `/metrics`.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::cache::CacheStatus;

#[derive(Debug, Default)]
pub struct Metrics {
    requests_total: AtomicU64,
    client_errors_total: AtomicU64,
    server_errors_total: AtomicU64,
    conversions_total: AtomicU64,
    cache_hits_total: AtomicU64,
    cache_misses_total: AtomicU64,
}

/// Point-in-time copy of [`Metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub client_errors_total: u64,
    pub server_errors_total: u64,
    pub conversions_total: u64,
    pub cache_hits_total: u64,
    pub cache_misses_total: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, status: u16) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        match status {
            400..=499 => self.client_errors_total.fetch_add(1, Ordering::Relaxed),
            500..=599 => self.server_errors_total.fetch_add(1, Ordering::Relaxed),
            _ => 0,
        };
    }

    /// Count `days` converted Gregorian days.
    pub fn record_conversions(&self, days: usize) {
        self.conversions_total.fetch_add(days as u64, Ordering::Relaxed);
    }

    pub fn record_cache(&self, status: CacheStatus) {
        let counter = match status {
            CacheStatus::Hit => &self.cache_hits_total,
            CacheStatus::Miss => &self.cache_misses_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            client_errors_total: self.client_errors_total.load(Ordering::Relaxed),
            server_errors_total: self.server_errors_total.load(Ordering::Relaxed),
            conversions_total: self.conversions_total.load(Ordering::Relaxed),
            cache_hits_total: self.cache_hits_total.load(Ordering::Relaxed),
            cache_misses_total: self.cache_misses_total.load(Ordering::Relaxed),
        }
    }
}
