//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};

use super::cache::TtlCache;
use super::metrics::Metrics;
use super::rate_limit::{RateLimiter, RATE_LIMIT_WINDOW};
use crate::calendar::{CalendarEngine, MonthData, YearData};
use crate::config::ServerConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: CalendarEngine,
    pub config: Arc<ServerConfig>,
    pub years: TtlCache<i32, YearData>,
    pub months: TtlCache<(i32, u32), MonthData>,
    pub metrics: Arc<Metrics>,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            engine: CalendarEngine::new(),
            years: TtlCache::new(config.cache_ttl),
            months: TtlCache::new(config.cache_ttl),
            rate_limiter: RateLimiter::new(config.rate_limit_per_minute, RATE_LIMIT_WINDOW),
            config: Arc::new(config),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Today's calendar day in UTC.
    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Inclusive bounds for any year path parameter.
    pub fn year_bounds(&self) -> (i32, i32) {
        let current = self.today().year();
        (self.config.year_min, self.config.year_max(current))
    }
}
