//! Fixed-window request budget per client IP.
//!
//! Each client gets `limit` requests per window. The window restarts on the
//! first request after it expires. Counts live in process memory only.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::ApiError;
use super::state::AppState;

pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    clients: Arc<Mutex<HashMap<Option<IpAddr>, (Instant, u32)>>>,
}

impl RateLimiter {
    /// `limit == 0` lets every request through.
    pub fn new(limit: u32, window: Duration) -> Self {
        RateLimiter {
            limit,
            window,
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Count one request from `client`; `false` once its budget is spent.
    pub fn check(&self, client: Option<IpAddr>) -> bool {
        if self.limit == 0 {
            return true;
        }
        let Ok(mut clients) = self.clients.lock() else {
            return true;
        };

        let now = Instant::now();
        let window = self.window;
        clients.retain(|_, (started, _)| now.duration_since(*started) < window);

        let (_, count) = clients.entry(client).or_insert((now, 0));
        *count += 1;
        *count <= self.limit
    }
}

/// Requests without a peer address (in-process tests) share one bucket.
pub async fn enforce(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    if !state.rate_limiter.check(client) {
        tracing::warn!(
            client = ?client,
            limit = state.config.rate_limit_per_minute,
            "rate limit exceeded"
        );
        return ApiError::TooManyRequests(
            "Terlalu banyak permintaan, coba lagi nanti".to_string(),
        )
        .into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip(last: u8) -> Option<IpAddr> {
        Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, last)))
    }

    #[test]
    fn test_budget_per_client() {
        let limiter = RateLimiter::new(2, RATE_LIMIT_WINDOW);

        assert!(limiter.check(ip(1)));
        assert!(limiter.check(ip(1)));
        assert!(!limiter.check(ip(1)));
        assert!(limiter.check(ip(2)));
    }

    #[test]
    fn test_zero_limit_disables() {
        let limiter = RateLimiter::new(0, RATE_LIMIT_WINDOW);
        for _ in 0..1000 {
            assert!(limiter.check(None));
        }
    }

    #[test]
    fn test_window_resets() {
        let limiter = RateLimiter::new(1, Duration::from_millis(5));

        assert!(limiter.check(ip(1)));
        assert!(!limiter.check(ip(1)));
        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.check(ip(1)));
    }
}
