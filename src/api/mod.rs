//! HTTP API layer for jakal.
//!
//! Routes, handlers, request validation, the response envelope and the
//! per-request middleware that the `jakal-server` binary serves.

pub mod cache;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod rate_limit;
pub mod router;
pub mod state;
pub mod validation;

pub use envelope::ApiResponse;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
