//! Router configuration for the HTTP API.
//!
//! Sets up every route plus the middleware stack (CORS, security headers,
//! request ids, tracing, rate limiting, timeout, panic recovery) and returns
//! the axum router ready for serving.

use axum::{
    http::{header, HeaderName, HeaderValue},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers;
use super::middleware::{make_span, on_response, panic_response, record_metrics, REQUEST_ID};
use super::rate_limit;
use super::state::AppState;

const CONTENT_SECURITY_POLICY: &str =
    "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'";

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // `/weton/:weton` takes a date; the longer forms take a weton name
    let api_v1 = Router::new()
        .route("/today", get(handlers::today))
        .route("/date/:date", get(handlers::date))
        .route("/range/:start/:end", get(handlers::range))
        .route("/year/:year", get(handlers::year))
        .route("/month/:year/:month", get(handlers::month))
        .route("/weton/:weton", get(handlers::weton_of_date))
        .route("/weton/:weton/:year", get(handlers::filter_weton_year))
        .route("/weton/:weton/:year/:month", get(handlers::filter_weton_month))
        .route("/neptu/:date", get(handlers::neptu_of_date))
        .route("/wetons", get(handlers::wetons))
        .route("/statistics/:start/:end", get(handlers::statistics))
        .route("/compatibility/:date1/:date2", get(handlers::compatibility))
        .route("/good-days/:birth_date/:target_year", get(handlers::good_days))
        .route("/next/:weton/:from", get(handlers::next_occurrence));

    let routes = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .nest("/api/v1", api_v1)
        .fallback(handlers::not_found);

    with_middleware(routes, state)
}

/// Wrap `routes` in the middleware stack. Layers are listed innermost first.
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID);
    let cors = CorsLayer::permissive().expose_headers([request_id.clone()]);

    let trace = TraceLayer::new_for_http()
        .make_span_with(make_span)
        .on_response(on_response)
        .on_failure(());

    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(state.config.request_timeout))
        .layer(from_fn_with_state(state.clone(), rate_limit::enforce))
        .layer(from_fn_with_state(state.clone(), record_metrics))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(trace)
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(cors)
        .with_state(state)
}
