//! # Queue Advisor Library
//!
//! Exposes the Axum router and the recommendation/pricing modules so
//! integration tests can create an in-process server without requiring
//! `cargo run` in another terminal.

pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod recommendation;
pub mod regions;
pub mod requirements;
pub mod routes;

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;

/// Build the Axum router with all route modules and middleware.
///
/// This function does NOT start a server.
pub fn create_app() -> Router {
    with_middleware(
        Router::new()
            .merge(routes::compare::router())
            .merge(routes::catalog::router())
            .merge(routes::health::router()),
    )
}

/// Wrap routes in the shared middleware stack.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// A panicking handler still answers with the generic `{ error }` body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", details)).into_response()
}
