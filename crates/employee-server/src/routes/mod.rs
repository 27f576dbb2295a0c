//! Route definitions for the HTTP API.

pub mod employees;
pub mod health;

use axum::{
    Router,
    http::{Method, Uri},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// The method fallback only reaches routes already merged, so it is set
/// after them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(employees::routes(&state))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(unknown_route)
        .with_state(state)
}

/// Unmatched paths still answer with an envelope.
async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::UnknownRoute(uri.path().to_string())
}

/// A known path hit with a method it does not serve.
async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}
