//! Middleware stack around the router.

use axum::{Router, body::Body, http::Request};
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use crate::middleware::request_id::{assign_layer, echo_layer, request_id_of};
use crate::routes;
use crate::state::AppState;

/// Build the full application: routes plus tracing, CORS and request IDs.
///
/// Fails only when `CORS_ALLOWED_ORIGINS` holds an unparsable origin.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(state.config())?;

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = request_id_of(request).unwrap_or("-"),
        )
    });

    // Outermost last: the request ID exists before the trace span opens.
    Ok(routes::build_router(state)
        .layer(echo_layer())
        .layer(cors)
        .layer(trace)
        .layer(assign_layer()))
}

/// Build CORS layer from configuration.
fn build_cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let allowed_origins = config.cors_allowed_origins.trim();

    if allowed_origins == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ALLOWED_ORIGINS".to_string(),
                    reason: format!("\"{}\" is not a valid origin", origin),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origin_list() {
        let config = ServerConfig {
            cors_allowed_origins: "http://localhost:5173, https://hr.example.com".to_string(),
            ..ServerConfig::default()
        };
        assert!(build_cors_layer(&config).is_ok());
    }

    #[test]
    fn test_invalid_cors_origin() {
        let config = ServerConfig {
            cors_allowed_origins: "http://ok.example.com,bad\norigin".to_string(),
            ..ServerConfig::default()
        };
        assert!(build_app(AppState::in_memory(config)).is_err());
    }
}
