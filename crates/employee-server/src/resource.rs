//! Generic REST resource plumbing.
//!
//! A resource implements [`ResourceHandler`] once; [`resource_routes`] then
//! mounts the five operations at a collection path:
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | GET | `{collection}` | list |
//! | POST | `{collection}` | create |
//! | GET | `{collection}{id}/` | retrieve |
//! | PUT | `{collection}{id}/` | update |
//! | DELETE | `{collection}{id}/` | delete |
//!
//! The routing layer only extracts request parts. Everything that decides
//! the outcome (validation, store calls, envelope choice) lives in the
//! handler.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use employee_core::{Envelope, Page, PageLinks};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

/// An envelope together with the HTTP status it is sent with.
///
/// The status and the envelope's `code` are separate values; handlers set
/// both.
#[derive(Debug)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub envelope: Envelope<T>,
}

impl<T> Reply<T> {
    pub fn new(status: StatusCode, envelope: Envelope<T>) -> Self {
        Self { status, envelope }
    }

    /// A 200 reply.
    pub fn ok(envelope: Envelope<T>) -> Self {
        Self::new(StatusCode::OK, envelope)
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}

/// The five operations of a REST resource.
#[async_trait]
pub trait ResourceHandler: Send + Sync + 'static {
    /// Serialized record type.
    type Record: Serialize + Send + 'static;

    /// Identifier parsed from the item path segment.
    type Id: FromStr + Send + 'static;

    /// Singular name used in messages, e.g. `"Employee"`.
    const NAME: &'static str;

    /// One page of records.
    ///
    /// `params` are the decoded query pairs; `links` builds page URLs.
    async fn list(
        &self,
        params: Vec<(String, String)>,
        links: PageLinks,
    ) -> ApiResult<Reply<Page<Self::Record>>>;

    /// Creates a record from a raw request body.
    async fn create(&self, body: Bytes) -> ApiResult<Reply<Self::Record>>;

    /// Fetches one record.
    async fn retrieve(&self, id: Self::Id) -> ApiResult<Reply<Self::Record>>;

    /// Merges a raw request body into an existing record.
    ///
    /// Existence is checked before the body is looked at.
    async fn update(&self, id: Self::Id, body: Bytes) -> ApiResult<Reply<Self::Record>>;

    /// Removes one record.
    async fn delete(&self, id: Self::Id) -> ApiResult<Reply<()>>;
}

/// Mount a resource at `collection`, which must start and end with `/`.
///
/// The same routes are also reachable without the trailing slash.
pub fn resource_routes<H, S>(collection: &str, handler: Arc<H>) -> Router<S>
where
    H: ResourceHandler,
    S: Clone + Send + Sync + 'static,
{
    let bare = collection.trim_end_matches('/');
    let item = format!("{}/{{id}}/", bare);
    let bare_item = format!("{}/{{id}}", bare);

    Router::new()
        .route(collection, get(list::<H>).post(create::<H>))
        .route(bare, get(list::<H>).post(create::<H>))
        .route(
            &item,
            get(retrieve::<H>).put(update::<H>).delete(destroy::<H>),
        )
        .route(
            &bare_item,
            get(retrieve::<H>).put(update::<H>).delete(destroy::<H>),
        )
        .with_state(handler)
}

// ============================================================================
// Route Handlers
// ============================================================================

async fn list<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    headers: HeaderMap,
    uri: Uri,
) -> ApiResult<Reply<Page<H::Record>>> {
    let params = query_pairs(uri.query());
    let links = PageLinks::new(request_base_url(&headers, &uri), params.clone());
    handler.list(params, links).await
}

async fn create<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    body: Bytes,
) -> ApiResult<Reply<H::Record>> {
    handler.create(body).await
}

async fn retrieve<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Reply<H::Record>> {
    let id = parse_id::<H>(&raw_id)?;
    handler.retrieve(id).await
}

async fn update<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<Reply<H::Record>> {
    let id = parse_id::<H>(&raw_id)?;
    handler.update(id, body).await
}

async fn destroy<H: ResourceHandler>(
    State(handler): State<Arc<H>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Reply<()>> {
    let id = parse_id::<H>(&raw_id)?;
    handler.delete(id).await
}

// ============================================================================
// Helper Functions
// ============================================================================

/// An identifier that does not parse cannot name an existing record.
fn parse_id<H: ResourceHandler>(raw: &str) -> ApiResult<H::Id> {
    raw.parse().map_err(|_| {
        tracing::debug!(id = %raw, resource = H::NAME, "Unparsable identifier");
        ApiError::NotFound { resource: H::NAME }
    })
}

/// Decode a query string into ordered pairs. Malformed input yields none.
pub(crate) fn query_pairs(query: Option<&str>) -> Vec<(String, String)> {
    query
        .and_then(|q| serde_urlencoded::from_str(q).ok())
        .unwrap_or_default()
}

/// The request URL without its query string.
///
/// Absolute when the host is known (from the URI or the `Host` header),
/// path-only otherwise.
pub(crate) fn request_base_url(headers: &HeaderMap, uri: &Uri) -> String {
    let path = uri.path();

    if let Some(authority) = uri.authority() {
        let scheme = uri.scheme_str().unwrap_or("http");
        return format!("{}://{}{}", scheme, authority, path);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());
    let Some(host) = host else {
        return path.to_string();
    };

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    format!("{}://{}{}", scheme, host, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_query_pairs() {
        assert_eq!(
            query_pairs(Some("page=2&page_size=5")),
            vec![
                ("page".to_string(), "2".to_string()),
                ("page_size".to_string(), "5".to_string())
            ]
        );
        assert!(query_pairs(None).is_empty());
        assert!(query_pairs(Some("")).is_empty());
    }

    #[test]
    fn test_base_url_from_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("api.example.com"));
        let uri: Uri = "/api/employees/?page=2".parse().unwrap();

        assert_eq!(
            request_base_url(&headers, &uri),
            "http://api.example.com/api/employees/"
        );

        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(
            request_base_url(&headers, &uri),
            "https://api.example.com/api/employees/"
        );
    }

    #[test]
    fn test_base_url_from_absolute_uri() {
        let uri: Uri = "http://localhost:3000/api/employees/".parse().unwrap();
        assert_eq!(
            request_base_url(&HeaderMap::new(), &uri),
            "http://localhost:3000/api/employees/"
        );
    }

    #[test]
    fn test_base_url_without_host() {
        let uri: Uri = "/api/employees/".parse().unwrap();
        assert_eq!(request_base_url(&HeaderMap::new(), &uri), "/api/employees/");
    }

    #[test]
    fn test_reply_status_is_independent_of_code() {
        let reply = Reply::new(StatusCode::ACCEPTED, Envelope::success("ok", 200, ()));
        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }
}
