//! `x-request-id` handling.
//!
//! Requests without the header get a fresh UUID v4; a caller-supplied value
//! is kept. Either way the value is echoed on the response and recorded on
//! the request's trace span.

use http::{HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Issues a random UUID per request.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidRequestIds;

impl MakeRequestId for UuidRequestIds {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().hyphenated().to_string();
        HeaderValue::try_from(id).ok().map(RequestId::new)
    }
}

/// Assigns an ID to requests that arrive without one.
pub fn assign_layer() -> SetRequestIdLayer<UuidRequestIds> {
    SetRequestIdLayer::x_request_id(UuidRequestIds)
}

/// Copies the request's ID onto its response.
pub fn echo_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// The ID a request carries, if it is valid text.
pub fn request_id_of<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)?
        .to_str()
        .ok()
}
