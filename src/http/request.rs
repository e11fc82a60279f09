//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every inbound request
//! - Leave an ID supplied by the caller untouched
//!
//! # Design Decisions
//! - ID attached as early as possible so all log events correlate
//! - Plugged into `tower_http`'s request-id layers rather than a bespoke
//!   middleware

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Mints a fresh UUID v4 request ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoMakeRequestId;

impl MakeRequestId for EchoMakeRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        // A UUID is always a valid header value.
        id.parse().ok().map(RequestId::new)
    }
}
