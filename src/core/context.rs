//! Request-scoped context threaded through every layer.

use std::future::{ready, Ready};

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;

/// Correlation id stored in request extensions by the `RequestId` middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

/// Per-request context handed from the controller down to the store calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: String,
}

impl RequestContext {
    /// Create a context bound to the given correlation id.
    /// An empty id is replaced by a freshly generated one.
    pub fn new(correlation_id: impl Into<String>) -> Self {
        let correlation_id = correlation_id.into();
        if correlation_id.trim().is_empty() {
            return Self::detached();
        }
        Self { correlation_id }
    }

    /// Context for work that does not originate from an inbound request
    pub fn detached() -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = match req.extensions().get::<CorrelationId>() {
            Some(id) => RequestContext::new(id.0.clone()),
            None => RequestContext::detached(),
        };
        ready(Ok(context))
    }
}
