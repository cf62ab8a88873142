//! Outbound side of the update workflow: the `VariantGateway` transport seam,
//! its `reqwest` implementation, a scripted mock, and the response decoder.
//!
//! The gateway only moves bytes. Interpreting a response (HTTP status, optional
//! JSON body, success flag) is the job of [`decode_update_response`], so the
//! same rules apply whichever transport produced the response.

pub mod decode;
pub mod error;
pub mod http;
pub mod mock;

pub use decode::*;
pub use error::*;
pub use http::*;
pub use mock::*;

use crate::model::VariantRecord;
use async_trait::async_trait;

/// Path of the update endpoint, relative to the API base URL.
pub const UPDATE_VARIANT_PATH: &str = "/api/ProductVariant/updateProductVariant";

/// Status line and body of an HTTP response, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response whose body is the serialized JSON value.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport capability for pushing an edited variant to the remote service.
#[async_trait]
pub trait VariantGateway: Send + Sync {
    /// Sends the full record as the update payload. Exactly one request per call.
    ///
    /// Any HTTP status is a successful transport result; only a missing response
    /// (connection refused, timeout, broken body) is an error.
    async fn post_update(&self, payload: &VariantRecord) -> Result<RawResponse, GatewayError>;
}
