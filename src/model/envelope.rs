use serde::{Deserialize, Serialize};

/// The result envelope the variant API wraps its payloads in.
///
/// Every field is optional: the update endpoint may answer with a bare
/// `{ "success": true }`, an error body with only `message`, or nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: Option<bool>,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// True only when the body carries `success: false`.
    pub fn is_explicit_failure(&self) -> bool {
        self.success == Some(false)
    }

    /// The message field, ignoring empty strings.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
