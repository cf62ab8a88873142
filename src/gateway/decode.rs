//! Normalizes every shape the update endpoint can answer with into
//! `Result<UpdateAck, UpdateError>`.
//!
//! Fields are read one at a time from the parsed JSON, so a mistyped field never
//! hides the others.
//!
//! | status  | body                                          | outcome                         |
//! |---------|-----------------------------------------------|---------------------------------|
//! | non-2xx | object with a non-empty string `message`      | `Http` error with that message  |
//! | non-2xx | anything else                                 | `Http` error, status-based text |
//! | 2xx     | not JSON, empty, `null`, `false`, `0`, `""`   | success, generic message        |
//! | 2xx     | JSON whose `success` is truthy                | success                         |
//! | 2xx     | any other JSON                                | `Rejected`, body message        |

use super::{RawResponse, UpdateError};
use serde_json::Value;
use tracing::debug;

/// Message shown after a confirmed update.
pub const UPDATE_SUCCESS_MESSAGE: &str = "Product variant updated successfully!";

/// Used when a rejecting body has no message of its own.
pub const UPDATE_REJECTED_MESSAGE: &str = "Update failed";

/// Used when an error carries no usable message at all.
pub const UPDATE_FAILED_MESSAGE: &str =
    "Failed to update product variant. Please check the data and try again.";

/// A confirmed update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateAck {
    /// Operator-facing confirmation.
    pub message: String,
    /// The JSON the server sent back, if the body parsed.
    pub body: Option<Value>,
}

pub fn decode_update_response(response: &RawResponse) -> Result<UpdateAck, UpdateError> {
    if !response.is_success() {
        let message = error_message(response);
        return Err(UpdateError::Http {
            status: response.status,
            message,
        });
    }

    let body = match serde_json::from_slice::<Value>(&response.body) {
        Ok(body) => body,
        Err(_) => {
            debug!(status = response.status, "Success response without a JSON body");
            return Ok(UpdateAck {
                message: UPDATE_SUCCESS_MESSAGE.to_string(),
                body: None,
            });
        }
    };

    if is_truthy(&body) && !body.get("success").is_some_and(is_truthy) {
        let message = body_message(&body).unwrap_or(UPDATE_REJECTED_MESSAGE).to_string();
        return Err(UpdateError::Rejected { message });
    }

    Ok(UpdateAck {
        message: UPDATE_SUCCESS_MESSAGE.to_string(),
        body: Some(body),
    })
}

/// Message for a non-2xx response: the body's `message` when present,
/// otherwise a status-based fallback.
pub fn error_message(response: &RawResponse) -> String {
    serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|body| body_message(&body).map(str::to_string))
        .unwrap_or_else(|| format!("HTTP error! status: {}", response.status))
}

/// Operator-facing text for an error, never empty.
pub fn display_message(error: &UpdateError) -> String {
    let message = error.message();
    if message.trim().is_empty() {
        UPDATE_FAILED_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}

/// The `message` field when it is a non-empty string.
fn body_message(body: &Value) -> Option<&str> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

/// Truthiness as the variant API's JSON clients see it: `null`, `false`, zero
/// and the empty string are false, everything else is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
