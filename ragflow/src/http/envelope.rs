//! The `{code, message, data}` wrapper every non-streaming RAGFlow response uses.
//!
//! ```json
//! { "code": 0, "data": { "id": "b2f4..." } }
//! { "code": 102, "message": "You don't own the dataset." }
//! ```
//!
//! `code == 0` means success. Any other code means `data` is not trustworthy
//! and `message` carries the server's explanation, whatever the HTTP status.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RagFlowError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Returns the payload of a successful envelope.
///
/// An absent (or `null`) `data` on success yields [`Value::Null`]; callers
/// that expect no content discard it.
pub fn unwrap_envelope(envelope: Envelope) -> Result<Value> {
    if envelope.is_success() {
        return Ok(envelope.data.unwrap_or(Value::Null));
    }

    Err(RagFlowError::Api {
        code: envelope.code,
        message: envelope
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string()),
    })
}
