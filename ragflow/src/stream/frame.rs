use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::http::Envelope;

/// One event of a chat-assistant or agent conversation stream.
///
/// Those endpoints wrap every streamed event in the usual envelope:
/// `{"code": 0, "data": {...partial answer...}}`, closing with
/// `{"code": 0, "data": true}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConverseFrame<T> {
    Message(T),
    Done,
    Failed { code: i64, message: String },
}

impl<T: DeserializeOwned> ConverseFrame<T> {
    pub fn from_event(event: Value) -> Result<Self> {
        let envelope: Envelope = serde_json::from_value(event)?;

        if !envelope.is_success() {
            return Ok(Self::Failed {
                code: envelope.code,
                message: envelope.message.unwrap_or_default(),
            });
        }

        match envelope.data {
            None | Some(Value::Null) | Some(Value::Bool(_)) => Ok(Self::Done),
            Some(data) => Ok(Self::Message(serde_json::from_value(data)?)),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}
