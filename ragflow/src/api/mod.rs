//! Per-resource views over the shared [`HttpClient`](crate::http::HttpClient).
//!
//! Each facade borrows the transport and holds no state of its own, so they
//! are cheap to create per call: `client.datasets().list(..)`.

mod agents;
mod chat;
mod chat_assistants;
mod chunks;
mod datasets;
mod documents;
mod retrieval;

pub use agents::Agents;
pub use chat::Chat;
pub use chat_assistants::ChatAssistants;
pub use chunks::Chunks;
pub use datasets::Datasets;
pub use documents::Documents;
pub use retrieval::Retrieval;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::http::ByteStream;
use crate::stream::{drain, event_stream, EventStream};

/// Receives each decoded event of a streaming call, in arrival order.
pub type EventCallback<'a> = &'a mut (dyn FnMut(Value) + Send);

pub(crate) fn decode<T: DeserializeOwned>(data: Value) -> Result<T> {
    Ok(serde_json::from_value(data)?)
}

/// Like [`decode`], but a missing `data` member yields `T::default()`.
pub(crate) fn decode_or_default<T: DeserializeOwned + Default>(data: Value) -> Result<T> {
    if data.is_null() {
        return Ok(T::default());
    }
    decode(data)
}

pub(crate) async fn deliver(bytes: ByteStream, on_event: EventCallback<'_>) -> Result<()> {
    drain(bytes, on_event).await
}

pub(crate) fn into_events(bytes: ByteStream) -> EventStream {
    Box::pin(event_stream(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dataset;
    use serde_json::json;

    #[test]
    fn test_decode_or_default_on_null() {
        let datasets: Vec<Dataset> = decode_or_default(Value::Null).unwrap();
        assert!(datasets.is_empty());
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        let result: Result<Vec<Dataset>> = decode(json!({"not": "a list"}));
        assert!(matches!(result, Err(crate::RagFlowError::Json(_))));
    }
}
