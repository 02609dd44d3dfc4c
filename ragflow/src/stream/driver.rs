use std::fmt::Display;
use std::pin::Pin;

use futures::{Stream, StreamExt};
use serde_json::Value;

use super::decoder::StreamDecoder;
use crate::error::{RagFlowError, Result};

/// Decoded events of one streaming call. Ends after the first error.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<Value>> + Send>>;

fn interrupted<E: Display>(error: E) -> RagFlowError {
    RagFlowError::transport(format!("Stream interrupted: {error}"))
}

/// Drains `chunks` through a [`StreamDecoder`], calling `on_event` for each
/// event before the next chunk is pulled.
///
/// A chunk error aborts immediately: the partial line is discarded and no
/// further events are delivered.
pub async fn drain<S, B, E, F>(chunks: S, mut on_event: F) -> Result<()>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
    F: FnMut(Value),
{
    futures::pin_mut!(chunks);
    let mut decoder = StreamDecoder::new();

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(interrupted)?;
        for event in decoder.feed(chunk.as_ref()) {
            on_event(event);
        }
    }

    let end = decoder.close();
    if let Some(event) = end.event {
        on_event(event);
    }
    let skipped = end.skipped_lines;
    if skipped > 0 {
        tracing::debug!(skipped, "Stream completed with malformed lines skipped");
    }

    Ok(())
}

/// Pull-based counterpart of [`drain`]: the same events, in the same order,
/// as a `Stream`.
pub fn event_stream<S, B, E>(chunks: S) -> impl Stream<Item = Result<Value>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Display,
{
    async_stream::try_stream! {
        futures::pin_mut!(chunks);
        let mut decoder = StreamDecoder::new();

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(interrupted)?;
            for event in decoder.feed(chunk.as_ref()) {
                yield event;
            }
        }

        if let Some(event) = decoder.finish() {
            yield event;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io;

    fn ok_chunks(chunks: &[&'static str]) -> Vec<std::result::Result<&'static [u8], io::Error>> {
        chunks.iter().map(|chunk| Ok(chunk.as_bytes())).collect()
    }

    #[tokio::test]
    async fn test_drain_delivers_events_in_order() {
        let chunks = stream::iter(ok_chunks(&[
            "data: {\"n\":1}\ndata: {\"n\"",
            ":2}\n\n:keepalive\n",
            "{\"n\":3}",
        ]));

        let mut seen = Vec::new();
        drain(chunks, |event| seen.push(event)).await.unwrap();

        assert_eq!(seen, vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]);
    }

    #[tokio::test]
    async fn test_drain_error_discards_partial_line() {
        let chunks = stream::iter(vec![
            Ok(b"{\"n\":1}\n{\"n\":".as_slice()),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer")),
            Ok(b"2}\n".as_slice()),
        ]);

        let mut seen = Vec::new();
        let result = drain(chunks, |event| seen.push(event)).await;

        assert_eq!(seen, vec![json!({"n": 1})]);
        match result {
            Err(RagFlowError::Transport { message, .. }) => {
                assert!(message.contains("reset by peer"));
            }
            other => panic!("Expected Transport error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_event_stream_matches_drain() {
        let input = ["data: {\"a\"", ":1}\n", "data: {bad\n", "[1,2]"];

        let mut drained = Vec::new();
        drain(stream::iter(ok_chunks(&input)), |event| drained.push(event))
            .await
            .unwrap();

        let pulled: Vec<Value> = event_stream(stream::iter(ok_chunks(&input)))
            .map(|item| item.unwrap())
            .collect()
            .await;

        assert_eq!(drained, vec![json!({"a": 1}), json!([1, 2])]);
        assert_eq!(pulled, drained);
    }

    #[tokio::test]
    async fn test_event_stream_ends_after_error() {
        let chunks = stream::iter(vec![
            Ok(b"{\"n\":1}\n".as_slice()),
            Err(io::Error::new(io::ErrorKind::TimedOut, "timed out")),
            Ok(b"{\"n\":2}\n".as_slice()),
        ]);

        let items: Vec<Result<Value>> = event_stream(chunks).collect().await;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].as_ref().unwrap(), &json!({"n": 1}));
        assert!(items[1].as_ref().unwrap_err().is_transport_error());
    }
}
