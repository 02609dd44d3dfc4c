//! Incremental decoder for newline-delimited JSON and SSE `data:` streams.
//!
//! Servers flush at arbitrary byte boundaries, so a JSON line can arrive
//! split mid-token (or mid-UTF-8 sequence) across several chunks. The decoder
//! buffers raw bytes and only decodes a line once its terminating `\n` has
//! been seen; `\n` never occurs inside a multi-byte UTF-8 sequence, so the
//! same byte sequence yields the same events however it is chunked.

use serde_json::Value;

const SSE_DATA_PREFIX: &str = "data:";

/// What a single line decoded to.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// A complete JSON object or array.
    Event(Value),
    /// Empty or whitespace-only line.
    Blank,
    /// Not JSON-shaped, e.g. `:keepalive`, `event: message` or `data: [DONE]`.
    Ignored,
    /// Looked like JSON but failed to parse; carries the parser message.
    Malformed(String),
}

/// Decodes one line: trims it, strips an SSE `data:` prefix and parses the
/// remainder when it starts with `{` or `[`.
pub fn decode_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let candidate = line
        .strip_prefix(SSE_DATA_PREFIX)
        .map(str::trim)
        .unwrap_or(line);

    if !(candidate.starts_with('{') || candidate.starts_with('[')) {
        return LineOutcome::Ignored;
    }

    match serde_json::from_str(candidate) {
        Ok(value) => LineOutcome::Event(value),
        Err(e) => {
            tracing::debug!(
                error = %e,
                line_preview = %candidate.chars().take(100).collect::<String>(),
                "Skipping malformed stream line"
            );
            LineOutcome::Malformed(e.to_string())
        }
    }
}

/// Result of closing a [`StreamDecoder`] at end of stream.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamEnd {
    pub event: Option<Value>,
    pub skipped_lines: usize,
}

/// Per-call decoder state. Feed chunks in arrival order, then call
/// [`StreamDecoder::finish`] once the byte source completes.
///
/// Dropping the decoder without finishing discards any partial line, which
/// is what should happen when the underlying connection fails.
#[derive(Debug, Default)]
pub struct StreamDecoder {
    buffer: Vec<u8>,
    // Bytes of `buffer` already known to contain no newline.
    scanned: usize,
    skipped: usize,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `chunk` and returns every event completed by it, in order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Value> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        let mut start = 0;
        let mut search_from = self.scanned;

        while let Some(offset) = self.buffer[search_from..]
            .iter()
            .position(|&byte| byte == b'\n')
        {
            let end = search_from + offset;
            let outcome = decode_line(&String::from_utf8_lossy(&self.buffer[start..end]));
            self.record(outcome, &mut events);
            start = end + 1;
            search_from = start;
        }

        self.buffer.drain(..start);
        self.scanned = self.buffer.len();
        events
    }

    /// Decodes whatever is left as a final, unterminated line.
    ///
    /// Consumes the decoder: nothing can be emitted after the end of a stream.
    pub fn finish(self) -> Option<Value> {
        self.close().event
    }

    /// Like [`finish`](Self::finish), but also reports the final skipped-line
    /// count, including a malformed trailing line.
    pub fn close(mut self) -> StreamEnd {
        let event = if self.buffer.is_empty() {
            None
        } else {
            let outcome = decode_line(&String::from_utf8_lossy(&self.buffer));
            let mut events = Vec::with_capacity(1);
            self.record(outcome, &mut events);
            events.pop()
        };

        StreamEnd {
            event,
            skipped_lines: self.skipped,
        }
    }

    /// Number of JSON-shaped lines dropped because they failed to parse.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Bytes held back waiting for a line terminator.
    pub fn pending_bytes(&self) -> usize {
        self.buffer.len()
    }

    fn record(&mut self, outcome: LineOutcome, events: &mut Vec<Value>) {
        match outcome {
            LineOutcome::Event(value) => events.push(value),
            LineOutcome::Malformed(_) => self.skipped += 1,
            LineOutcome::Blank | LineOutcome::Ignored => {}
        }
    }
}
