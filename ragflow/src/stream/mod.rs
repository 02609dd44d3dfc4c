mod decoder;
mod driver;
mod frame;

pub use decoder::{decode_line, LineOutcome, StreamDecoder, StreamEnd};
pub use driver::{drain, event_stream, EventStream};
pub use frame::ConverseFrame;
