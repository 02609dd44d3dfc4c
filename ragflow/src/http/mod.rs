mod envelope;
mod query;
mod transport;

pub use envelope::{unwrap_envelope, Envelope};
pub use query::{encode_query, query_pairs};
pub use transport::{ByteStream, HttpClient, RawResponse};
