mod agent;
mod assistant;
mod chat;
mod chunk;
mod common;
mod dataset;
mod document;
mod retrieval;

pub use agent::*;
pub use assistant::*;
pub use chat::*;
pub use chunk::*;
pub use common::{ChunkMethod, Extra, OrderBy, ParserConfig, Permission, RaptorConfig};
pub use dataset::*;
pub use document::*;
pub use retrieval::*;

pub(crate) use common::{DocumentIdsBody, IdsBody};
