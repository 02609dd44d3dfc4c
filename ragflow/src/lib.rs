//! Async client for the RAGFlow REST API.
//!
//! ```no_run
//! use ragflow::{ClientConfig, RagFlowClient};
//! use ragflow::models::RetrievalParams;
//!
//! # async fn run() -> ragflow::Result<()> {
//! let client = RagFlowClient::new(ClientConfig::new("http://localhost:9380", "ragflow-key"))?;
//!
//! let datasets = client.datasets().list(&Default::default()).await?;
//! let ids: Vec<String> = datasets.into_iter().map(|d| d.id).collect();
//!
//! let hits = client
//!     .retrieval()
//!     .retrieve(&RetrievalParams::new("What is RAGFlow?").with_datasets(ids))
//!     .await?;
//! println!("{} chunks", hits.total);
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;
mod config;
mod error;
pub mod http;
pub mod models;
pub mod stream;

pub use client::{ClientCache, RagFlowClient};
pub use config::{ClientConfig, DEFAULT_TIMEOUT_MS};
pub use error::{RagFlowError, Result};
