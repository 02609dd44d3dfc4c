use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, PoisonError};

use lru::LruCache;

use crate::api::{Agents, Chat, ChatAssistants, Chunks, Datasets, Documents, Retrieval};
use crate::config::ClientConfig;
use crate::error::{RagFlowError, Result};
use crate::http::HttpClient;

/// Entry point to a RAGFlow server.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct RagFlowClient {
    http: Arc<HttpClient>,
}

impl RagFlowClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::new(&config)?;
        tracing::debug!(base_url = http.base_url(), "RAGFlow client created");
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Builds a client from `RAGFLOW_API_URL`, `RAGFLOW_API_KEY` and
    /// `RAGFLOW_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// The underlying transport, for endpoints without a facade.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn datasets(&self) -> Datasets<'_> {
        Datasets::new(&self.http)
    }

    pub fn documents(&self) -> Documents<'_> {
        Documents::new(&self.http)
    }

    pub fn chunks(&self) -> Chunks<'_> {
        Chunks::new(&self.http)
    }

    pub fn retrieval(&self) -> Retrieval<'_> {
        Retrieval::new(&self.http)
    }

    pub fn chat(&self) -> Chat<'_> {
        Chat::new(&self.http)
    }

    pub fn chat_assistants(&self) -> ChatAssistants<'_> {
        ChatAssistants::new(&self.http)
    }

    pub fn agents(&self) -> Agents<'_> {
        Agents::new(&self.http)
    }
}

type CacheKey = (String, String);

/// Thread-safe LRU of clients keyed by (base URL, API key).
///
/// Callers that talk to several servers or tenants can keep one of these
/// instead of rebuilding a client (and its connection pool) per request.
#[derive(Clone)]
pub struct ClientCache {
    clients: Arc<Mutex<LruCache<CacheKey, RagFlowClient>>>,
}

impl ClientCache {
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            RagFlowError::Validation("Client cache capacity must be non-zero".to_string())
        })?;

        Ok(Self {
            clients: Arc::new(Mutex::new(LruCache::new(capacity))),
        })
    }

    /// Returns the cached client for `config`, building and caching one on a miss.
    ///
    /// The timeout is not part of the key: a hit returns the client with
    /// whatever timeout it was first built with.
    pub fn get_or_create(&self, config: &ClientConfig) -> Result<RagFlowClient> {
        let key = (
            config.normalized_base_url().to_string(),
            config.api_key.clone(),
        );

        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(&key) {
            return Ok(client.clone());
        }

        let client = RagFlowClient::new(config.clone())?;
        clients.put(key, client.clone());
        Ok(client)
    }

    pub fn len(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.clients
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
