use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use futures::Stream;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    multipart::Form,
    Client, Method, RequestBuilder,
};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::envelope::{unwrap_envelope, Envelope};
use super::query::query_pairs;
use crate::config::ClientConfig;
use crate::error::{RagFlowError, Result};

/// Raw body chunks of a streaming response, in arrival order.
pub type ByteStream = Pin<Box<dyn Stream<Item = reqwest::Result<Bytes>> + Send>>;

/// A decoded, still-wrapped response and the HTTP status it arrived with.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub envelope: Envelope,
}

/// Authenticated HTTP transport bound to one base URL and credential.
///
/// Performs exactly one request per call: no retries, no caching. Every
/// request carries `Authorization: Bearer <api_key>`; JSON requests also set
/// `Content-Type: application/json`. Non-streaming calls are bounded by the
/// configured timeout, streaming bodies only by the connect timeout.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url();
        if base_url.is_empty() {
            return Err(RagFlowError::Validation(
                "Base URL cannot be empty".to_string(),
            ));
        }

        Url::parse(base_url).map_err(|e| {
            RagFlowError::Validation(format!("Invalid base URL '{base_url}': {e}"))
        })?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| RagFlowError::Validation(format!("Invalid API key header: {e}")))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.timeout())
            .build()
            .map_err(|e| RagFlowError::transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            timeout: config.timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn get<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        let request = self
            .client
            .get(self.url(path, Some(query))?)
            .header(CONTENT_TYPE, "application/json");
        self.send(Method::GET, path, request).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.client.post(self.url(path, None::<&()>)?).json(body);
        self.send(Method::POST, path, request).await
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.client.put(self.url(path, None::<&()>)?).json(body);
        self.send(Method::PUT, path, request).await
    }

    /// DELETE with a JSON body; RAGFlow takes the ids to remove in the body.
    pub async fn delete<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let request = self.client.delete(self.url(path, None::<&()>)?).json(body);
        self.send(Method::DELETE, path, request).await
    }

    /// Multipart POST. The content type (with boundary) is set by reqwest.
    pub async fn post_form(&self, path: &str, form: Form) -> Result<Value> {
        let request = self
            .client
            .post(self.url(path, None::<&()>)?)
            .multipart(form);
        self.send(Method::POST, path, request).await
    }

    pub async fn post_stream<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ByteStream> {
        let request = self.client.post(self.url(path, None::<&()>)?).json(body);
        self.open_stream(Method::POST, path, request).await
    }

    pub async fn get_stream<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ByteStream> {
        let request = self
            .client
            .get(self.url(path, Some(query))?)
            .header(CONTENT_TYPE, "application/json");
        self.open_stream(Method::GET, path, request).await
    }

    /// Sends a non-streaming request and decodes the envelope without unwrapping it.
    ///
    /// A body that is not an envelope (or lacks `code`) is a transport error,
    /// as is a non-2xx status paired with a success envelope. A non-2xx status
    /// with a failing envelope is returned as-is so the server's code wins.
    pub async fn execute(&self, request: RequestBuilder) -> Result<RawResponse> {
        let response = request.timeout(self.timeout).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) if !status.is_success() && envelope.is_success() => {
                Err(RagFlowError::Transport {
                    status: Some(status.as_u16()),
                    body: Some(body),
                    message: format!("Request failed with HTTP {status}"),
                })
            }
            Ok(envelope) => Ok(RawResponse {
                status: status.as_u16(),
                envelope,
            }),
            Err(e) => {
                let message = if status.is_success() {
                    format!("Response is not a valid envelope: {e}")
                } else {
                    format!("Request failed with HTTP {status}")
                };
                Err(RagFlowError::Transport {
                    status: Some(status.as_u16()),
                    body: Some(body),
                    message,
                })
            }
        }
    }

    async fn send(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Value> {
        let raw = self.execute(request).await?;
        tracing::debug!(
            method = %method,
            path,
            status = raw.status,
            code = raw.envelope.code,
            "RAGFlow request completed"
        );
        unwrap_envelope(raw.envelope)
    }

    async fn open_stream(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ByteStream> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(method = %method, path, status = status.as_u16(), "RAGFlow stream opened");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if let Ok(envelope) = serde_json::from_str::<Envelope>(&body) {
                if let Err(api_error) = unwrap_envelope(envelope) {
                    return Err(api_error);
                }
            }

            return Err(RagFlowError::Transport {
                status: Some(status.as_u16()),
                body: Some(body),
                message: format!("Streaming request failed with HTTP {status}"),
            });
        }

        Ok(Box::pin(response.bytes_stream()))
    }

    fn url<Q: Serialize + ?Sized>(&self, path: &str, query: Option<&Q>) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw)
            .map_err(|e| RagFlowError::Validation(format!("Invalid request URL '{raw}': {e}")))?;

        if let Some(query) = query {
            let pairs = query_pairs(query)?;
            if !pairs.is_empty() {
                url.query_pairs_mut().extend_pairs(pairs);
            }
        }

        Ok(url)
    }
}
