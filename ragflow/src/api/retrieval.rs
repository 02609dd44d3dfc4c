use crate::error::{RagFlowError, Result};
use crate::http::HttpClient;
use crate::models::{RetrievalParams, RetrievalResult};

use super::decode_or_default;

const RETRIEVAL_PATH: &str = "/api/v1/retrieval";

#[derive(Clone, Copy)]
pub struct Retrieval<'a> {
    http: &'a HttpClient,
}

impl<'a> Retrieval<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Semantic search over datasets or documents.
    ///
    /// Fails with [`RagFlowError::Validation`] without sending anything when
    /// neither `dataset_ids` nor `document_ids` is set.
    pub async fn retrieve(&self, params: &RetrievalParams) -> Result<RetrievalResult> {
        if !params.has_scope() {
            return Err(RagFlowError::Validation(
                "Either dataset_ids or document_ids must be provided".to_string(),
            ));
        }

        let data = self.http.post(RETRIEVAL_PATH, params).await?;
        decode_or_default(data)
    }
}
