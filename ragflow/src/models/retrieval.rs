use serde::{Deserialize, Serialize};

use super::common::Extra;

/// Body of `POST /api/v1/retrieval`. At least one of `dataset_ids` or
/// `document_ids` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RetrievalParams {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_similarity_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

impl RetrievalParams {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }

    pub fn with_datasets(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dataset_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_documents(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.document_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the request names a dataset or document scope to search.
    ///
    /// Only presence is checked: an empty id list still counts as a scope and
    /// is left for the server to reject.
    pub fn has_scope(&self) -> bool {
        self.dataset_ids.is_some() || self.document_ids.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RetrievedChunk {
    pub id: String,
    pub content: String,
    pub content_ltks: Option<String>,
    pub document_id: Option<String>,
    pub document_keyword: Option<String>,
    pub highlight: Option<String>,
    pub image_id: Option<String>,
    pub important_keywords: Vec<String>,
    pub kb_id: Option<String>,
    pub positions: Vec<serde_json::Value>,
    pub similarity: f64,
    pub term_similarity: Option<f64>,
    pub vector_similarity: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DocAggregate {
    pub count: u64,
    pub doc_id: String,
    pub doc_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RetrievalResult {
    pub chunks: Vec<RetrievedChunk>,
    pub doc_aggs: Vec<DocAggregate>,
    pub total: u64,
}
