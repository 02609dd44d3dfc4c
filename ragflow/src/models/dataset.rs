use serde::{Deserialize, Serialize};

use super::common::{ChunkMethod, Extra, OrderBy, ParserConfig, Permission};

/// A knowledge base: a named collection of documents sharing one embedding
/// model and chunking strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub chunk_count: u64,
    pub document_count: u64,
    pub token_num: u64,
    pub chunk_method: String,
    pub embedding_model: String,
    pub language: Option<String>,
    pub permission: Option<String>,
    pub parser_config: ParserConfig,
    pub similarity_threshold: Option<f64>,
    pub vector_similarity_weight: Option<f64>,
    pub status: Option<String>,
    pub tenant_id: Option<String>,
    pub created_by: Option<String>,
    pub create_date: Option<String>,
    pub create_time: Option<i64>,
    pub update_date: Option<String>,
    pub update_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateDatasetParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<Permission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<ChunkMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_config: Option<ParserConfig>,
}

impl CreateDatasetParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateDatasetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<ChunkMethod>,
}

/// Query parameters for `GET /api/v1/datasets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListDatasetsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub orderby: Option<OrderBy>,
    pub desc: Option<bool>,
    pub name: Option<String>,
    pub id: Option<String>,
}
