use serde::{Deserialize, Serialize};

use super::common::Extra;
use super::document::Document;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Chunk {
    pub id: String,
    pub content: String,
    pub document_id: Option<String>,
    pub dataset_id: Option<String>,
    pub document_keyword: Option<String>,
    pub docnm_kwd: Option<String>,
    pub image_id: Option<String>,
    pub important_keywords: Vec<String>,
    pub questions: Vec<String>,
    pub positions: Vec<serde_json::Value>,
    pub available: Option<bool>,
    pub available_int: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChunkList {
    pub chunks: Vec<Chunk>,
    pub doc: Option<Document>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AddChunkParams {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<String>>,
}

impl AddChunkParams {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateChunkParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub important_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListChunksParams {
    pub keywords: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub id: Option<String>,
}
