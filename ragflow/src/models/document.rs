use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ChunkMethod, Extra, OrderBy, ParserConfig};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub dataset_id: Option<String>,
    pub location: Option<String>,
    pub size: u64,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub source_type: Option<String>,
    pub chunk_method: Option<String>,
    pub parser_config: Option<ParserConfig>,
    pub chunk_count: u64,
    pub token_count: u64,
    /// Parsing progress in `0.0..=1.0`.
    pub progress: f64,
    pub progress_msg: Option<String>,
    /// Parsing state, e.g. `UNSTART`, `RUNNING`, `DONE`, `FAIL`, `CANCEL`.
    pub run: Option<String>,
    pub status: Option<String>,
    pub thumbnail: Option<String>,
    pub process_begin_at: Option<String>,
    pub process_duation: Option<f64>,
    pub meta_fields: Option<Value>,
    pub created_by: Option<String>,
    pub create_date: Option<String>,
    pub create_time: Option<i64>,
    pub update_date: Option<String>,
    pub update_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DocumentList {
    pub docs: Vec<Document>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateDocumentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_fields: Option<Extra>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<ChunkMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_config: Option<ParserConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListDocumentsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub orderby: Option<OrderBy>,
    pub desc: Option<bool>,
    pub keywords: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReprocessOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_method: Option<ChunkMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_config: Option<ParserConfig>,
}

/// In-memory file to upload as a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}
