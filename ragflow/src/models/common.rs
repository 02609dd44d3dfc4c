use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server fields not modelled explicitly. Kept so nothing is lost on a round trip.
pub type Extra = Map<String, Value>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    CreateTime,
    UpdateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Me,
    Team,
}

/// Parsing strategy applied when a document is split into chunks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChunkMethod {
    #[default]
    Naive,
    Manual,
    Qa,
    Table,
    Paper,
    Book,
    Laws,
    Presentation,
    Picture,
    One,
    KnowledgeGraph,
    Email,
}

impl ChunkMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Manual => "manual",
            Self::Qa => "qa",
            Self::Table => "table",
            Self::Paper => "paper",
            Self::Book => "book",
            Self::Laws => "laws",
            Self::Presentation => "presentation",
            Self::Picture => "picture",
            Self::One => "one",
            Self::KnowledgeGraph => "knowledge_graph",
            Self::Email => "email",
        }
    }
}

impl std::fmt::Display for ChunkMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChunkMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "manual" => Ok(Self::Manual),
            "qa" => Ok(Self::Qa),
            "table" => Ok(Self::Table),
            "paper" => Ok(Self::Paper),
            "book" => Ok(Self::Book),
            "laws" => Ok(Self::Laws),
            "presentation" => Ok(Self::Presentation),
            "picture" => Ok(Self::Picture),
            "one" => Ok(Self::One),
            "knowledge_graph" => Ok(Self::KnowledgeGraph),
            "email" => Ok(Self::Email),
            _ => Err(format!("Unknown chunk method: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RaptorConfig {
    pub use_raptor: bool,
}

/// Chunking parameters of a dataset or document. Which keys apply depends on
/// the chunk method, so unknown keys pass through in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParserConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_token_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_recognize: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html4excel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raptor: Option<RaptorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_types: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of the bulk-delete endpoints: `{"ids": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct IdsBody<'a> {
    pub ids: &'a [String],
}

/// Body of the parse/stop-parsing endpoints: `{"document_ids": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DocumentIdsBody<'a> {
    pub document_ids: &'a [String],
}
