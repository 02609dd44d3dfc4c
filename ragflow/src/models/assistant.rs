use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::chat::ChatMessage;
use super::common::{Extra, OrderBy};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LlmSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptVariable {
    pub key: String,
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PromptSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_similarity_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<PromptVariable>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rerank_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opener: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_quote: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// A chat assistant bound to one or more datasets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChatAssistant {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub dataset_ids: Vec<String>,
    pub language: Option<String>,
    pub llm: Option<LlmSettings>,
    pub prompt: Option<PromptSettings>,
    pub prompt_type: Option<String>,
    pub do_refer: Option<String>,
    pub top_k: Option<u32>,
    pub status: Option<String>,
    pub tenant_id: Option<String>,
    pub create_date: Option<String>,
    pub create_time: Option<i64>,
    pub update_date: Option<String>,
    pub update_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateChatAssistantParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<LlmSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptSettings>,
}

impl CreateChatAssistantParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateChatAssistantParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<LlmSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListChatAssistantsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub orderby: Option<OrderBy>,
    pub desc: Option<bool>,
    pub name: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChatSession {
    pub id: String,
    pub chat_id: Option<String>,
    pub name: String,
    pub messages: Vec<ChatMessage>,
    pub user_id: Option<String>,
    pub create_date: Option<String>,
    pub create_time: Option<i64>,
    pub update_date: Option<String>,
    pub update_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateChatSessionParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

pub type UpdateChatSessionParams = CreateChatSessionParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListChatSessionsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub orderby: Option<OrderBy>,
    pub desc: Option<bool>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub user_id: Option<String>,
}

/// Body of `POST /api/v1/chats/{chat_id}/completions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ChatConverseParams {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ChatConverseParams {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }

    pub fn in_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn streaming(mut self, stream: bool) -> Self {
        self.stream = Some(stream);
        self
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ReferenceChunk {
    pub id: String,
    pub content: Option<String>,
    pub document_id: Option<String>,
    pub document_name: Option<String>,
    pub dataset_id: Option<String>,
    pub image_id: Option<String>,
    pub similarity: Option<f64>,
    pub vector_similarity: Option<f64>,
    pub term_similarity: Option<f64>,
    pub positions: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ConverseReference {
    pub total: u64,
    pub chunks: Vec<ReferenceChunk>,
    pub doc_aggs: Vec<super::retrieval::DocAggregate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ChatConverseResponse {
    pub answer: String,
    pub reference: Option<ConverseReference>,
    pub prompt: Option<String>,
    pub audio_binary: Option<Value>,
    pub id: Option<String>,
    pub session_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
