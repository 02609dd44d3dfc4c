use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Extra, OrderBy};

/// An agent (canvas). The DSL graph is kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Agent {
    pub id: String,
    pub title: String,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub canvas_type: Option<String>,
    pub user_id: Option<String>,
    pub dsl: Option<Value>,
    pub create_date: Option<String>,
    pub create_time: Option<i64>,
    pub update_date: Option<String>,
    pub update_time: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListAgentsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub orderby: Option<OrderBy>,
    pub desc: Option<bool>,
    pub name: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AgentMessage {
    pub content: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AgentSession {
    pub id: String,
    pub agent_id: Option<String>,
    pub message: Vec<AgentMessage>,
    pub source: Option<String>,
    pub user_id: Option<String>,
    pub dsl: Option<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `POST /api/v1/agents/{agent_id}/sessions`.
///
/// The agent's Begin component may declare its own inputs; put them in
/// `inputs` and they are sent as top-level keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateAgentSessionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub inputs: Extra,
}

impl CreateAgentSessionParams {
    pub fn input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListAgentSessionsParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub orderby: Option<OrderBy>,
    pub desc: Option<bool>,
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub dsl: Option<bool>,
}

/// Body of `POST /api/v1/agents/{agent_id}/completions`. Begin-component
/// inputs go in `inputs` and are flattened into the body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AgentConverseParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_dsl: Option<bool>,
    #[serde(flatten)]
    pub inputs: Extra,
}

impl AgentConverseParams {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
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

    pub fn input(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(key.into(), value.into());
        self
    }

    pub fn is_streaming(&self) -> bool {
        self.stream.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AgentParam {
    pub key: String,
    pub name: Option<String>,
    pub optional: bool,
    #[serde(rename = "type")]
    pub param_type: Option<String>,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AgentConverseResponse {
    pub answer: String,
    pub reference: Option<Value>,
    pub id: Option<String>,
    pub session_id: Option<String>,
    pub param: Vec<AgentParam>,
    #[serde(flatten)]
    pub extra: Extra,
}
