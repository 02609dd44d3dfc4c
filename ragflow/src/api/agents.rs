use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    Agent, AgentConverseParams, AgentConverseResponse, AgentSession, CreateAgentSessionParams,
    IdsBody, ListAgentSessionsParams, ListAgentsParams,
};
use crate::stream::EventStream;

use super::{decode, decode_or_default, deliver, into_events, EventCallback};

const AGENTS_PATH: &str = "/api/v1/agents";

#[derive(Clone, Copy)]
pub struct Agents<'a> {
    http: &'a HttpClient,
}

fn sessions_path(agent_id: &str) -> String {
    format!("{AGENTS_PATH}/{agent_id}/sessions")
}

fn converse_path(agent_id: &str) -> String {
    format!("{AGENTS_PATH}/{agent_id}/completions")
}

impl<'a> Agents<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(&self, params: &ListAgentsParams) -> Result<Vec<Agent>> {
        let data = self.http.get(AGENTS_PATH, params).await?;
        decode_or_default(data)
    }

    pub async fn create_session(
        &self,
        agent_id: &str,
        params: &CreateAgentSessionParams,
    ) -> Result<AgentSession> {
        let data = self.http.post(&sessions_path(agent_id), params).await?;
        decode(data)
    }

    pub async fn list_sessions(
        &self,
        agent_id: &str,
        params: &ListAgentSessionsParams,
    ) -> Result<Vec<AgentSession>> {
        let data = self.http.get(&sessions_path(agent_id), params).await?;
        decode_or_default(data)
    }

    pub async fn delete_sessions(&self, agent_id: &str, session_ids: &[String]) -> Result<()> {
        self.http
            .delete(&sessions_path(agent_id), &IdsBody { ids: session_ids })
            .await?;
        Ok(())
    }

    /// Runs the agent. Streams through `on_event` and returns `Ok(None)` when
    /// `params.stream` is set and a callback is given; otherwise sends
    /// `stream: false` and returns the final answer.
    pub async fn converse(
        &self,
        agent_id: &str,
        params: &AgentConverseParams,
        on_event: Option<EventCallback<'_>>,
    ) -> Result<Option<AgentConverseResponse>> {
        let path = converse_path(agent_id);

        match on_event {
            Some(on_event) if params.is_streaming() => {
                let bytes = self.http.post_stream(&path, params).await?;
                deliver(bytes, on_event).await?;
                Ok(None)
            }
            _ => {
                let params = params.clone().streaming(false);
                let data = self.http.post(&path, &params).await?;
                decode_or_default(data).map(Some)
            }
        }
    }

    pub async fn converse_stream(
        &self,
        agent_id: &str,
        params: &AgentConverseParams,
    ) -> Result<EventStream> {
        let params = params.clone().streaming(true);
        let bytes = self
            .http
            .post_stream(&converse_path(agent_id), &params)
            .await?;
        Ok(into_events(bytes))
    }
}
