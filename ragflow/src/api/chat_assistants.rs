use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{
    ChatAssistant, ChatConverseParams, ChatConverseResponse, ChatSession,
    CreateChatAssistantParams, CreateChatSessionParams, IdsBody, ListChatAssistantsParams,
    ListChatSessionsParams, UpdateChatAssistantParams, UpdateChatSessionParams,
};
use crate::stream::EventStream;

use super::{decode, decode_or_default, deliver, into_events, EventCallback};

const CHATS_PATH: &str = "/api/v1/chats";

/// Chat assistants, their sessions, and conversations with them.
#[derive(Clone, Copy)]
pub struct ChatAssistants<'a> {
    http: &'a HttpClient,
}

fn sessions_path(chat_id: &str) -> String {
    format!("{CHATS_PATH}/{chat_id}/sessions")
}

fn converse_path(chat_id: &str) -> String {
    format!("{CHATS_PATH}/{chat_id}/completions")
}

impl<'a> ChatAssistants<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn create(&self, params: &CreateChatAssistantParams) -> Result<ChatAssistant> {
        let data = self.http.post(CHATS_PATH, params).await?;
        decode(data)
    }

    pub async fn update(&self, chat_id: &str, params: &UpdateChatAssistantParams) -> Result<()> {
        self.http
            .put(&format!("{CHATS_PATH}/{chat_id}"), params)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, ids: &[String]) -> Result<()> {
        self.http.delete(CHATS_PATH, &IdsBody { ids }).await?;
        Ok(())
    }

    pub async fn list(&self, params: &ListChatAssistantsParams) -> Result<Vec<ChatAssistant>> {
        let data = self.http.get(CHATS_PATH, params).await?;
        decode_or_default(data)
    }

    pub async fn create_session(
        &self,
        chat_id: &str,
        params: &CreateChatSessionParams,
    ) -> Result<ChatSession> {
        let data = self.http.post(&sessions_path(chat_id), params).await?;
        decode(data)
    }

    pub async fn update_session(
        &self,
        chat_id: &str,
        session_id: &str,
        params: &UpdateChatSessionParams,
    ) -> Result<()> {
        let path = format!("{}/{session_id}", sessions_path(chat_id));
        self.http.put(&path, params).await?;
        Ok(())
    }

    pub async fn list_sessions(
        &self,
        chat_id: &str,
        params: &ListChatSessionsParams,
    ) -> Result<Vec<ChatSession>> {
        let data = self.http.get(&sessions_path(chat_id), params).await?;
        decode_or_default(data)
    }

    pub async fn delete_sessions(&self, chat_id: &str, session_ids: &[String]) -> Result<()> {
        self.http
            .delete(&sessions_path(chat_id), &IdsBody { ids: session_ids })
            .await?;
        Ok(())
    }

    /// Asks the assistant a question.
    ///
    /// When `params.stream` is set and `on_event` is given, each streamed
    /// frame (`{"code": 0, "data": {...}}`, ending with `"data": true`) is
    /// passed to the callback and `Ok(None)` is returned. Otherwise the body
    /// is sent with `stream: false` and the full answer is returned.
    pub async fn converse(
        &self,
        chat_id: &str,
        params: &ChatConverseParams,
        on_event: Option<EventCallback<'_>>,
    ) -> Result<Option<ChatConverseResponse>> {
        let path = converse_path(chat_id);

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

    /// Streams the conversation frames; see [`ConverseFrame`](crate::stream::ConverseFrame)
    /// for typed access. `stream` is forced on.
    pub async fn converse_stream(
        &self,
        chat_id: &str,
        params: &ChatConverseParams,
    ) -> Result<EventStream> {
        let params = params.clone().streaming(true);
        let bytes = self.http.post_stream(&converse_path(chat_id), &params).await?;
        Ok(into_events(bytes))
    }
}
