use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ChatCompletion, ChatCompletionParams};
use crate::stream::EventStream;

use super::{decode, deliver, into_events, EventCallback};

/// OpenAI-compatible chat completions served by a chat assistant.
#[derive(Clone, Copy)]
pub struct Chat<'a> {
    http: &'a HttpClient,
}

fn completions_path(chat_id: &str) -> String {
    format!("/api/v1/chats_openai/{chat_id}/chat/completions")
}

impl<'a> Chat<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Creates a completion.
    ///
    /// With `params.stream` set and a callback given, every streamed chunk is
    /// passed to `on_event` and `Ok(None)` is returned once the stream ends.
    /// Otherwise the request is sent as-is and the completion is returned.
    pub async fn create_completion(
        &self,
        chat_id: &str,
        params: &ChatCompletionParams,
        on_event: Option<EventCallback<'_>>,
    ) -> Result<Option<ChatCompletion>> {
        let path = completions_path(chat_id);

        match on_event {
            Some(on_event) if params.is_streaming() => {
                let bytes = self.http.post_stream(&path, params).await?;
                deliver(bytes, on_event).await?;
                Ok(None)
            }
            _ => {
                let data = self.http.post(&path, params).await?;
                decode(data).map(Some)
            }
        }
    }

    /// Streams the completion chunks. `stream` is forced on.
    pub async fn create_completion_stream(
        &self,
        chat_id: &str,
        params: &ChatCompletionParams,
    ) -> Result<EventStream> {
        let params = params.clone().streaming(true);
        let bytes = self
            .http
            .post_stream(&completions_path(chat_id), &params)
            .await?;
        Ok(into_events(bytes))
    }
}
