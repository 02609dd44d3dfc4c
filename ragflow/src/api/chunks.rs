use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{AddChunkParams, Chunk, ChunkList, IdsBody, ListChunksParams, UpdateChunkParams};

use super::{decode, decode_or_default};

#[derive(Clone, Copy)]
pub struct Chunks<'a> {
    http: &'a HttpClient,
}

fn chunks_path(dataset_id: &str, document_id: &str) -> String {
    format!("/api/v1/datasets/{dataset_id}/documents/{document_id}/chunks")
}

impl<'a> Chunks<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn list(
        &self,
        dataset_id: &str,
        document_id: &str,
        params: &ListChunksParams,
    ) -> Result<ChunkList> {
        let data = self
            .http
            .get(&chunks_path(dataset_id, document_id), params)
            .await?;
        decode_or_default(data)
    }

    pub async fn add(
        &self,
        dataset_id: &str,
        document_id: &str,
        params: &AddChunkParams,
    ) -> Result<Chunk> {
        let mut data = self
            .http
            .post(&chunks_path(dataset_id, document_id), params)
            .await?;

        // The server wraps the new chunk as `{"chunk": {...}}`.
        if let Some(chunk) = data.get_mut("chunk") {
            return decode(chunk.take());
        }
        decode(data)
    }

    pub async fn update(
        &self,
        dataset_id: &str,
        document_id: &str,
        chunk_id: &str,
        params: &UpdateChunkParams,
    ) -> Result<()> {
        let path = format!("{}/{chunk_id}", chunks_path(dataset_id, document_id));
        self.http.put(&path, params).await?;
        Ok(())
    }

    /// Deletes chunks. This endpoint takes a POST, unlike the other bulk deletes.
    pub async fn delete(&self, dataset_id: &str, document_id: &str, chunk_ids: &[String]) -> Result<()> {
        let path = format!("{}/delete", chunks_path(dataset_id, document_id));
        self.http.post(&path, &IdsBody { ids: chunk_ids }).await?;
        Ok(())
    }
}
