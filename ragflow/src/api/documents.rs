use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::error::{RagFlowError, Result};
use crate::http::HttpClient;
use crate::models::{
    ChunkMethod, Document, DocumentIdsBody, DocumentList, IdsBody, ListDocumentsParams,
    ReprocessOptions, UpdateDocumentParams, UploadFile,
};

use super::{decode, decode_or_default};

/// Documents inside one dataset: upload, metadata and parsing control.
#[derive(Clone, Copy)]
pub struct Documents<'a> {
    http: &'a HttpClient,
}

fn documents_path(dataset_id: &str) -> String {
    format!("/api/v1/datasets/{dataset_id}/documents")
}

fn parsing_path(dataset_id: &str) -> String {
    format!("/api/v1/datasets/{dataset_id}/chunks")
}

fn upload_form(files: Vec<UploadFile>, chunk_method: Option<ChunkMethod>) -> Form {
    let form = files.into_iter().fold(Form::new(), |form, file| {
        form.part("file", Part::bytes(file.content).file_name(file.file_name))
    });

    match chunk_method {
        Some(method) => form.text("chunk_method", method.as_str()),
        None => form,
    }
}

impl<'a> Documents<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Uploads files as a single multipart request, one `file` part each.
    pub async fn upload(
        &self,
        dataset_id: &str,
        files: Vec<UploadFile>,
        chunk_method: Option<ChunkMethod>,
    ) -> Result<Vec<Document>> {
        if files.is_empty() {
            return Err(RagFlowError::Validation(
                "At least one file is required for upload".to_string(),
            ));
        }

        let count = files.len();
        let form = upload_form(files, chunk_method);
        let data = self.http.post_form(&documents_path(dataset_id), form).await?;

        tracing::debug!(dataset_id, count, "Uploaded documents");
        decode_or_default(data)
    }

    /// Reads a file from disk and uploads it under its own file name.
    pub async fn upload_path(
        &self,
        dataset_id: &str,
        path: impl AsRef<Path>,
        chunk_method: Option<ChunkMethod>,
    ) -> Result<Vec<Document>> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                RagFlowError::Validation(format!("Path has no file name: {}", path.display()))
            })?
            .to_string();

        let content = tokio::fs::read(path).await?;
        self.upload(dataset_id, vec![UploadFile::new(file_name, content)], chunk_method)
            .await
    }

    pub async fn list(&self, dataset_id: &str, params: &ListDocumentsParams) -> Result<DocumentList> {
        let data = self.http.get(&documents_path(dataset_id), params).await?;
        decode_or_default(data)
    }

    pub async fn get(&self, dataset_id: &str, document_id: &str) -> Result<Document> {
        let params = ListDocumentsParams {
            id: Some(document_id.to_string()),
            ..Default::default()
        };

        self.list(dataset_id, &params)
            .await?
            .docs
            .into_iter()
            .next()
            .ok_or_else(|| {
                RagFlowError::NotFound(format!(
                    "Document with ID {document_id} not found in dataset {dataset_id}"
                ))
            })
    }

    pub async fn update(
        &self,
        dataset_id: &str,
        document_id: &str,
        params: &UpdateDocumentParams,
    ) -> Result<()> {
        let path = format!("{}/{document_id}", documents_path(dataset_id));
        self.http.put(&path, params).await?;
        Ok(())
    }

    pub async fn delete(&self, dataset_id: &str, document_ids: &[String]) -> Result<()> {
        self.http
            .delete(&documents_path(dataset_id), &IdsBody { ids: document_ids })
            .await?;
        Ok(())
    }

    /// Queues documents for parsing (chunking and embedding).
    pub async fn parse(&self, dataset_id: &str, document_ids: &[String]) -> Result<()> {
        self.http
            .post(&parsing_path(dataset_id), &DocumentIdsBody { document_ids })
            .await?;
        Ok(())
    }

    pub async fn stop_parsing(&self, dataset_id: &str, document_ids: &[String]) -> Result<()> {
        self.http
            .delete(&parsing_path(dataset_id), &DocumentIdsBody { document_ids })
            .await?;
        Ok(())
    }

    pub async fn reprocess(
        &self,
        dataset_id: &str,
        document_id: &str,
        options: &ReprocessOptions,
    ) -> Result<()> {
        let path = format!("{}/{document_id}/reprocess", documents_path(dataset_id));
        self.http.post(&path, options).await?;
        Ok(())
    }

    /// Current parsing state of one document.
    pub async fn status(&self, dataset_id: &str, document_id: &str) -> Result<Document> {
        let path = format!("{}/{document_id}/status", documents_path(dataset_id));
        let data = self.http.get(&path, &()).await?;
        decode(data)
    }
}
