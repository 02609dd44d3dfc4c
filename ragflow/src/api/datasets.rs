use crate::error::{RagFlowError, Result};
use crate::http::HttpClient;
use crate::models::{CreateDatasetParams, Dataset, IdsBody, ListDatasetsParams, UpdateDatasetParams};

use super::{decode, decode_or_default};

const DATASETS_PATH: &str = "/api/v1/datasets";

/// Knowledge-base (dataset) management.
#[derive(Clone, Copy)]
pub struct Datasets<'a> {
    http: &'a HttpClient,
}

impl<'a> Datasets<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn create(&self, params: &CreateDatasetParams) -> Result<Dataset> {
        let data = self.http.post(DATASETS_PATH, params).await?;
        decode(data)
    }

    pub async fn delete(&self, ids: &[String]) -> Result<()> {
        self.http.delete(DATASETS_PATH, &IdsBody { ids }).await?;
        Ok(())
    }

    pub async fn update(&self, dataset_id: &str, params: &UpdateDatasetParams) -> Result<()> {
        self.http
            .put(&format!("{DATASETS_PATH}/{dataset_id}"), params)
            .await?;
        Ok(())
    }

    pub async fn list(&self, params: &ListDatasetsParams) -> Result<Vec<Dataset>> {
        let data = self.http.get(DATASETS_PATH, params).await?;
        decode_or_default(data)
    }

    /// Looks a dataset up by id through the list endpoint.
    pub async fn get(&self, dataset_id: &str) -> Result<Dataset> {
        let params = ListDatasetsParams {
            id: Some(dataset_id.to_string()),
            ..Default::default()
        };

        self.list(&params)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RagFlowError::NotFound(format!("Dataset with ID {dataset_id} not found")))
    }
}
