//! Runs against a real RAGFlow server. Needs `RAGFLOW_API_URL` and
//! `RAGFLOW_API_KEY` (a `.env` file works):
//!
//! ```text
//! cargo test -p ragflow --test live_test -- --ignored
//! ```

mod common;

use ragflow::models::{CreateDatasetParams, ListDatasetsParams, RetrievalParams, UploadFile};
use ragflow::RagFlowClient;

fn live_client() -> RagFlowClient {
    dotenvy::dotenv().ok();
    common::init_tracing();
    RagFlowClient::from_env().expect("RAGFLOW_API_URL and RAGFLOW_API_KEY must be set")
}

#[tokio::test]
#[ignore]
async fn test_live_dataset_lifecycle() {
    let client = live_client();
    let name = format!("ragflow-rs-live-{}", std::process::id());

    let dataset = client
        .datasets()
        .create(&CreateDatasetParams::new(&name))
        .await
        .unwrap();

    let fetched = client.datasets().get(&dataset.id).await.unwrap();
    assert_eq!(fetched.name, name);

    let documents = client
        .documents()
        .upload(
            &dataset.id,
            vec![UploadFile::new(
                "live.txt",
                b"RAGFlow is an open-source RAG engine.".to_vec(),
            )],
            None,
        )
        .await
        .unwrap();
    assert_eq!(documents.len(), 1);

    let ids: Vec<String> = documents.into_iter().map(|d| d.id).collect();
    client.documents().parse(&dataset.id, &ids).await.unwrap();

    let retrieval = client
        .retrieval()
        .retrieve(&RetrievalParams::new("What is RAGFlow?").with_datasets([dataset.id.clone()]))
        .await;
    assert!(retrieval.is_ok(), "retrieval failed: {retrieval:?}");

    client.datasets().delete(&[dataset.id]).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_live_list_datasets() {
    let client = live_client();
    let datasets = client
        .datasets()
        .list(&ListDatasetsParams {
            page_size: Some(5),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(datasets.len() <= 5);
}
