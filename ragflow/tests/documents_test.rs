mod common;

use std::io::Write;

use common::{authorized, ok, ok_empty, setup};
use pretty_assertions::assert_eq;
use ragflow::models::{
    AddChunkParams, ChunkMethod, ListChunksParams, ListDocumentsParams, ParserConfig,
    ReprocessOptions, UpdateChunkParams, UpdateDocumentParams, UploadFile,
};
use ragflow::RagFlowError;
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header_regex, method, path, query_param,
};
use wiremock::Mock;

#[tokio::test]
async fn test_upload_sends_one_file_part_per_file() {
    let (server, client) = setup().await;

    authorized(Mock::given(method("POST")))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file"; filename="a.txt""#))
        .and(body_string_contains(r#"name="file"; filename="b.md""#))
        .and(body_string_contains(r#"name="chunk_method""#))
        .and(body_string_contains("alpha contents"))
        .respond_with(ok(json!([
            {"id": "doc-a", "name": "a.txt", "run": "UNSTART"},
            {"id": "doc-b", "name": "b.md", "run": "UNSTART"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let files = vec![
        UploadFile::new("a.txt", b"alpha contents".to_vec()),
        UploadFile::new("b.md", "# beta".as_bytes()),
    ];
    let documents = client
        .documents()
        .upload("ds-1", files, Some(ChunkMethod::Manual))
        .await
        .unwrap();

    let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.md"]);
}

#[tokio::test]
async fn test_upload_path_reads_file_from_disk() {
    let (server, client) = setup().await;

    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("policy.txt");
    let mut file = std::fs::File::create(&file_path).unwrap();
    writeln!(file, "Employees may work remotely on Fridays.").unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .and(body_string_contains(r#"filename="policy.txt""#))
        .and(body_string_contains("work remotely on Fridays"))
        .respond_with(ok(json!([{"id": "doc-1", "name": "policy.txt"}])))
        .expect(1)
        .mount(&server)
        .await;

    let documents = client
        .documents()
        .upload_path("ds-1", &file_path, None)
        .await
        .unwrap();
    assert_eq!(documents[0].id, "doc-1");
}

#[tokio::test]
async fn test_upload_path_missing_file_is_io_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ok_empty())
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let error = client
        .documents()
        .upload_path("ds-1", dir.path().join("nope.pdf"), None)
        .await
        .unwrap_err();
    assert!(matches!(error, RagFlowError::Io(_)));
}

#[tokio::test]
async fn test_list_documents_and_get() {
    let (server, client) = setup().await;

    authorized(Mock::given(method("GET")))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .and(query_param("id", "doc-9"))
        .respond_with(ok(json!({
            "docs": [{"id": "doc-9", "name": "report.pdf", "type": "pdf", "progress": 1.0, "run": "DONE"}],
            "total": 1
        })))
        .mount(&server)
        .await;

    let params = ListDocumentsParams {
        id: Some("doc-9".to_string()),
        ..Default::default()
    };
    let list = client.documents().list("ds-1", &params).await.unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.docs[0].doc_type.as_deref(), Some("pdf"));

    let document = client.documents().get("ds-1", "doc-9").await.unwrap();
    assert_eq!(document.run.as_deref(), Some("DONE"));
}

#[tokio::test]
async fn test_get_document_missing_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .respond_with(ok(json!({"docs": [], "total": 0})))
        .mount(&server)
        .await;

    let error = client.documents().get("ds-1", "doc-x").await.unwrap_err();
    assert!(matches!(error, RagFlowError::NotFound(_)));
}

#[tokio::test]
async fn test_update_and_delete_documents() {
    let (server, client) = setup().await;

    authorized(Mock::given(method("PUT")))
        .and(path("/api/v1/datasets/ds-1/documents/doc-1"))
        .and(body_json(json!({"name": "renamed.pdf", "chunk_method": "paper"})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    authorized(Mock::given(method("DELETE")))
        .and(path("/api/v1/datasets/ds-1/documents"))
        .and(body_json(json!({"ids": ["doc-1"]})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    let update = UpdateDocumentParams {
        name: Some("renamed.pdf".to_string()),
        chunk_method: Some(ChunkMethod::Paper),
        ..Default::default()
    };
    client.documents().update("ds-1", "doc-1", &update).await.unwrap();
    client
        .documents()
        .delete("ds-1", &["doc-1".to_string()])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_parse_and_stop_parsing() {
    let (server, client) = setup().await;
    let ids = vec!["doc-1".to_string(), "doc-2".to_string()];

    authorized(Mock::given(method("POST")))
        .and(path("/api/v1/datasets/ds-1/chunks"))
        .and(body_json(json!({"document_ids": ["doc-1", "doc-2"]})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    authorized(Mock::given(method("DELETE")))
        .and(path("/api/v1/datasets/ds-1/chunks"))
        .and(body_json(json!({"document_ids": ["doc-1", "doc-2"]})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    client.documents().parse("ds-1", &ids).await.unwrap();
    client.documents().stop_parsing("ds-1", &ids).await.unwrap();
}

#[tokio::test]
async fn test_reprocess_and_status() {
    let (server, client) = setup().await;

    authorized(Mock::given(method("POST")))
        .and(path("/api/v1/datasets/ds-1/documents/doc-1/reprocess"))
        .and(body_json(json!({
            "chunk_method": "naive",
            "parser_config": {"chunk_token_num": 256}
        })))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    authorized(Mock::given(method("GET")))
        .and(path("/api/v1/datasets/ds-1/documents/doc-1/status"))
        .respond_with(ok(json!({"id": "doc-1", "name": "a.pdf", "progress": 0.5, "run": "RUNNING"})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ReprocessOptions {
        chunk_method: Some(ChunkMethod::Naive),
        parser_config: Some(ParserConfig {
            chunk_token_num: Some(256),
            ..Default::default()
        }),
    };
    client
        .documents()
        .reprocess("ds-1", "doc-1", &options)
        .await
        .unwrap();

    let status = client.documents().status("ds-1", "doc-1").await.unwrap();
    assert_eq!(status.progress, 0.5);
    assert_eq!(status.run.as_deref(), Some("RUNNING"));
}

#[tokio::test]
async fn test_chunk_list_add_update_delete() {
    let (server, client) = setup().await;
    let base = "/api/v1/datasets/ds-1/documents/doc-1/chunks";

    authorized(Mock::given(method("GET")))
        .and(path(base))
        .and(query_param("keywords", "refund"))
        .respond_with(ok(json!({
            "chunks": [{"id": "c-1", "content": "Refunds take 5 days.", "important_keywords": ["refund"]}],
            "doc": {"id": "doc-1", "name": "faq.md"},
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    authorized(Mock::given(method("POST")))
        .and(path(base))
        .and(body_json(json!({"content": "Shipping is free.", "important_keywords": ["shipping"]})))
        .respond_with(ok(json!({"chunk": {"id": "c-2", "content": "Shipping is free."}})))
        .expect(1)
        .mount(&server)
        .await;

    authorized(Mock::given(method("PUT")))
        .and(path(format!("{base}/c-2")))
        .and(body_json(json!({"available": false})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    authorized(Mock::given(method("POST")))
        .and(path(format!("{base}/delete")))
        .and(body_json(json!({"ids": ["c-1", "c-2"]})))
        .respond_with(ok_empty())
        .expect(1)
        .mount(&server)
        .await;

    let chunks = client.chunks();

    let params = ListChunksParams {
        keywords: Some("refund".to_string()),
        ..Default::default()
    };
    let list = chunks.list("ds-1", "doc-1", &params).await.unwrap();
    assert_eq!(list.total, 1);
    assert_eq!(list.chunks[0].important_keywords, vec!["refund".to_string()]);
    assert_eq!(list.doc.map(|d| d.name), Some("faq.md".to_string()));

    let added = chunks
        .add(
            "ds-1",
            "doc-1",
            &AddChunkParams {
                important_keywords: Some(vec!["shipping".to_string()]),
                ..AddChunkParams::new("Shipping is free.")
            },
        )
        .await
        .unwrap();
    assert_eq!(added.id, "c-2");

    let update = UpdateChunkParams {
        available: Some(false),
        ..Default::default()
    };
    chunks.update("ds-1", "doc-1", "c-2", &update).await.unwrap();

    chunks
        .delete("ds-1", "doc-1", &["c-1".to_string(), "c-2".to_string()])
        .await
        .unwrap();
}
