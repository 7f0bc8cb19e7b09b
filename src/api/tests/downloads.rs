use super::*;
use crate::storage::MaterialRepository;

#[tokio::test]
async fn test_record_download_increments() {
    let (app, _store) = create_test_router();

    let response = post_empty(&app, "/materials/3/download").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["id"], 3);
    assert_eq!(json["downloads"], 1);

    let response = post_empty(&app, "/materials/3/download").await;
    assert_eq!(json_body(response).await["downloads"], 2);

    // Persisted in the store
    let response = get(&app, "/materials/3").await;
    assert_eq!(json_body(response).await["downloads"], 2);
}

#[tokio::test]
async fn test_record_download_unknown_id() {
    let (app, _store) = create_test_router();

    let response = post_empty(&app, "/materials/404/download").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(error_code(&json_body(response).await), "not_found");
}

#[tokio::test]
async fn test_record_download_malformed_id() {
    let (app, _store) = create_test_router();

    let response = post_empty(&app, "/materials/three/download").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&json_body(response).await), "malformed_id");
}

#[tokio::test]
async fn test_undecodable_download_ids_get_json_errors() {
    let (app, _store) = create_test_router();

    let response = post_empty(&app, "/materials/%FF/download").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&json_body(response).await), "malformed_id");

    let response = get(&app, "/download/%FF").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&json_body(response).await), "malformed_id");
}

#[tokio::test]
async fn test_concurrent_download_requests_are_all_counted() {
    let (app, store) = create_test_router();

    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { post_empty(&app, "/materials/1/download").await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap().status(), StatusCode::OK);
    }

    let material = store.get_by_id(crate::types::MaterialId(1)).await.unwrap().unwrap();
    assert_eq!(material.downloads, 50);
}

#[tokio::test]
async fn test_start_download() {
    let (app, _store) = create_test_router();

    let response = get(&app, "/download/10").await;
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(
        disposition.starts_with("attachment; filename=\"Quantum-Mechanics---B.Sc.-3rd-Year.pdf\""),
        "unexpected Content-Disposition: {disposition}"
    );

    let json = json_body(response).await;
    assert_eq!(json["message"], "Download started");
    assert_eq!(json["material"]["id"], 10);
    assert_eq!(json["material"]["downloads"], 1);
}

#[tokio::test]
async fn test_start_download_errors() {
    let (app, _store) = create_test_router();

    let response = get(&app, "/download/77").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(&app, "/download/x").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
