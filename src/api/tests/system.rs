use super::*;

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _store) = create_test_router();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_taxonomy_endpoint() {
    let (app, _store) = create_test_router();

    let response = get(&app, "/taxonomy").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["categories"].as_array().unwrap().len(), 4);
    assert_eq!(json["subjects"].as_array().unwrap().len(), 3);
    assert_eq!(json["yearLevels"][0]["value"], "bsc_first_year");
    assert_eq!(json["categories"][2]["value"], "past_paper");
}

#[tokio::test]
async fn test_openapi_endpoint() {
    let (app, _store) = create_test_router();

    let response = get(&app, "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert!(json["paths"]["/materials/{id}"].is_object());
}

#[tokio::test]
async fn test_openapi_served_alongside_swagger_document() {
    // Default config enables Swagger UI; both documents must be routable
    let (app, _store) = create_test_router();

    let response = get(&app, "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let plain = json_body(response).await;

    let response = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let swagger = json_body(response).await;

    assert_eq!(plain["info"]["title"], swagger["info"]["title"]);
    assert_eq!(plain["paths"], swagger["paths"]);
}

#[tokio::test]
async fn test_swagger_ui_toggle() {
    let (app, _store) = create_test_router();
    let response = get(&app, "/swagger-ui/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut config = Config::default();
    config.server.api.swagger_ui = false;
    let (app, _store) = create_test_router_with(config);
    let response = get(&app, "/swagger-ui/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The plain document stays available without Swagger UI
    let response = get(&app, "/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let response = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
