mod common;

use axum::http::StatusCode;
use common::ApiContext;
use httpmock::Method::GET;
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_find_vets_by_coordinates(ctx: &mut ApiContext) {
    ctx.upstream
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(json!([
                { "lat": "-8.20", "lon": "-34.90", "name": "Far Clinic", "display_name": "Far Clinic, Recife" },
                { "lat": "-8.05", "lon": "-34.90", "name": "Near Clinic", "display_name": "Near Clinic, Recife" }
            ]));
        })
        .await;

    let response = ctx.server.get("/vets?lat=-8.05&lon=-34.9").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"][0]["name"], "Near Clinic");
    assert_eq!(body["data"][1]["name"], "Far Clinic");
    assert!(body["message"].is_null());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_find_vets_empty(ctx: &mut ApiContext) {
    ctx.upstream
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(json!([]));
        })
        .await;

    let response = ctx.server.get("/vets?city=Nowhere").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["data"], json!([]));
    assert!(body["message"].is_string());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_find_vets_upstream_failure(ctx: &mut ApiContext) {
    ctx.upstream
        .mock_async(|when, then| {
            when.method(GET).path("/search");
            then.status(502);
        })
        .await;

    let response = ctx.server.get("/vets?city=Recife").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_find_vets_requires_location(ctx: &mut ApiContext) {
    let response = ctx.server.get("/vets").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx.server.get("/vets?lat=-8.05&lon=-34.9&strategy=ai").await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
