#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use clap::Parser;
use fidofeed_api::{
    application::http::server::http_server::{api_routes, state},
    args::Args,
};
use httpmock::MockServer;
use test_context::AsyncTestContext;

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// API over in-memory storage, with Gemini and Nominatim served by a mock server.
pub struct ApiContext {
    pub server: TestServer,
    pub upstream: MockServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let upstream = MockServer::start_async().await;
        let base_url = upstream.base_url();

        let args = Args::parse_from([
            "fidofeed",
            "--storage",
            "memory",
            "--gemini-api-key",
            "test-key",
            "--gemini-model",
            "gemini-test",
            "--gemini-base-url",
            base_url.as_str(),
            "--nominatim-base-url",
            base_url.as_str(),
            "--llm-timeout-seconds",
            "5",
            "--geocoding-timeout-seconds",
            "5",
        ]);

        let app_state = state(Arc::new(args)).await.expect("state");
        let router = api_routes(app_state).expect("router");
        let server = TestServer::new(router).expect("test server");

        Self { server, upstream }
    }
}

pub fn device_header(device_id: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-device-id"),
        HeaderValue::from_static(device_id),
    )
}

/// Gemini response body wrapping `text` as the model output.
pub fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}
