use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use fidofeed_core::{application::create_service, domain::common::FidoFeedConfig};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::device_middleware::DEVICE_ID_HEADER;
use crate::application::http::breed::router::breed_routes;
use crate::application::http::chat::router::chat_routes;
use crate::application::http::feeding_plan::router::feeding_plan_routes;
use crate::application::http::health::health_routes;
use crate::application::http::pet::router::pet_routes;
use crate::application::http::ration::router::ration_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::vet::router::vet_routes;
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let fidofeed_config = FidoFeedConfig::from(args.as_ref().clone());
    let service = create_service(fidofeed_config).await?;

    Ok(AppState::new(args, service))
}

/// Routes without the metrics layer, shared by the server and the tests.
pub fn api_routes(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin \"{origin}\""))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            HeaderName::from_static(DEVICE_ID_HEADER),
        ]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let router = axum::Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .merge(
            SwaggerUi::new(format!("{}/swagger-ui", root_path))
                .url(api_docs_url.clone(), openapi.clone()),
        )
        .merge(Redoc::with_url(format!("{}/redoc", root_path), openapi))
        .merge(RapiDoc::new(api_docs_url).path(format!("{}/rapidoc", root_path)))
        .merge(breed_routes(state.clone()))
        .merge(ration_routes(state.clone()))
        .merge(feeding_plan_routes(state.clone()))
        .merge(chat_routes(state.clone()))
        .merge(vet_routes(state.clone()))
        .merge(pet_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let root_path = state.args.server.root_path.clone();
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let router = api_routes(state)?
        .route(
            &format!("{}/metrics", root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    Ok(router)
}
