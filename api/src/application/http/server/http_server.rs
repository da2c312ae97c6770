use std::sync::{Arc, OnceLock};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderName, HeaderValue, Method,
        header::{ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT},
    },
    routing::get,
};
use axum_prometheus::{PrometheusMetricLayer, metrics_exporter_prometheus::PrometheusHandle};
use larder_core::{application::create_service, domain::common::LarderConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, info_span};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    application::http::{
        assistant::router::assistant_routes,
        health::router::health_routes,
        recipe::router::recipe_routes,
        server::{
            api_entities::response::PROVIDER_FALLBACK_HEADER, app_state::AppState,
            openapi::ApiDoc,
        },
        speech::router::speech_routes,
    },
    args::Args,
};

/// Base64 images arrive inside JSON bodies.
const MAX_BODY_SIZE: usize = 25 * 1024 * 1024;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = LarderConfig::from(args.as_ref().clone());

    if let Some(path) = &config.transcription.credentials_path {
        info!("Google application credentials: {}", path.display());
    }
    if let Some(project) = &config.transcription.project_id {
        info!("Google Cloud project: {}", project);
    }

    let service = create_service(config)?;

    Ok(AppState::new(args, service))
}

fn cors_layer(args: &Args) -> Result<CorsLayer, anyhow::Error> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([PROVIDER_FALLBACK_HEADER]);

    if args.allows_any_origin() {
        debug!("Allowed origins: any");
        return Ok(cors.allow_origin(Any).allow_headers(Any));
    }

    let allowed_origins = args
        .server
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin.trim()))
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    Ok(cors
        .allow_origin(allowed_origins)
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT,
            USER_AGENT,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true))
}

// The Prometheus recorder is process global and can only be installed once.
fn metrics() -> (PrometheusMetricLayer<'static>, PrometheusHandle) {
    static METRICS: OnceLock<(PrometheusMetricLayer<'static>, PrometheusHandle)> =
        OnceLock::new();

    METRICS.get_or_init(PrometheusMetricLayer::pair).clone()
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let cors = cors_layer(&state.args)?;
    let (prometheus_layer, metric_handle) = metrics();
    let openapi = ApiDoc::document();

    let router = axum::Router::new()
        .merge(Scalar::with_url("/scalar", openapi.clone()))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .merge(health_routes())
        .merge(recipe_routes())
        .merge(assistant_routes())
        .merge(speech_routes())
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(trace_layer)
        .layer(cors)
        .layer(prometheus_layer)
        .with_state(state);

    Ok(router)
}
