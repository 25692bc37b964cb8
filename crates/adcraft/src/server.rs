use crate::prelude::{eprintln, *};
use adcraft_core::campaign::{ErrorBody, GenerationError, GenerationRequest, SuccessEnvelope};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::campaign::CampaignGenerator;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the campaign generation endpoint over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "ADCRAFT_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "ADCRAFT_HOST", default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", app.host, app.port);

    let config = crate::config::ProviderConfig::from(global.provider);
    if config.credential().is_err() {
        log::warn!(
            "{} is not set; every generation request will fail until it is configured",
            crate::config::API_KEY_ENV
        );
    }

    let generator = Arc::new(CampaignGenerator::from_config(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{addr}");
    if global.verbose {
        eprintln!("adcraft listening on http://{}", addr);
        eprintln!("Generate endpoint: http://{}/generate-campaign", addr);
    }

    axum::serve(listener, router(generator))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Routes with CORS configured for browser callers.
pub fn router(generator: Arc<CampaignGenerator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/generate-campaign", post(generate_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .with_state(generator)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found".to_string())
}

async fn generate_handler(
    State(generator): State<Arc<CampaignGenerator>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            log::warn!("Rejected generation request: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match generator.generate(&request).await {
        Ok(result) => (StatusCode::OK, Json(SuccessEnvelope::new(result))).into_response(),
        Err(err) => {
            log::error!("Error generating campaign: {err}");
            error_response(status_for(&err), err.to_string())
        }
    }
}

fn status_for(err: &GenerationError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}
