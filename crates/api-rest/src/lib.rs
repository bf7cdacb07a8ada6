//! # API REST
//!
//! HTTP surface for the new-patient intake form.
//!
//! Handles:
//! - form submission: decode, compile the narrative, e-mail it to the office
//! - liveness and OpenAPI documentation
//! - serving the static form page
//!
//! Uses `api-shared` for response bodies and `intake-delivery` for sending.

#![warn(rust_2018_idioms)]

pub mod config;

use std::path::Path;
use std::sync::Arc;

use api_shared::{HealthRes, HealthService, SubmitRes};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::Json,
    routing::{get, post},
    Form, Router,
};
use intake_core::{Narrative, Submission};
use intake_delivery::{DeliveryConfig, NarrativeSender, OutboundMessage};
use tower_http::{cors::CorsLayer, services::ServeDir};
use utoipa::OpenApi;

pub use config::ServerConfig;

/// Largest accepted submission body.
pub const BODY_LIMIT: usize = 1024 * 1024;

/// Configured mail delivery: addresses plus the transport that sends.
#[derive(Clone)]
pub struct Delivery {
    config: Arc<DeliveryConfig>,
    sender: Arc<dyn NarrativeSender>,
}

/// Shared state for every request handler.
///
/// Delivery is optional: a server started without mail settings still serves the form and
/// answers health checks, but refuses submissions.
#[derive(Clone, Default)]
pub struct AppState {
    delivery: Option<Delivery>,
}

impl AppState {
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn configured(config: DeliveryConfig, sender: Arc<dyn NarrativeSender>) -> Self {
        Self {
            delivery: Some(Delivery {
                config: Arc::new(config),
                sender,
            }),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.delivery.is_some()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, submit),
    components(schemas(HealthRes, SubmitRes))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Unmatched paths fall through to static files under `public_dir`.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/submit", post(submit))
        .route("/api-docs/openapi.json", get(openapi))
        .fallback_service(ServeDir::new(public_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Liveness probe.
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post,
    path = "/api/submit",
    responses(
        (status = 200, description = "Form compiled and e-mailed to the office", body = SubmitRes),
        (status = 400, description = "Body could not be decoded", body = SubmitRes),
        (status = 500, description = "Mail not configured or sending failed", body = SubmitRes)
    )
)]
/// Accepts one intake form submission.
///
/// The body may be URL-encoded form data or a JSON object; any other content type is
/// treated as an empty form. The compiled narrative is e-mailed to the office address.
///
/// # Errors
/// Returns `500 Internal Server Error` if:
/// - mail delivery is not configured, or
/// - the mail provider rejects or cannot be reached.
///
/// Returns `400 Bad Request` if the body cannot be decoded.
#[axum::debug_handler]
async fn submit(State(state): State<AppState>, request: Request) -> (StatusCode, Json<SubmitRes>) {
    let Some(delivery) = state.delivery else {
        tracing::error!("Submission rejected: mail delivery is not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SubmitRes::not_configured()),
        );
    };

    let submission = match decode_submission(request).await {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!("Unreadable submission body: {}", e);
            return (StatusCode::BAD_REQUEST, Json(SubmitRes::unreadable()));
        }
    };

    let narrative = Narrative::compile(&submission).to_text();
    let today = chrono::Local::now().date_naive();
    let message = OutboundMessage::compose(&delivery.config, &submission, &narrative, today);

    match delivery.sender.send(&message).await {
        Ok(()) => {
            tracing::info!(fields = submission.len(), "Intake form delivered");
            (StatusCode::OK, Json(SubmitRes::submitted()))
        }
        Err(e) => {
            tracing::error!("Send form error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitRes::send_failed()),
            )
        }
    }
}

#[derive(Debug)]
enum BodyKind {
    UrlEncoded,
    Json,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let essence = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if essence.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
        BodyKind::UrlEncoded
    } else if essence.eq_ignore_ascii_case("application/json") {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

/// Decodes the request body into a submission according to its content type.
async fn decode_submission(request: Request) -> Result<Submission, String> {
    match body_kind(&request) {
        BodyKind::UrlEncoded => {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
                .await
                .map_err(|e| e.body_text())?;
            Ok(Submission::from_form_pairs(pairs))
        }
        BodyKind::Json => {
            let bytes = Bytes::from_request(request, &())
                .await
                .map_err(|e| e.body_text())?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Submission::new());
            }
            serde_json::from_slice(&bytes).map_err(|e| e.to_string())
        }
        BodyKind::Other => Ok(Submission::new()),
    }
}
