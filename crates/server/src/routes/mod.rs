//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `cpf`: CPF validation and registration lookup
//! - `terms`: terms document link and terms acceptance
//! - `catalog`: access token check and catalog link
//! - `health`: liveness, readiness and metrics

pub mod catalog;
pub mod cpf;
pub mod health;
pub mod terms;

use crate::error::{ServerError, ServerResult};
use crate::state::ServerMetadata;
use axum::extract::FromRequest;
use axum::response::IntoResponse;
use axum::Json;

/// Paths served by this API, as listed by `GET /`
pub const ENDPOINTS: &[&str] = &[
    "/valida-cpf/{cpf}",
    "/valida-cadastro/{cpf}",
    "/termos",
    "/valida-termo",
    "/validar-token",
    "/acessar-catalogo",
    "/health",
    "/ready",
    "/metrics",
];

/// JSON body extractor whose rejections become 422 [`ServerError::Validation`]
/// responses in the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ValidatedJson<T>(pub T);

/// API name, version and available endpoints
///
/// # Response
///
/// ```json
/// {
///   "name": "API de Validação de Cadastro e Termos",
///   "description": "...",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    let metadata = ServerMetadata {
        name: "API de Validação de Cadastro e Termos",
        description: "API para validar CPF, dados cadastrais e aceite de termos.",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS.to_vec(),
    };

    Ok(Json(serde_json::to_value(metadata)?))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
