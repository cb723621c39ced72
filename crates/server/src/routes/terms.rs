use crate::error::ServerResult;
use crate::routes::ValidatedJson;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use cadastro::Cpf;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /valida-termo`
///
/// `cpf` must be exactly 11 digits with no mask; anything else is rejected
/// with 422 before the store is touched.
#[derive(Debug, Deserialize)]
pub struct TermsAcceptanceRequest {
    pub cpf: Cpf,
    #[serde(rename = "aceitou")]
    pub accepted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TermsLinkResponse {
    pub link_termos: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Link to the terms-of-use document
pub async fn terms_link(State(state): State<Arc<ServerState>>) -> Json<TermsLinkResponse> {
    Json(TermsLinkResponse {
        link_termos: state.service.terms_link().to_string(),
    })
}

/// Record whether a registered CPF accepted the terms
pub async fn accept_terms(
    State(state): State<Arc<ServerState>>,
    ValidatedJson(request): ValidatedJson<TermsAcceptanceRequest>,
) -> ServerResult<Json<StatusResponse>> {
    state.service.update_terms(&request.cpf, request.accepted)?;
    Ok(Json(StatusResponse {
        status: "OK".to_string(),
    }))
}
