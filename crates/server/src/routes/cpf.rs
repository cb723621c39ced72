use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::Json;
use cadastro::RecordSummary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response from `GET /valida-cpf/{cpf}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CpfValidationResponse {
    #[serde(rename = "valido")]
    pub valid: bool,
}

/// Response from `GET /valida-cadastro/{cpf}`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationResponse {
    #[serde(rename = "nome_completo")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "aceitou_termos")]
    pub accepted_terms: bool,
}

impl From<RecordSummary> for RegistrationResponse {
    fn from(summary: RecordSummary) -> Self {
        Self {
            full_name: summary.full_name,
            email: summary.email,
            accepted_terms: summary.accepted_terms,
        }
    }
}

/// Basic-format CPF check
///
/// Always 200. Malformed input, including repeated digits, yields
/// `{"valido": false}`.
pub async fn validate_cpf(
    State(state): State<Arc<ServerState>>,
    Path(cpf): Path<String>,
) -> Json<CpfValidationResponse> {
    Json(CpfValidationResponse {
        valid: state.service.validate_cpf(&cpf),
    })
}

/// Registration data for a CPF
///
/// 400 when the CPF does not have 11 digits after stripping the mask,
/// 404 when it is not registered.
pub async fn get_registration(
    State(state): State<Arc<ServerState>>,
    Path(cpf): Path<String>,
) -> ServerResult<Json<RegistrationResponse>> {
    let summary = state.service.lookup(&cpf)?;
    Ok(Json(summary.into()))
}
