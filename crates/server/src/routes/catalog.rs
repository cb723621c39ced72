use crate::error::ServerResult;
use crate::routes::ValidatedJson;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of `POST /validar-token`
#[derive(Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

// Keep the submitted token out of debug output.
impl std::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(rename = "valido")]
    pub valid: bool,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogLinkResponse {
    pub link_catalogo: String,
}

/// Check the access token
///
/// 200 `{"valido": true, "status": "Token correto"}` on a match, 400 otherwise.
pub async fn validate_token(
    State(state): State<Arc<ServerState>>,
    ValidatedJson(request): ValidatedJson<TokenRequest>,
) -> ServerResult<Json<TokenResponse>> {
    let status = state.service.check_token(&request.token)?;
    Ok(Json(TokenResponse {
        valid: status.valid,
        status: status.status,
    }))
}

/// Link to the catalog, handed out after a successful token check
pub async fn catalog_link(State(state): State<Arc<ServerState>>) -> Json<CatalogLinkResponse> {
    Json(CatalogLinkResponse {
        link_catalogo: state.service.catalog_link().to_string(),
    })
}
