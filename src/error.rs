//! Error types produced by the record service.
//!
//! | Error | Category | Typical HTTP status |
//! |-------|----------|---------------------|
//! | [`InvalidFormat`](RegistryError::InvalidFormat) | Validation | 400 |
//! | [`NotFound`](RegistryError::NotFound) | Lookup | 404 |
//! | [`InvalidToken`](RegistryError::InvalidToken) | Credential | 400 |

use thiserror::Error;

/// Errors returned by [`RecordService`](crate::RecordService) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The identifier does not have exactly 11 digits.
    #[error("Formato de CPF inválido. Use 11 dígitos.")]
    InvalidFormat,

    /// No record exists for the (normalized) identifier.
    #[error("Usuário com CPF {cpf} não encontrado.")]
    NotFound { cpf: String },

    /// The submitted access token does not match.
    #[error("Token inválido fornecido.")]
    InvalidToken,
}

impl RegistryError {
    pub fn not_found(cpf: impl Into<String>) -> Self {
        RegistryError::NotFound { cpf: cpf.into() }
    }
}
