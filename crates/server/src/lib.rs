//! Cadastro Server - HTTP REST API for CPF registration records
//!
//! This crate exposes the `cadastro` record service over HTTP:
//!
//! - **CPF validation**: basic-format check, no check digits
//! - **Registration lookup**: name, email and terms flag for a CPF
//! - **Terms acceptance**: record whether a CPF accepted the terms of use
//! - **Catalog access**: fixed access token check and catalog link
//! - **Health**: liveness/readiness probes and basic metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! No endpoint requires authentication.
//!
//! - `GET /valida-cpf/{cpf}` - `{"valido": bool}`, always 200
//! - `GET /valida-cadastro/{cpf}` - registration data; 400 bad format, 404 unknown
//! - `GET /termos` - terms document link
//! - `POST /valida-termo` - `{"cpf", "aceitou"}`; 422 bad payload, 404 unknown
//! - `POST /validar-token` - `{"token"}`; 400 on mismatch
//! - `GET /acessar-catalogo` - catalog link
//! - `GET /`, `/health`, `/ready`, `/metrics` - service info and probes
//!
//! Errors use the envelope `{"error": {"code": "...", "message": "..."}}`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
