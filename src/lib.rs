//! Cadastro: CPF registration records, terms acceptance and access tokens.
//!
//! This crate holds the domain side of the registration service. The HTTP
//! surface lives in the `cadastro-server` crate and calls into
//! [`RecordService`] for everything it does.
//!
//! ## What we do here
//!
//! - **Validate CPFs** - basic format only: 11 ASCII digits, not all the same.
//!   No check digits are computed. See [`identifier`].
//! - **Look up and update records** - an in-memory [`RecordStore`] seeded at
//!   startup, shared by every request, lost on restart.
//! - **Check an access token** - exact match against one configured value.
//! - **Hand out links** - the terms document and the catalog entry point.
//!
//! ## Example
//!
//! ```
//! use cadastro::{Cpf, RecordService, RegistryConfig, RegistryError};
//!
//! let service = RecordService::in_memory(&RegistryConfig::default());
//!
//! assert!(service.validate_cpf("793.491.719-88"));
//! assert!(!service.validate_cpf("00000000000"));
//!
//! let record = service.lookup("79349171988").unwrap();
//! assert_eq!(record.full_name, "Fulano de Tal Silva");
//! assert!(!record.accepted_terms);
//!
//! let cpf = Cpf::parse_strict("79349171988").unwrap();
//! service.update_terms(&cpf, true).unwrap();
//! assert!(service.lookup("79349171988").unwrap().accepted_terms);
//!
//! assert!(service.check_token("1234").is_ok());
//! assert_eq!(service.check_token("0000"), Err(RegistryError::InvalidToken));
//! ```

pub mod config;
pub mod error;
pub mod identifier;
pub mod service;
pub mod store;
pub mod token;

pub use crate::config::{ConfigError, RegistryConfig, DEFAULT_CATALOG_LINK, DEFAULT_TERMS_LINK};
pub use crate::error::RegistryError;
pub use crate::identifier::{is_valid_basic_format, normalize_digits, Cpf, CPF_LEN};
pub use crate::service::{RecordService, RecordSummary, TokenStatus};
pub use crate::store::{seed_records, InMemoryStore, Record, RecordStore};
pub use crate::token::{TokenValidator, DEFAULT_ACCESS_TOKEN};
