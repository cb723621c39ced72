//! Record service configuration.
//!
//! Every field has a default, so an empty section deserializes to
//! [`RegistryConfig::default`]. The server nests this under `registry`:
//!
//! ```toml
//! [registry]
//! access_token = "1234"
//! terms_link = "https://example.com/termos.pdf"
//! catalog_link = "https://example.com/catalogo"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::DEFAULT_ACCESS_TOKEN;

pub const DEFAULT_TERMS_LINK: &str =
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";
pub const DEFAULT_CATALOG_LINK: &str = "https://www.google.com/";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Value `POST /validar-token` accepts.
    #[serde(default = "default_access_token")]
    pub access_token: String,

    /// Terms-of-use document.
    #[serde(default = "default_terms_link")]
    pub terms_link: String,

    /// Catalog entry point, handed out after a token check.
    #[serde(default = "default_catalog_link")]
    pub catalog_link: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            access_token: default_access_token(),
            terms_link: default_terms_link(),
            catalog_link: default_catalog_link(),
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "access_token must not be empty".into(),
            ));
        }
        if self.terms_link.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "terms_link must not be empty".into(),
            ));
        }
        if self.catalog_link.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "catalog_link must not be empty".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("access_token", &"<redacted>")
            .field("terms_link", &self.terms_link)
            .field("catalog_link", &self.catalog_link)
            .finish()
    }
}

fn default_access_token() -> String {
    DEFAULT_ACCESS_TOKEN.to_string()
}

fn default_terms_link() -> String {
    DEFAULT_TERMS_LINK.to_string()
}

fn default_catalog_link() -> String {
    DEFAULT_CATALOG_LINK.to_string()
}
