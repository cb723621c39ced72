use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::identifier::{self, Cpf};
use crate::store::{InMemoryStore, RecordStore};
use crate::token::TokenValidator;

/// Public view of a record. The score is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub full_name: String,
    pub email: String,
    pub accepted_terms: bool,
}

/// Outcome of a successful token check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStatus {
    pub valid: bool,
    pub status: String,
}

/// Facade over the record store, the token validator and the static links.
///
/// Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct RecordService {
    store: Arc<dyn RecordStore>,
    tokens: TokenValidator,
    terms_link: String,
    catalog_link: String,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>, config: &RegistryConfig) -> Self {
        Self {
            store,
            tokens: TokenValidator::new(config.access_token.clone()),
            terms_link: config.terms_link.clone(),
            catalog_link: config.catalog_link.clone(),
        }
    }

    /// Service over a freshly seeded [`InMemoryStore`].
    pub fn in_memory(config: &RegistryConfig) -> Self {
        Self::new(Arc::new(InMemoryStore::seeded()), config)
    }

    /// Basic-format-only CPF validity. Never fails.
    ///
    /// Whether the CPF exists in the store does not affect the answer.
    pub fn validate_cpf(&self, raw: &str) -> bool {
        identifier::is_valid_basic_format(raw)
    }

    /// Look up a possibly masked CPF.
    pub fn lookup(&self, raw: &str) -> Result<RecordSummary, RegistryError> {
        let cpf = Cpf::parse(raw)?;
        let record = self
            .store
            .get(&cpf)
            .ok_or_else(|| RegistryError::not_found(cpf.as_str()))?;
        Ok(RecordSummary {
            full_name: record.full_name,
            email: record.email,
            accepted_terms: record.accepted_terms,
        })
    }

    /// Record whether `cpf` accepted the terms of use.
    pub fn update_terms(&self, cpf: &Cpf, accepted: bool) -> Result<(), RegistryError> {
        self.store.set_accepted_terms(cpf, accepted).map_err(|err| {
            warn!(cpf = %cpf, "terms update for unknown CPF");
            err
        })?;
        info!(cpf = %cpf, accepted, "terms acceptance updated");
        Ok(())
    }

    pub fn check_token(&self, submitted: &str) -> Result<TokenStatus, RegistryError> {
        // Length only; the submitted value is a credential.
        debug!(token_len = submitted.len(), "token received for validation");
        if self.tokens.verify(submitted) {
            debug!("token accepted");
            Ok(TokenStatus {
                valid: true,
                status: "Token correto".to_string(),
            })
        } else {
            debug!("token rejected");
            Err(RegistryError::InvalidToken)
        }
    }

    pub fn terms_link(&self) -> &str {
        &self.terms_link
    }

    pub fn catalog_link(&self) -> &str {
        info!("catalog link requested");
        &self.catalog_link
    }

    pub fn record_count(&self) -> usize {
        self.store.len()
    }
}

impl std::fmt::Debug for RecordService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordService")
            .field("records", &self.store.len())
            .field("tokens", &self.tokens)
            .field("terms_link", &self.terms_link)
            .field("catalog_link", &self.catalog_link)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;

    fn service() -> RecordService {
        RecordService::in_memory(&RegistryConfig::default())
    }

    #[test]
    fn test_validate_cpf_ignores_store() {
        let svc = service();
        assert!(svc.validate_cpf("79349171988"));
        // unknown but well-formed
        assert!(svc.validate_cpf("12345678900"));
        assert!(!svc.validate_cpf("00000000000"));
        assert!(!svc.validate_cpf("123"));
    }

    #[test]
    fn test_lookup_seeded() {
        let summary = service().lookup("79349171988").unwrap();
        assert_eq!(
            summary,
            RecordSummary {
                full_name: "Fulano de Tal Silva".into(),
                email: "fulano.silva@email.com".into(),
                accepted_terms: false,
            }
        );
    }

    #[test]
    fn test_lookup_masked_input() {
        let summary = service().lookup("895.401.156-04").unwrap();
        assert_eq!(summary.full_name, "Ciclana Souza");
        assert!(summary.accepted_terms);
    }

    #[test]
    fn test_lookup_errors() {
        let svc = service();
        assert_eq!(svc.lookup("1234"), Err(RegistryError::InvalidFormat));
        assert_eq!(
            svc.lookup("000.000.000-01"),
            Err(RegistryError::not_found("00000000001"))
        );
    }

    #[test]
    fn test_update_then_lookup() {
        let svc = service();
        let cpf = Cpf::parse_strict("79349171988").unwrap();

        svc.update_terms(&cpf, true).unwrap();
        assert!(svc.lookup("79349171988").unwrap().accepted_terms);

        // clones share the store
        let other = svc.clone();
        other.update_terms(&cpf, false).unwrap();
        assert!(!svc.lookup("79349171988").unwrap().accepted_terms);
    }

    #[test]
    fn test_update_unknown() {
        let cpf = Cpf::parse_strict("00000000001").unwrap();
        assert_eq!(
            service().update_terms(&cpf, true),
            Err(RegistryError::not_found("00000000001"))
        );
    }

    #[test]
    fn test_check_token() {
        let svc = service();
        let status = svc.check_token("1234").unwrap();
        assert!(status.valid);
        assert_eq!(status.status, "Token correto");
        assert_eq!(svc.check_token("0000"), Err(RegistryError::InvalidToken));
    }

    #[test]
    fn test_configured_links_and_token() {
        let cfg = RegistryConfig {
            access_token: "abcd".into(),
            terms_link: "https://example.com/t.pdf".into(),
            catalog_link: "https://example.com/c".into(),
        };
        let svc = RecordService::in_memory(&cfg);
        assert!(svc.check_token("abcd").is_ok());
        assert!(svc.check_token("1234").is_err());
        assert_eq!(svc.terms_link(), "https://example.com/t.pdf");
        assert_eq!(svc.catalog_link(), "https://example.com/c");
    }

    #[test]
    fn test_custom_store() {
        let store = InMemoryStore::new();
        store.insert(
            Cpf::parse_strict("12345678900").unwrap(),
            Record::new("Teste", "teste@example.com", false, "0"),
        );
        let svc = RecordService::new(Arc::new(store), &RegistryConfig::default());
        assert_eq!(svc.record_count(), 1);
        assert!(svc.lookup("79349171988").is_err());
        assert_eq!(svc.lookup("12345678900").unwrap().full_name, "Teste");
    }
}
