//! Record storage.
//!
//! [`RecordStore`] is the single synchronization point for record state. The
//! only implementation, [`InMemoryStore`], lives for the lifetime of the
//! process and is never persisted.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RegistryError;
use crate::identifier::Cpf;

/// One registration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub full_name: String,
    pub email: String,
    pub accepted_terms: bool,
    /// Text-encoded number, passed through as stored.
    pub score: String,
}

impl Record {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        accepted_terms: bool,
        score: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            accepted_terms,
            score: score.into(),
        }
    }
}

/// Storage seam for records keyed by CPF.
///
/// Implementations must make every method safe to call concurrently.
pub trait RecordStore: Send + Sync {
    fn get(&self, cpf: &Cpf) -> Option<Record>;

    /// Overwrite the terms flag of an existing record.
    fn set_accepted_terms(&self, cpf: &Cpf, accepted: bool) -> Result<(), RegistryError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The three records every fresh store starts with.
pub fn seed_records() -> Vec<(Cpf, Record)> {
    [
        (
            "79349171988",
            Record::new("Fulano de Tal Silva", "fulano.silva@email.com", false, "4500"),
        ),
        (
            "89540115604",
            Record::new("Ciclana Souza", "c.souza@email.net", true, "2100"),
        ),
        (
            "21874323518",
            Record::new("Beltrano Oliveira", "beltrano@mail.org", false, "230"),
        ),
    ]
    .into_iter()
    .filter_map(|(cpf, record)| Cpf::parse_strict(cpf).ok().map(|cpf| (cpf, record)))
    .collect()
}

/// Process-lifetime store backed by a sharded concurrent map.
///
/// Concurrent writes to the same CPF are serialized per entry; the last one
/// wins.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<Cpf, Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with [`seed_records`].
    pub fn seeded() -> Self {
        let store = Self::new();
        for (cpf, record) in seed_records() {
            store.insert(cpf, record);
        }
        debug!(records = store.records.len(), "seeded in-memory store");
        store
    }

    pub fn insert(&self, cpf: Cpf, record: Record) -> Option<Record> {
        self.records.insert(cpf, record)
    }
}

impl RecordStore for InMemoryStore {
    fn get(&self, cpf: &Cpf) -> Option<Record> {
        self.records.get(cpf).map(|entry| entry.value().clone())
    }

    fn set_accepted_terms(&self, cpf: &Cpf, accepted: bool) -> Result<(), RegistryError> {
        match self.records.get_mut(cpf) {
            Some(mut entry) => {
                entry.accepted_terms = accepted;
                Ok(())
            }
            None => Err(RegistryError::not_found(cpf.as_str())),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
