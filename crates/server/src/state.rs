use crate::config::ServerConfig;
use cadastro::{InMemoryStore, RecordService, RecordStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Record service (shared store, token validator, links)
    pub service: RecordService,
}

impl ServerState {
    /// Create new server state over a freshly seeded in-memory store
    pub fn new(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(InMemoryStore::seeded()))
    }

    /// Create server state over a caller-provided store
    pub fn with_store(config: ServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let service = RecordService::new(store, &config.registry);
        Self {
            config: Arc::new(config),
            service,
        }
    }
}

/// Server metadata for the root endpoint
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<&'static str>,
}
