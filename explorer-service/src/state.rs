//! Application state for explorer service.

use std::sync::Arc;

use common::config::AppConfig;
use common::errors::AppResult;

use crate::sessions::SessionManager;
use crate::store::MetaStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<MetaStore>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    /// Opens the metadata store named in the config.
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let store = MetaStore::connect(&config.meta_database_url).await?;
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: AppConfig, store: MetaStore) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new(&config)),
            store: Arc::new(store),
            config,
        }
    }
}
