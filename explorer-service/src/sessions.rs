//! Adapter sessions.
//!
//! One [`DatabaseAdapter`] per saved connection, created on first use and kept
//! until the connection is deleted. The adapter owns its lazily opened pool.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use common::config::AppConfig;
use common::errors::AppResult;
use common::models::ConnectionConfig;
use dialect::driver::PoolSettings;
use dialect::{ConnectionParams, DatabaseAdapter};
use tokio::sync::RwLock;

pub struct SessionManager {
    settings: PoolSettings,
    sessions: RwLock<HashMap<String, Arc<dyn DatabaseAdapter>>>,
}

impl SessionManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            settings: PoolSettings {
                max_connections: config.max_connections,
                connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            },
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Cached adapter for the connection, building it from `config` when absent.
    pub async fn get_or_create(
        &self,
        config: &ConnectionConfig,
    ) -> AppResult<Arc<dyn DatabaseAdapter>> {
        if let Some(adapter) = self.sessions.read().await.get(&config.id) {
            return Ok(adapter.clone());
        }

        let mut sessions = self.sessions.write().await;
        // 获取写锁期间可能已被其他请求创建
        if let Some(adapter) = sessions.get(&config.id) {
            return Ok(adapter.clone());
        }
        let adapter = dialect::instantiate(
            config.db_type,
            &ConnectionParams::from(config),
            self.settings,
            None,
        )?;
        tracing::info!(id = %config.id, db_type = %config.db_type, "会话已创建");
        sessions.insert(config.id.clone(), adapter.clone());
        Ok(adapter)
    }

    /// Drops the session and closes its pool.
    pub async fn remove(&self, id: &str) {
        let removed = self.sessions.write().await.remove(id);
        if let Some(adapter) = removed {
            if let Err(e) = adapter.connection().close().await {
                tracing::warn!(id = %id, error = %e, "关闭会话连接失败");
            }
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::DbType;

    fn config(id: &str, db_type: DbType) -> ConnectionConfig {
        ConnectionConfig {
            id: id.into(),
            name: id.into(),
            db_type,
            host: Some("localhost".into()),
            port: None,
            username: Some("app".into()),
            password: None,
            database: Some("shop".into()),
            conn_string: None,
            created_at: "now".into(),
        }
    }

    #[tokio::test]
    async fn test_adapter_is_cached_per_connection() {
        let manager = SessionManager::new(&AppConfig::default());
        let first = manager.get_or_create(&config("a", DbType::MySQL)).await.unwrap();
        let again = manager.get_or_create(&config("a", DbType::MySQL)).await.unwrap();
        assert!(Arc::ptr_eq(&first, &again));

        let other = manager.get_or_create(&config("b", DbType::Oracle)).await.unwrap();
        assert_eq!(other.dialect(), dialect::Dialect::Oracle);
        assert_eq!(manager.count().await, 2);

        manager.remove("a").await;
        assert_eq!(manager.count().await, 1);
    }
}
