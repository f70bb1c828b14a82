//! Service configuration loaded from the environment.

use std::env;

/// Runtime configuration shared by the services.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service name used in logs and response metadata.
    pub service_name: String,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Connect / acquire timeout for target database pools.
    pub connect_timeout_secs: u64,
    /// Max pool size for target database pools.
    pub max_connections: u32,
    /// Metadata store (saved connections, command history).
    pub meta_database_url: String,
    /// Page size for command history listings.
    pub history_page_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "explorer-service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8081,
            connect_timeout_secs: 10,
            max_connections: 5,
            meta_database_url: "sqlite:explorer.db?mode=rwc".to_string(),
            history_page_size: 20,
        }
    }
}

impl AppConfig {
    /// 从环境变量加载配置，缺失项使用默认值
    pub fn load_with_service(service_name: &str) -> Self {
        let defaults = Self::default();
        Self {
            service_name: service_name.to_string(),
            host: env::var("SERVER_HOST").unwrap_or(defaults.host),
            port: env_parse("SERVER_PORT").unwrap_or(defaults.port),
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT")
                .unwrap_or(defaults.connect_timeout_secs),
            max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
            meta_database_url: env::var("META_DATABASE_URL")
                .unwrap_or(defaults.meta_database_url),
            history_page_size: env_parse::<u32>("HISTORY_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.history_page_size),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8081);
        assert_eq!(config.history_page_size, 20);
        assert!(config.meta_database_url.starts_with("sqlite:"));
    }
}
