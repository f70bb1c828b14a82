//! Connection configuration models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::errors::AppError;

/// Supported database engines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// PostgreSQL.
    Postgres,
    /// Oracle.
    Oracle,
    /// MariaDB.
    MariaDB,
    /// MySQL.
    MySQL,
    /// SQLite database file.
    SQLite,
    /// Microsoft SQL Server.
    MSSQL,
}

impl DbType {
    /// Returns the default port for this database type.
    pub fn default_port(&self) -> Option<u16> {
        match self {
            DbType::Postgres => Some(5432),
            DbType::Oracle => Some(1521),
            DbType::MariaDB | DbType::MySQL => Some(3306),
            DbType::SQLite => None,
            DbType::MSSQL => Some(1433),
        }
    }
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DbType::Postgres => "postgres",
            DbType::Oracle => "oracle",
            DbType::MariaDB => "mariadb",
            DbType::MySQL => "mysql",
            DbType::SQLite => "sqlite",
            DbType::MSSQL => "mssql",
        };
        f.write_str(name)
    }
}

impl FromStr for DbType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbType::Postgres),
            "oracle" => Ok(DbType::Oracle),
            "mariadb" => Ok(DbType::MariaDB),
            "mysql" => Ok(DbType::MySQL),
            "sqlite" => Ok(DbType::SQLite),
            "mssql" | "sqlserver" => Ok(DbType::MSSQL),
            other => Err(AppError::UnsupportedDatabaseType(other.to_string())),
        }
    }
}

/// Full connection configuration (stored internally).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConnectionConfig {
    /// Unique connection identifier.
    pub id: String,
    /// Connection display name.
    pub name: String,
    /// Database type.
    pub db_type: DbType,
    /// Database host (for network databases).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Database port (for network databases).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Database username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Database password (not serialized in responses).
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
    /// Database name, Oracle service name or SQLite file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Optional connection string, e.g. `postgres://user@host:5432/db`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conn_string: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// Request body for creating a new connection.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateConnectionRequest {
    /// Connection display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Database type.
    pub db_type: DbType,
    /// Database host.
    pub host: Option<String>,
    /// Database port (uses default if not specified).
    pub port: Option<u16>,
    /// Database username.
    pub username: Option<String>,
    /// Database password.
    pub password: Option<String>,
    /// Database name, Oracle service name or SQLite file path.
    pub database: Option<String>,
    /// Connection string; host, port, user and database found in it win.
    #[validate(length(max = 1024))]
    pub conn_string: Option<String>,
}

impl CreateConnectionRequest {
    /// Converts the request into a ConnectionConfig.
    pub fn into_config(self, id: String, created_at: String) -> ConnectionConfig {
        ConnectionConfig {
            id,
            name: self.name,
            db_type: self.db_type,
            host: self.host,
            port: self.port.or_else(|| self.db_type.default_port()),
            username: self.username,
            password: self.password,
            database: self.database,
            conn_string: self.conn_string.filter(|s| !s.trim().is_empty()),
            created_at,
        }
    }
}

/// Connection item for API responses (excludes sensitive data).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConnectionItem {
    pub id: String,
    pub name: String,
    pub db_type: DbType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    pub created_at: String,
}

impl From<ConnectionConfig> for ConnectionItem {
    fn from(config: ConnectionConfig) -> Self {
        Self {
            id: config.id,
            name: config.name,
            db_type: config.db_type,
            host: config.host,
            port: config.port,
            username: config.username,
            database: config.database,
            created_at: config.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ports() {
        assert_eq!(DbType::Postgres.default_port(), Some(5432));
        assert_eq!(DbType::Oracle.default_port(), Some(1521));
        assert_eq!(DbType::MariaDB.default_port(), Some(3306));
        assert_eq!(DbType::SQLite.default_port(), None);
        assert_eq!(DbType::MSSQL.default_port(), Some(1433));
    }

    #[test]
    fn test_db_type_round_trips_through_display() {
        for db in [
            DbType::Postgres,
            DbType::Oracle,
            DbType::MariaDB,
            DbType::MySQL,
            DbType::SQLite,
            DbType::MSSQL,
        ] {
            assert_eq!(db.to_string().parse::<DbType>().unwrap(), db);
        }
        assert!("redis".parse::<DbType>().is_err());
    }

    #[test]
    fn test_into_config_fills_default_port() {
        let req = CreateConnectionRequest {
            name: "local".into(),
            db_type: DbType::Oracle,
            host: Some("db".into()),
            port: None,
            username: Some("scott".into()),
            password: None,
            database: None,
            conn_string: Some("  ".into()),
        };
        let config = req.into_config("id".into(), "now".into());
        assert_eq!(config.port, Some(1521));
        assert!(config.conn_string.is_none());
    }
}
