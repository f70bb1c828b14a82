use std::sync::Arc;

use common::errors::AppResult;
use common::models::DbType;
use tokio::sync::Mutex;
use tracing::debug;

use crate::adapter::{ConnectionParams, DatabaseAdapter};
use crate::driver::PoolSettings;
use crate::mssql::MsSqlAdapter;
use crate::mysql::{Flavor, MySqlAdapter};
use crate::oracle::OracleAdapter;
use crate::postgres::PostgresAdapter;
use crate::sqlite::SqliteAdapter;

/// Builds the adapter for `db_type`. Nothing connects until the first driver call.
pub fn instantiate(
    db_type: DbType,
    params: &ConnectionParams,
    settings: PoolSettings,
    lock: Option<Arc<Mutex<()>>>,
) -> AppResult<Arc<dyn DatabaseAdapter>> {
    debug!(%db_type, server = %params.server, "创建适配器");
    let adapter: Arc<dyn DatabaseAdapter> = match db_type {
        DbType::Postgres => Arc::new(PostgresAdapter::new(params, settings, lock)),
        DbType::MySQL => Arc::new(MySqlAdapter::new(Flavor::MySql, params, settings, lock)),
        DbType::MariaDB => Arc::new(MySqlAdapter::new(Flavor::MariaDb, params, settings, lock)),
        DbType::SQLite => Arc::new(SqliteAdapter::new(params, settings, lock)),
        DbType::Oracle => Arc::new(OracleAdapter::new(params, lock)),
        DbType::MSSQL => Arc::new(MsSqlAdapter::new(params, lock)),
    };
    Ok(adapter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dialect;

    #[test]
    fn test_dialect_follows_db_type() {
        let params = ConnectionParams {
            server: "h".into(),
            service: "db".into(),
            user: "u".into(),
            ..Default::default()
        };
        for (db_type, dialect) in [
            (DbType::Postgres, Dialect::Postgres),
            (DbType::MySQL, Dialect::MySql),
            (DbType::MariaDB, Dialect::MariaDb),
            (DbType::SQLite, Dialect::Sqlite),
            (DbType::Oracle, Dialect::Oracle),
            (DbType::MSSQL, Dialect::MsSql),
        ] {
            let adapter = instantiate(db_type, &params, PoolSettings::default(), None).unwrap();
            assert_eq!(adapter.dialect(), dialect);
            assert_eq!(Dialect::from(db_type), dialect);
        }
    }

    #[tokio::test]
    async fn test_unreachable_oracle_reports_missing_driver() {
        let adapter =
            instantiate(DbType::Oracle, &ConnectionParams::default(), PoolSettings::default(), None)
                .unwrap();
        assert!(adapter.test_connection().await.contains("no driver available"));
    }
}
