//! SQL Server 适配器（最小实现）
//!
//! 只提供版本查询与模板；目录浏览走 trait 默认实现，返回不支持。

use std::sync::Arc;

use async_trait::async_trait;
use common::errors::{AppError, AppResult};
use common::models::DbType;
use tokio::sync::Mutex;

use crate::adapter::{
    scalar_text, ActiveParams, Commands, Connection, ConnectionParams, DatabaseAdapter, Features,
};
use crate::driver::{Driver, UnsupportedDriver};
use crate::Dialect;

/// Product year → major version used in documentation links.
const RELEASES: [(&str, &str); 4] = [("2022", "16"), ("2019", "15"), ("2017", "14"), ("2016", "13")];

pub struct MsSqlAdapter {
    active: ActiveParams,
    conn: Connection,
}

impl MsSqlAdapter {
    pub fn new(params: &ConnectionParams, lock: Option<Arc<Mutex<()>>>) -> Self {
        Self::with_driver(params, Arc::new(UnsupportedDriver::new(DbType::MSSQL)), lock)
    }

    pub fn with_driver(
        params: &ConnectionParams,
        driver: Arc<dyn Driver>,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        Self {
            active: params.resolve("1433", ""),
            conn: Connection::new(driver, lock),
        }
    }
}

/// Major version for a `@@VERSION` banner such as `Microsoft SQL Server 2019 (RTM-CU22) ...`.
fn major_from_banner(banner: &str) -> Option<&'static str> {
    RELEASES
        .iter()
        .find(|(year, _)| banner.contains(&format!("SQL Server {}", year)))
        .map(|(_, major)| *major)
}

#[async_trait]
impl DatabaseAdapter for MsSqlAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::MsSql
    }

    fn features(&self) -> Features {
        Features::default()
    }

    fn commands(&self) -> Commands {
        Commands::standard()
    }

    fn active(&self) -> &ActiveParams {
        &self.active
    }

    fn connection(&self) -> &Connection {
        &self.conn
    }

    fn default_schema(&self) -> String {
        self.active.service.clone()
    }

    async fn get_version(&self) -> AppResult<String> {
        let banner = self.conn.execute_scalar("SELECT @@VERSION;").await?;
        Ok(scalar_text(&banner))
    }

    async fn major_version(&self) -> AppResult<String> {
        let banner = self.get_version().await?;
        major_from_banner(&banner)
            .map(String::from)
            .ok_or_else(|| AppError::UnsupportedDatabaseType(format!("SQL Server release: {}", banner)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testing::{table, ScriptedDriver};

    fn adapter() -> (Arc<ScriptedDriver>, MsSqlAdapter) {
        let driver = Arc::new(ScriptedDriver::new());
        let params = ConnectionParams {
            server: "sql.local".into(),
            service: "sales".into(),
            user: "sa".into(),
            ..Default::default()
        };
        (driver.clone(), MsSqlAdapter::with_driver(&params, driver, None))
    }

    #[test]
    fn test_major_from_banner() {
        assert_eq!(
            major_from_banner("Microsoft SQL Server 2019 (RTM-CU22) - 15.0.4322.2 (X64)"),
            Some("15")
        );
        assert_eq!(major_from_banner("Microsoft SQL Server 2022 (RTM)"), Some("16"));
        assert_eq!(major_from_banner("Microsoft SQL Server 2012"), None);
    }

    #[tokio::test]
    async fn test_defaults() {
        let (_, a) = adapter();
        assert_eq!(a.active().port, "1433");
        assert_eq!(a.default_schema(), "sales");
        assert!(a.query_tables(&Default::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_template_renders_major_version() {
        let (driver, a) = adapter();
        let key = crate::template_keys(Dialect::MsSql)
            .iter()
            .copied()
            .find(|k| {
                crate::get_template(Dialect::MsSql, k, None)
                    .map(|t| t.text.contains("$major_version"))
                    .unwrap_or(false)
            })
            .unwrap();
        driver.push(table(&["v"], &[&["Microsoft SQL Server 2017 (RTM) - 14.0.1000.169"]]));
        let rendered = a.template(key).await.unwrap();
        assert!(!rendered.text.contains("$major_version"));
        assert!(driver.sql(0).contains("@@VERSION"));

        // 无法识别的版本：占位符替换为空串
        driver.push(table(&["v"], &[&["Microsoft SQL Server 2008 R2"]]));
        let fallback = a.template(key).await.unwrap();
        assert!(!fallback.text.contains("$major_version"));
    }
}
