//! Driver abstraction used by the adapters.
//!
//! [`SqlxDriver`] wraps one lazily created sqlx pool per adapter and decodes
//! result rows into [`DataTable`]s of JSON cells. Engines without a registry
//! driver in this stack get [`UnsupportedDriver`].

use std::time::Duration;

use async_trait::async_trait;
use common::errors::{AppError, AppResult};
use common::models::DbType;
use futures::TryStreamExt;
use serde_json::Value;
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::postgres::{types::Oid, PgDatabaseError, PgErrorPosition, PgPoolOptions, PgRow};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::types::{BigDecimal, Uuid};
use sqlx::{Column, Executor, MySqlPool, PgPool, Row, SqlitePool, ValueRef};
use tokio::sync::RwLock;

use crate::data_table::DataTable;

/// Statement execution surface shared by every engine.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Establishes the connection. Calling it twice is a no-op.
    async fn open(&self) -> AppResult<()>;

    async fn close(&self) -> AppResult<()>;

    /// Runs a statement and returns all rows.
    async fn query(&self, sql: &str) -> AppResult<DataTable>;

    /// Runs a statement and returns at most `block_size` rows.
    async fn query_block(&self, sql: &str, block_size: usize) -> AppResult<DataTable>;

    /// First column of the first row, NULL when there are no rows.
    async fn execute_scalar(&self, sql: &str) -> AppResult<Value>;

    /// Runs a statement and returns the number of affected rows.
    async fn execute(&self, sql: &str) -> AppResult<u64>;

    /// Aborts in-flight work. Pools are closed, the next call reconnects.
    async fn cancel(&self) -> AppResult<()>;
}

/// Pool sizing for target databases.
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Connection pool wrapper for the sqlx-backed engines.
#[derive(Clone)]
enum DatabasePool {
    MySql(MySqlPool),
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

/// sqlx engines reachable by [`SqlxDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlxEngine {
    MySql,
    Postgres,
    Sqlite,
}

impl SqlxEngine {
    pub fn for_db_type(db_type: DbType) -> Option<Self> {
        match db_type {
            DbType::MySQL | DbType::MariaDB => Some(SqlxEngine::MySql),
            DbType::Postgres => Some(SqlxEngine::Postgres),
            DbType::SQLite => Some(SqlxEngine::Sqlite),
            DbType::Oracle | DbType::MSSQL => None,
        }
    }
}

/// Lazily connected sqlx pool.
pub struct SqlxDriver {
    engine: SqlxEngine,
    url: String,
    settings: PoolSettings,
    pool: RwLock<Option<DatabasePool>>,
}

impl SqlxDriver {
    pub fn new(engine: SqlxEngine, url: impl Into<String>, settings: PoolSettings) -> Self {
        Self {
            engine,
            url: url.into(),
            settings,
            pool: RwLock::new(None),
        }
    }

    /// `sqlite:` url for a database file. `mode=rwc` creates missing files.
    pub fn sqlite_url(path: &str) -> String {
        format!("sqlite:{}?mode=rwc", path)
    }

    async fn create_pool(&self) -> AppResult<DatabasePool> {
        let timeout = self.settings.connect_timeout;
        let max_connections = self.settings.max_connections;

        let pool = match self.engine {
            SqlxEngine::MySql => DatabasePool::MySql(
                MySqlPoolOptions::new()
                    .max_connections(max_connections)
                    .acquire_timeout(timeout)
                    .connect(&self.url)
                    .await
                    .map_err(|e| AppError::DatabaseConnection(e.to_string()))?,
            ),
            SqlxEngine::Postgres => DatabasePool::Postgres(
                PgPoolOptions::new()
                    .max_connections(max_connections)
                    .acquire_timeout(timeout)
                    .connect(&self.url)
                    .await
                    .map_err(|e| AppError::DatabaseConnection(e.to_string()))?,
            ),
            // 单文件数据库只保留一个连接
            SqlxEngine::Sqlite => DatabasePool::Sqlite(
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .acquire_timeout(timeout)
                    .connect(&self.url)
                    .await
                    .map_err(|e| AppError::DatabaseConnection(e.to_string()))?,
            ),
        };
        tracing::debug!(engine = ?self.engine, "连接池已创建");
        Ok(pool)
    }

    async fn pool(&self) -> AppResult<DatabasePool> {
        if let Some(pool) = self.pool.read().await.as_ref() {
            return Ok(pool.clone());
        }
        let mut slot = self.pool.write().await;
        if let Some(pool) = slot.as_ref() {
            return Ok(pool.clone());
        }
        let pool = self.create_pool().await?;
        *slot = Some(pool.clone());
        Ok(pool)
    }

    async fn fetch(&self, sql: &str, limit: Option<usize>) -> AppResult<DataTable> {
        let limit = limit.unwrap_or(usize::MAX);
        match self.pool().await? {
            DatabasePool::MySql(pool) => {
                let rows: Vec<MySqlRow> = take_rows(sqlx::query(sql).fetch(&pool), limit)
                    .await
                    .map_err(|e| query_error(sql, e))?;
                let columns = match rows.first() {
                    Some(row) => column_names(row),
                    None => describe_columns(&pool, sql).await,
                };
                build_table(columns, rows.iter().map(mysql_values))
            }
            DatabasePool::Postgres(pool) => {
                let rows: Vec<PgRow> = take_rows(sqlx::query(sql).fetch(&pool), limit)
                    .await
                    .map_err(|e| query_error(sql, e))?;
                let columns = match rows.first() {
                    Some(row) => column_names(row),
                    None => describe_columns(&pool, sql).await,
                };
                build_table(columns, rows.iter().map(pg_values))
            }
            DatabasePool::Sqlite(pool) => {
                let rows: Vec<SqliteRow> = take_rows(sqlx::query(sql).fetch(&pool), limit)
                    .await
                    .map_err(|e| query_error(sql, e))?;
                let columns = match rows.first() {
                    Some(row) => column_names(row),
                    None => describe_columns(&pool, sql).await,
                };
                build_table(columns, rows.iter().map(sqlite_values))
            }
        }
    }
}

#[async_trait]
impl Driver for SqlxDriver {
    async fn open(&self) -> AppResult<()> {
        self.pool().await.map(|_| ())
    }

    async fn close(&self) -> AppResult<()> {
        if let Some(pool) = self.pool.write().await.take() {
            match pool {
                DatabasePool::MySql(p) => p.close().await,
                DatabasePool::Postgres(p) => p.close().await,
                DatabasePool::Sqlite(p) => p.close().await,
            }
        }
        Ok(())
    }

    async fn query(&self, sql: &str) -> AppResult<DataTable> {
        self.fetch(sql, None).await
    }

    async fn query_block(&self, sql: &str, block_size: usize) -> AppResult<DataTable> {
        self.fetch(sql, Some(block_size)).await
    }

    async fn execute_scalar(&self, sql: &str) -> AppResult<Value> {
        let table = self.fetch(sql, Some(1)).await?;
        Ok(table
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or(Value::Null))
    }

    async fn execute(&self, sql: &str) -> AppResult<u64> {
        let affected = match self.pool().await? {
            DatabasePool::MySql(pool) => {
                pool.execute(sql).await.map_err(|e| query_error(sql, e))?.rows_affected()
            }
            DatabasePool::Postgres(pool) => {
                pool.execute(sql).await.map_err(|e| query_error(sql, e))?.rows_affected()
            }
            DatabasePool::Sqlite(pool) => {
                pool.execute(sql).await.map_err(|e| query_error(sql, e))?.rows_affected()
            }
        };
        Ok(affected)
    }

    async fn cancel(&self) -> AppResult<()> {
        tracing::debug!(engine = ?self.engine, "取消执行，关闭连接池");
        self.close().await
    }
}

/// Driver for engines that have no sqlx backend.
pub struct UnsupportedDriver {
    engine: DbType,
}

impl UnsupportedDriver {
    pub fn new(engine: DbType) -> Self {
        Self { engine }
    }

    fn unsupported<T>(&self) -> AppResult<T> {
        Err(AppError::UnsupportedDatabaseType(format!(
            "no driver available for {}",
            self.engine
        )))
    }
}

#[async_trait]
impl Driver for UnsupportedDriver {
    async fn open(&self) -> AppResult<()> {
        self.unsupported()
    }

    async fn close(&self) -> AppResult<()> {
        Ok(())
    }

    async fn query(&self, _sql: &str) -> AppResult<DataTable> {
        self.unsupported()
    }

    async fn query_block(&self, _sql: &str, _block_size: usize) -> AppResult<DataTable> {
        self.unsupported()
    }

    async fn execute_scalar(&self, _sql: &str) -> AppResult<Value> {
        self.unsupported()
    }

    async fn execute(&self, _sql: &str) -> AppResult<u64> {
        self.unsupported()
    }

    async fn cancel(&self) -> AppResult<()> {
        Ok(())
    }
}

fn query_error(sql: &str, err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db) => {
            let position = db
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(|pg| match pg.position() {
                    Some(PgErrorPosition::Original(pos)) => Some(pos),
                    _ => None,
                });
            match position {
                Some(pos) => AppError::DatabaseQuery(with_line_marker(db.message(), sql, pos)),
                None => AppError::DatabaseQuery(db.message().to_string()),
            }
        }
        other => AppError::from(other),
    }
}

/// psql-style `LINE n:` excerpt with a caret under the 1-based character `pos`.
fn with_line_marker(message: &str, sql: &str, pos: usize) -> String {
    let before: String = sql.chars().take(pos.saturating_sub(1)).collect();
    let line_no = before.matches('\n').count() + 1;
    let col = before.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0);
    let line = sql.lines().nth(line_no - 1).unwrap_or("");
    let prefix = format!("LINE {}: ", line_no);
    format!(
        "{}\n{}{}\n{}^",
        message,
        prefix,
        line,
        " ".repeat(prefix.len() + col)
    )
}

/// Collects at most `n` rows of a result stream.
async fn take_rows<T, S>(stream: S, n: usize) -> Result<Vec<T>, sqlx::Error>
where
    S: futures::Stream<Item = Result<T, sqlx::Error>>,
{
    let mut stream = std::pin::pin!(stream);
    let mut out = Vec::new();
    while out.len() < n {
        match stream.try_next().await? {
            Some(item) => out.push(item),
            None => break,
        }
    }
    Ok(out)
}

fn column_names<R: Row>(row: &R) -> Vec<String> {
    row.columns().iter().map(|c| c.name().to_string()).collect()
}

/// Header of a statement that returned no rows.
async fn describe_columns<'p, E>(executor: E, sql: &'p str) -> Vec<String>
where
    E: Executor<'p>,
{
    match executor.describe(sql).await {
        Ok(describe) => describe.columns().iter().map(|c| c.name().to_string()).collect(),
        Err(_) => Vec::new(),
    }
}

fn build_table<I>(columns: Vec<String>, rows: I) -> AppResult<DataTable>
where
    I: Iterator<Item = Vec<Value>>,
{
    let mut table = DataTable::with_columns(columns);
    for row in rows {
        table.add_row(row)?;
    }
    Ok(table)
}

/// Tries each Rust type in order until sqlx accepts the column type.
macro_rules! try_decode {
    ($row:expr, $idx:expr; $($ty:ty => $conv:expr),+ $(,)?) => {{
        $(
            if let Ok(v) = $row.try_get::<Option<$ty>, _>($idx) {
                return v.map($conv).unwrap_or(Value::Null);
            }
        )+
    }};
}

fn float(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn text<T: ToString>(v: T) -> Value {
    Value::String(v.to_string())
}

fn pg_cell(row: &PgRow, idx: usize) -> Value {
    try_decode!(row, idx;
        bool => Value::from,
        i16 => Value::from,
        i32 => Value::from,
        i64 => Value::from,
        f32 => |v: f32| float(v as f64),
        f64 => float,
        String => Value::String,
        i8 => |v: i8| text(v as u8 as char),
        Oid => |v: Oid| Value::from(v.0),
        Vec<String> => |v: Vec<String>| Value::from(v),
        Vec<i16> => |v: Vec<i16>| Value::from(v),
        chrono::DateTime<chrono::Utc> => text,
        chrono::NaiveDateTime => text,
        chrono::NaiveDate => text,
        chrono::NaiveTime => text,
        BigDecimal => text,
        Uuid => text,
        serde_json::Value => |v| v,
        Vec<u8> => |v: Vec<u8>| Value::String(String::from_utf8_lossy(&v).into_owned()),
    );
    // 枚举、域等其余类型按原始文本返回
    match row.try_get_raw(idx) {
        Ok(raw) if raw.is_null() => Value::Null,
        Ok(raw) => match raw.as_str() {
            Ok(s) => Value::String(s.to_string()),
            Err(e) => {
                tracing::debug!(column = idx, error = %e, "无法解码的 PostgreSQL 列，返回 NULL");
                Value::Null
            }
        },
        Err(_) => Value::Null,
    }
}

fn mysql_cell(row: &MySqlRow, idx: usize) -> Value {
    try_decode!(row, idx;
        i64 => Value::from,
        u64 => Value::from,
        i32 => Value::from,
        u32 => Value::from,
        i16 => Value::from,
        u16 => Value::from,
        i8 => Value::from,
        u8 => Value::from,
        f64 => float,
        f32 => |v: f32| float(v as f64),
        String => Value::String,
        chrono::NaiveDateTime => text,
        chrono::NaiveDate => text,
        chrono::NaiveTime => text,
        chrono::DateTime<chrono::Utc> => text,
        BigDecimal => text,
        serde_json::Value => |v| v,
        Vec<u8> => |v: Vec<u8>| Value::String(String::from_utf8_lossy(&v).into_owned()),
    );
    // 其余类型以文本形式传输 等类型以文本形式传输
    match row.try_get_unchecked::<Option<String>, _>(idx) {
        Ok(v) => v.map(Value::String).unwrap_or(Value::Null),
        Err(_) => Value::Null,
    }
}

fn sqlite_cell(row: &SqliteRow, idx: usize) -> Value {
    try_decode!(row, idx;
        i64 => Value::from,
        f64 => float,
        String => Value::String,
        Vec<u8> => |v: Vec<u8>| Value::String(String::from_utf8_lossy(&v).into_owned()),
    );
    Value::Null
}

fn pg_values(row: &PgRow) -> Vec<Value> {
    (0..row.len()).map(|i| pg_cell(row, i)).collect()
}

fn mysql_values(row: &MySqlRow) -> Vec<Value> {
    (0..row.len()).map(|i| mysql_cell(row, i)).collect()
}

fn sqlite_values(row: &SqliteRow) -> Vec<Value> {
    (0..row.len()).map(|i| sqlite_cell(row, i)).collect()
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted driver: records statements and replays canned tables.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct ScriptedDriver {
        responses: Mutex<VecDeque<AppResult<DataTable>>>,
        pub statements: Mutex<Vec<String>>,
        pub cancelled: Mutex<bool>,
    }

    impl ScriptedDriver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, table: DataTable) -> &Self {
            self.responses.lock().unwrap().push_back(Ok(table));
            self
        }

        pub fn push_err(&self, message: &str) -> &Self {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(AppError::DatabaseQuery(message.to_string())));
            self
        }

        pub fn sql(&self, idx: usize) -> String {
            self.statements.lock().unwrap()[idx].clone()
        }

        pub fn last_sql(&self) -> String {
            self.statements
                .lock()
                .unwrap()
                .last()
                .cloned()
                .unwrap_or_default()
        }

        fn next(&self, sql: &str) -> AppResult<DataTable> {
            self.statements.lock().unwrap().push(sql.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(DataTable::new()))
        }
    }

    #[async_trait]
    impl Driver for ScriptedDriver {
        async fn open(&self) -> AppResult<()> {
            Ok(())
        }

        async fn close(&self) -> AppResult<()> {
            Ok(())
        }

        async fn query(&self, sql: &str) -> AppResult<DataTable> {
            self.next(sql)
        }

        async fn query_block(&self, sql: &str, block_size: usize) -> AppResult<DataTable> {
            let mut table = self.next(sql)?;
            table.rows.truncate(block_size);
            Ok(table)
        }

        async fn execute_scalar(&self, sql: &str) -> AppResult<Value> {
            let table = self.next(sql)?;
            Ok(table
                .rows
                .into_iter()
                .next()
                .and_then(|r| r.into_iter().next())
                .unwrap_or(Value::Null))
        }

        async fn execute(&self, sql: &str) -> AppResult<u64> {
            self.next(sql).map(|t| t.len() as u64)
        }

        async fn cancel(&self) -> AppResult<()> {
            *self.cancelled.lock().unwrap() = true;
            Ok(())
        }
    }

    /// One-column or multi-column table from string literals.
    pub fn table(columns: &[&str], rows: &[&[&str]]) -> DataTable {
        let mut t = DataTable::with_columns(columns.iter().copied());
        for row in rows {
            t.add_row(row.iter().map(|v| Value::String(v.to_string())).collect())
                .unwrap();
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_sqlite_driver_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("t.db");
        let driver = SqlxDriver::new(
            SqlxEngine::Sqlite,
            SqlxDriver::sqlite_url(path.to_str().unwrap()),
            PoolSettings::default(),
        );

        driver
            .execute("create table t (id integer primary key, name text, score real)")
            .await
            .unwrap();
        let inserted = driver
            .execute("insert into t (name, score) values ('a', 1.5), ('b', null), ('c', 3)")
            .await
            .unwrap();
        assert_eq!(inserted, 3);

        let table = driver.query("select id, name, score from t order by id").await.unwrap();
        assert_eq!(table.columns, vec!["id", "name", "score"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0][0], Value::from(1));
        assert_eq!(table.rows[1][2], Value::Null);

        let block = driver.query_block("select * from t", 2).await.unwrap();
        assert_eq!(block.len(), 2);

        let count = driver.execute_scalar("select count(*) from t").await.unwrap();
        assert_eq!(count, Value::from(3));

        driver.cancel().await.unwrap();
        // reconnects lazily after cancel
        let again = driver.execute_scalar("select name from t where id = 2").await.unwrap();
        assert_eq!(again, Value::from("b"));
    }

    #[tokio::test]
    async fn test_sqlite_empty_result_keeps_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("e.db");
        let driver = SqlxDriver::new(
            SqlxEngine::Sqlite,
            SqlxDriver::sqlite_url(path.to_str().unwrap()),
            PoolSettings::default(),
        );
        driver.execute("create table e (a text, b text)").await.unwrap();
        let table = driver.query("select a, b from e").await.unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(driver.execute_scalar("select a from e").await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_sqlite_error_message_passes_through() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("x.db");
        let driver = SqlxDriver::new(
            SqlxEngine::Sqlite,
            SqlxDriver::sqlite_url(path.to_str().unwrap()),
            PoolSettings::default(),
        );
        let err = driver.query("selec 1").await.unwrap_err();
        assert!(err.to_string().contains("near \"selec\""), "{}", err);
    }

    /// Needs a reachable server: `PG_TEST_URL=postgres://... cargo test -- --ignored`.
    #[tokio::test]
    #[ignore = "requires PG_TEST_URL"]
    async fn test_postgres_numeric_and_uuid_are_text() {
        let Ok(url) = std::env::var("PG_TEST_URL") else {
            return;
        };
        let driver = SqlxDriver::new(SqlxEngine::Postgres, url, PoolSettings::default());
        let table = driver
            .query(
                "select 12345678901234567890.125::numeric as n, \
                 'a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11'::uuid as u, \
                 null::numeric as z",
            )
            .await
            .unwrap();
        assert_eq!(table.rows[0][0], Value::from("12345678901234567890.125"));
        assert_eq!(table.rows[0][1], Value::from("a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11"));
        assert_eq!(table.rows[0][2], Value::Null);
    }

    #[test]
    fn test_line_marker() {
        let sql = "select 1\nfrom tabl x";
        // position 15 is the "t" of "tabl"
        let msg = with_line_marker("relation \"tabl\" does not exist", sql, 15);
        assert_eq!(
            msg,
            "relation \"tabl\" does not exist\nLINE 2: from tabl x\n             ^"
        );
    }

    #[tokio::test]
    async fn test_unsupported_driver() {
        let driver = UnsupportedDriver::new(DbType::Oracle);
        let err = driver.query("select 1 from dual").await.unwrap_err();
        assert!(matches!(err, AppError::UnsupportedDatabaseType(_)));
        assert!(driver.close().await.is_ok());
    }
}
