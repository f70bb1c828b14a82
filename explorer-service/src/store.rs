//! 元数据存储
//!
//! 已保存的连接与命令历史都放在一个 SQLite 库中，启动时自动建表。

use common::errors::{AppError, AppResult};
use common::models::{
    CommandKind, ConnectionConfig, ConsoleHistoryItem, DbType, HistoryFilter, NewConsoleHistory,
    NewQueryHistory, QueryHistoryItem,
};
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions};
use sqlx::{query::Query, Sqlite};

/// Row from the `connections` table.
#[derive(sqlx::FromRow)]
struct ConnectionRow {
    id: String,
    name: String,
    db_type: String,
    host: Option<String>,
    port: Option<i64>,
    username: Option<String>,
    password: Option<String>,
    database_name: Option<String>,
    conn_string: Option<String>,
    created_at: String,
}

impl ConnectionRow {
    fn into_config(self) -> AppResult<ConnectionConfig> {
        Ok(ConnectionConfig {
            id: self.id,
            name: self.name,
            db_type: self.db_type.parse::<DbType>()?,
            host: self.host,
            port: self.port.and_then(|p| u16::try_from(p).ok()),
            username: self.username,
            password: self.password,
            database: self.database_name,
            conn_string: self.conn_string,
            created_at: self.created_at,
        })
    }
}

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS connections (
        id            TEXT PRIMARY KEY NOT NULL,
        name          TEXT NOT NULL,
        db_type       TEXT NOT NULL,
        host          TEXT,
        port          INTEGER,
        username      TEXT,
        password      TEXT,
        database_name TEXT,
        conn_string   TEXT,
        created_at    TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS query_history (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        connection_id TEXT NOT NULL,
        start_time    TEXT NOT NULL,
        end_time      TEXT NOT NULL,
        duration      TEXT NOT NULL,
        status        TEXT NOT NULL,
        snippet       TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS console_history (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        connection_id TEXT NOT NULL,
        start_time    TEXT NOT NULL,
        snippet       TEXT NOT NULL
    )",
];

/// `where` clause shared by history count, page and delete. Binds: connection id, snippet text, then the bounds present.
fn history_where(filter: &HistoryFilter) -> String {
    // SQLite lower() 只折叠 ASCII，非 ASCII 文本按大小写敏感匹配
    let mut clause =
        String::from(" where connection_id = ? and instr(lower(snippet), lower(?)) > 0");
    if filter.from_bound().is_some() {
        clause.push_str(" and start_time >= ?");
    }
    if filter.to_bound().is_some() {
        clause.push_str(" and start_time <= ?");
    }
    clause
}

fn bind_filter<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    filter: &'q HistoryFilter,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    query = query
        .bind(filter.connection_id.as_str())
        .bind(filter.command_contains.as_str());
    if let Some(from) = filter.from_bound() {
        query = query.bind(from);
    }
    if let Some(to) = filter.to_bound() {
        query = query.bind(to);
    }
    query
}

/// SQLite backed store for connections and command history.
pub struct MetaStore {
    pool: SqlitePool,
}

impl MetaStore {
    /// Opens the store at `url` and makes sure every table exists.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(|e| AppError::DatabaseConnection(format!("元数据库连接失败: {}", e)))?;
        Self::with_pool(pool).await
    }

    pub async fn with_pool(pool: SqlitePool) -> AppResult<Self> {
        let store = Self { pool };
        store.ensure_tables().await?;
        Ok(store)
    }

    async fn ensure_tables(&self) -> AppResult<()> {
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&self.pool).await.map_err(|e| {
                AppError::DatabaseQuery(format!("Failed to create metadata table: {}", e))
            })?;
        }
        tracing::info!("元数据表已就绪");
        Ok(())
    }

    pub async fn list_connections(&self) -> AppResult<Vec<ConnectionConfig>> {
        let rows: Vec<ConnectionRow> =
            sqlx::query_as("SELECT * FROM connections ORDER BY created_at, name")
                .fetch_all(&self.pool)
                .await?;
        rows.into_iter().map(ConnectionRow::into_config).collect()
    }

    pub async fn get_connection(&self, id: &str) -> AppResult<ConnectionConfig> {
        let row: Option<ConnectionRow> = sqlx::query_as("SELECT * FROM connections WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.ok_or_else(|| AppError::ConnectionNotFound(id.to_string()))?
            .into_config()
    }

    pub async fn insert_connection(&self, config: &ConnectionConfig) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO connections (id, name, db_type, host, port, username, password, database_name, conn_string, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&config.id)
        .bind(&config.name)
        .bind(config.db_type.to_string())
        .bind(&config.host)
        .bind(config.port.map(i64::from))
        .bind(&config.username)
        .bind(&config.password)
        .bind(&config.database)
        .bind(&config.conn_string)
        .bind(&config.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseQuery(format!("Failed to save connection: {}", e)))?;
        Ok(())
    }

    /// Removes the connection and its history.
    pub async fn delete_connection(&self, id: &str) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM connections WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if deleted == 0 {
            return Err(AppError::ConnectionNotFound(id.to_string()));
        }
        for kind in [CommandKind::Query, CommandKind::Console] {
            sqlx::query(&format!("DELETE FROM {} WHERE connection_id = ?", kind.table()))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    pub async fn add_query_history(&self, entry: &NewQueryHistory) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO query_history (connection_id, start_time, end_time, duration, status, snippet)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.connection_id)
        .bind(&entry.start_time)
        .bind(&entry.end_time)
        .bind(&entry.duration)
        .bind(&entry.status)
        .bind(&entry.snippet)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn add_console_history(&self, entry: &NewConsoleHistory) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO console_history (connection_id, start_time, snippet) VALUES (?, ?, ?)",
        )
        .bind(&entry.connection_id)
        .bind(&entry.start_time)
        .bind(&entry.snippet)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn count_history(&self, filter: &HistoryFilter) -> AppResult<i64> {
        let sql = format!(
            "SELECT count(*) FROM {}{}",
            filter.command_type.table(),
            history_where(filter)
        );
        let row = bind_filter(sqlx::query(&sql), filter)
            .fetch_one(&self.pool)
            .await?;
        Ok(sqlx::Row::try_get(&row, 0)?)
    }

    /// Newest first, `limit` rows starting at `offset`.
    pub async fn query_history_page(
        &self,
        filter: &HistoryFilter,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<QueryHistoryItem>> {
        let sql = format!(
            "SELECT start_time, end_time, duration, status, snippet FROM query_history{} ORDER BY start_time DESC, id DESC LIMIT {} OFFSET {}",
            history_where(filter),
            limit,
            offset
        );
        let mut query = sqlx::query_as::<_, QueryHistoryItem>(&sql)
            .bind(filter.connection_id.as_str())
            .bind(filter.command_contains.as_str());
        if let Some(from) = filter.from_bound() {
            query = query.bind(from);
        }
        if let Some(to) = filter.to_bound() {
            query = query.bind(to);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    pub async fn console_history_page(
        &self,
        filter: &HistoryFilter,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<ConsoleHistoryItem>> {
        let sql = format!(
            "SELECT start_time, snippet FROM console_history{} ORDER BY start_time DESC, id DESC LIMIT {} OFFSET {}",
            history_where(filter),
            limit,
            offset
        );
        let mut query = sqlx::query_as::<_, ConsoleHistoryItem>(&sql)
            .bind(filter.connection_id.as_str())
            .bind(filter.command_contains.as_str());
        if let Some(from) = filter.from_bound() {
            query = query.bind(from);
        }
        if let Some(to) = filter.to_bound() {
            query = query.bind(to);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    /// Deletes every entry matching the filter. Returns the number of rows removed.
    pub async fn clear_history(&self, filter: &HistoryFilter) -> AppResult<u64> {
        let sql = format!(
            "DELETE FROM {}{}",
            filter.command_type.table(),
            history_where(filter)
        );
        let result = bind_filter(sqlx::query(&sql), filter)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) async fn memory_store() -> MetaStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MetaStore::with_pool(pool).await.unwrap()
    }

    pub(crate) fn sample_connection(id: &str) -> ConnectionConfig {
        ConnectionConfig {
            id: id.into(),
            name: format!("conn {}", id),
            db_type: DbType::Postgres,
            host: Some("localhost".into()),
            port: Some(5432),
            username: Some("app".into()),
            password: Some("secret".into()),
            database: Some("shop".into()),
            conn_string: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    fn filter(kind: CommandKind, contains: &str) -> HistoryFilter {
        HistoryFilter {
            connection_id: "c1".into(),
            command_type: kind,
            command_contains: contains.into(),
            command_from: None,
            command_to: None,
        }
    }

    #[tokio::test]
    async fn test_connection_round_trip() {
        let store = memory_store().await;
        store.insert_connection(&sample_connection("c1")).await.unwrap();

        let saved = store.get_connection("c1").await.unwrap();
        assert_eq!(saved.db_type, DbType::Postgres);
        assert_eq!(saved.port, Some(5432));
        assert_eq!(saved.password.as_deref(), Some("secret"));
        assert_eq!(store.list_connections().await.unwrap().len(), 1);

        store.delete_connection("c1").await.unwrap();
        assert!(matches!(
            store.get_connection("c1").await,
            Err(AppError::ConnectionNotFound(_))
        ));
        assert!(store.delete_connection("c1").await.is_err());
    }

    #[tokio::test]
    async fn test_history_filters() {
        let store = memory_store().await;
        for (start, snippet) in [
            ("2024-01-01T10:00:00", "SELECT * FROM orders"),
            ("2024-01-02T10:00:00", "select count(*) from items"),
            ("2024-01-03T10:00:00", "vacuum"),
        ] {
            store
                .add_console_history(&NewConsoleHistory {
                    connection_id: "c1".into(),
                    start_time: start.into(),
                    snippet: snippet.into(),
                })
                .await
                .unwrap();
        }

        let f = filter(CommandKind::Console, "SELECT");
        assert_eq!(store.count_history(&f).await.unwrap(), 2);
        let page = store.console_history_page(&f, 20, 0).await.unwrap();
        assert_eq!(page[0].snippet, "select count(*) from items");

        let mut bounded = filter(CommandKind::Console, "");
        bounded.command_from = Some("2024-01-02T00:00:00".into());
        bounded.command_to = Some("".into());
        assert_eq!(store.count_history(&bounded).await.unwrap(), 2);

        assert_eq!(store.clear_history(&bounded).await.unwrap(), 2);
        assert_eq!(
            store.count_history(&filter(CommandKind::Console, "")).await.unwrap(),
            1
        );
        assert_eq!(
            store.count_history(&filter(CommandKind::Query, "")).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_history_filter_folds_ascii_only() {
        let store = memory_store().await;
        store
            .add_console_history(&NewConsoleHistory {
                connection_id: "c1".into(),
                start_time: "2024-01-01T10:00:00".into(),
                snippet: "select * from ÉTÉ".into(),
            })
            .await
            .unwrap();

        for (needle, expected) in [("SELECT", 1), ("ÉTÉ", 1), ("été", 0)] {
            let f = filter(CommandKind::Console, needle);
            assert_eq!(store.count_history(&f).await.unwrap(), expected, "{}", needle);
        }
    }
}
