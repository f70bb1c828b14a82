//! SQLite 适配器
//!
//! 元数据来自 `sqlite_master` 与各类 `PRAGMA`；按表逐个查询后合并成一个 DataTable。
//! 服务名即数据库文件路径。

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use common::errors::AppResult;
use common::models::{ErrorPosition, ObjectRefQuery, TableRecordsRequest};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::adapter::{
    render_select, render_update, scalar_text, transposed, ActiveParams, Commands, Connection,
    ConnectionParams, DatabaseAdapter, Features, ObjectFilter, VersionCache, VersionInfo,
    CONNECTION_OK,
};
use crate::data_table::{value_text, DataTable};
use crate::driver::{Driver, PoolSettings, SqlxDriver, SqlxEngine};
use crate::quoting::{literal, quote_ident, quote_literal};
use crate::Dialect;

static NEAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#".*near "(.*)".*"#).expect("near-token pattern"));

const FIELD_COLUMNS: [&str; 7] = [
    "column_name",
    "data_type",
    "nullable",
    "data_length",
    "data_precision",
    "data_scale",
    "table_name",
];

const FK_COLUMNS: [&str; 9] = [
    "r_table_name",
    "table_name",
    "r_column_name",
    "column_name",
    "constraint_name",
    "update_rule",
    "delete_rule",
    "table_schema",
    "r_table_schema",
];

pub struct SqliteAdapter {
    active: ActiveParams,
    conn: Connection,
    version: VersionCache,
}

impl SqliteAdapter {
    pub fn new(
        params: &ConnectionParams,
        settings: PoolSettings,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        let driver = SqlxDriver::new(
            SqlxEngine::Sqlite,
            SqlxDriver::sqlite_url(&params.service),
            settings,
        );
        Self::with_driver(params, Arc::new(driver), lock)
    }

    pub fn with_driver(
        params: &ConnectionParams,
        driver: Arc<dyn Driver>,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        Self {
            active: ActiveParams {
                service: params.service.clone(),
                ..Default::default()
            },
            conn: Connection::new(driver, lock),
            version: VersionCache::default(),
        }
    }

    /// One table when the filter names it, else every table in name order.
    async fn table_names(&self, filter: &ObjectFilter) -> AppResult<Vec<String>> {
        if let Some(table) = filter.table.as_deref().filter(|t| !t.is_empty()) {
            return Ok(vec![table.to_string()]);
        }
        let tables = self
            .conn
            .query("select name from sqlite_master where type = 'table' order by name")
            .await?;
        Ok(tables.column_texts("name"))
    }

    async fn fields_of(&self, tables: Vec<String>) -> AppResult<DataTable> {
        let mut all = DataTable::with_columns(FIELD_COLUMNS);
        for table in tables {
            let info = self
                .conn
                .query(&format!(
                    "pragma table_info({})",
                    quote_ident(Dialect::Sqlite, &table)
                ))
                .await?;
            for r in 0..info.len() {
                let (data_type, length, precision, scale) = split_type(&info.text(r, "type"));
                let nullable = if info.text(r, "notnull") == "1" { "NO" } else { "YES" };
                all.add_row(vec![
                    info.get(r, "name").clone(),
                    Value::from(data_type),
                    Value::from(nullable),
                    Value::from(length),
                    Value::from(precision),
                    Value::from(scale),
                    Value::from(table.as_str()),
                ])?;
            }
        }
        Ok(all)
    }

    async fn foreign_keys_of(&self, tables: Vec<String>) -> AppResult<DataTable> {
        let mut all = DataTable::with_columns(FK_COLUMNS);
        for table in tables {
            let fks = self
                .conn
                .query(&format!("pragma foreign_key_list({})", literal(&table)))
                .await?;
            for r in 0..fks.len() {
                all.add_row(vec![
                    fks.get(r, "table").clone(),
                    Value::from(table.as_str()),
                    fks.get(r, "to").clone(),
                    fks.get(r, "from").clone(),
                    Value::from(format!("{}_fk_{}", table, fks.text(r, "id"))),
                    fks.get(r, "on_update").clone(),
                    fks.get(r, "on_delete").clone(),
                    Value::from(""),
                    Value::from(""),
                ])?;
            }
        }
        Ok(all)
    }

    /// `PRAGMA index_list` entries of one origin (`u` unique constraint, `c` created index)
    /// as (name, unique, origin).
    async fn indexes_by_origin(
        &self,
        table: &str,
        origin: &str,
    ) -> AppResult<Vec<(String, bool, String)>> {
        let list = self
            .conn
            .query(&format!("PRAGMA index_list({})", literal(table)))
            .await?;
        Ok((0..list.len())
            .filter(|&r| list.text(r, "origin") == origin)
            .map(|r| {
                (
                    list.text(r, "name"),
                    list.text(r, "unique") == "1",
                    list.text(r, "origin"),
                )
            })
            .collect())
    }

    async fn index_column_names(&self, index: &str) -> AppResult<Vec<String>> {
        let info = self
            .conn
            .query(&format!("PRAGMA index_info({})", literal(index)))
            .await?;
        Ok(info.column_texts("name"))
    }

    /// Single `Type`/`Name` row for objects without a catalog entry of their own.
    async fn constant_properties(&self, kind: &str, object: &str) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                "SELECT '{}' AS \"Type\",\n       {} AS \"Name\"",
                kind,
                literal(object)
            ))
            .await
    }

    async fn master_properties(
        &self,
        object_type: &str,
        object: &str,
        table: Option<&str>,
    ) -> AppResult<DataTable> {
        let mut sql = format!(
            "SELECT type AS \"Type\",\n       name AS \"Name\",\n       rootpage AS \"Root Page\"\nFROM sqlite_master\nWHERE type = {}\n  AND name = {}",
            literal(object_type),
            literal(object)
        );
        if let Some(table) = table {
            sql.push_str(&format!("\n  AND tbl_name = {}", literal(table)));
        }
        self.conn.query(&sql).await
    }
}

/// Splits a declared type into (type, length, precision, scale), e.g. `numeric(10,2)`.
fn split_type(raw: &str) -> (String, String, String, String) {
    match raw.find('(') {
        Some(open) => {
            let data_type = raw[..open].to_lowercase();
            let close = raw[open..].find(')').map(|c| open + c).unwrap_or(raw.len());
            let inner = &raw[open + 1..close];
            match inner.split_once(',') {
                Some((precision, scale)) => (
                    data_type,
                    String::new(),
                    precision.trim().to_string(),
                    scale.trim().to_string(),
                ),
                None => (data_type, inner.trim().to_string(), String::new(), String::new()),
            }
        }
        None => (raw.to_lowercase(), String::new(), String::new(), String::new()),
    }
}

/// Predicate of a partial index, taken from its `CREATE INDEX` text.
fn partial_predicate(sql: &str) -> Option<String> {
    sql.to_ascii_uppercase()
        .find("WHERE")
        .map(|idx| sql[idx + "WHERE".len()..].trim().to_string())
}

/// `3.45.1` → 34501.
fn version_number(version: &str) -> Option<u32> {
    let mut padded = String::new();
    for part in version.split('.').take(3) {
        padded.push_str(&format!("{:0>2}", part.trim()));
    }
    padded.parse().ok()
}

#[async_trait]
impl DatabaseAdapter for SqliteAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn features(&self) -> Features {
        Features {
            has_primary_keys: true,
            has_foreign_keys: true,
            has_uniques: true,
            has_indexes: true,
            has_triggers: true,
            has_partitions: true,
            has_update_rule: true,
            ..Default::default()
        }
    }

    fn commands(&self) -> Commands {
        Commands {
            add_column_command: "alter table #p_table_name# add column #p_column_name# #p_data_type# #p_nullable#",
            drop_index_command: "drop index #p_index_name#",
            ..Commands::standard()
        }
    }

    fn active(&self) -> &ActiveParams {
        &self.active
    }

    fn connection(&self) -> &Connection {
        &self.conn
    }

    fn default_schema(&self) -> String {
        String::new()
    }

    fn print_database_info(&self) -> String {
        self.active
            .service
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn print_database_details(&self) -> String {
        "Local File".to_string()
    }

    async fn test_connection(&self) -> String {
        if !Path::new(&self.active.service).is_file() {
            return "File does not exist, if you try to manage this connection a database file will be created.".to_string();
        }
        match self.conn.query("PRAGMA schema_version;").await {
            Ok(_) => CONNECTION_OK.to_string(),
            Err(e) => e.to_string(),
        }
    }

    async fn get_version(&self) -> AppResult<String> {
        let raw = scalar_text(&self.conn.execute_scalar("SELECT sqlite_version()").await?);
        let info = VersionInfo {
            version_num: version_number(&raw),
            major_version: raw.split('.').next().unwrap_or_default().to_string(),
            version: raw,
        };
        let text = format!("SQLite {}", info.version);
        *self.version.write().await = Some(info);
        Ok(text)
    }

    async fn version_num(&self) -> Option<u32> {
        self.version.read().await.as_ref().and_then(|v| v.version_num)
    }

    fn get_error_position(&self, message: &str, sql: &str) -> Option<ErrorPosition> {
        let token = NEAR_TOKEN.captures(message)?.get(1)?.as_str();
        if token.is_empty() {
            return None;
        }
        // 找不到 token 时落在最后一个字符的起始字节，避免切进多字节字符
        let end = sql
            .find(token)
            .or_else(|| sql.char_indices().last().map(|(i, _)| i))
            .unwrap_or(0);
        let row = sql[..end].matches('\n').count() as u32 + 1;
        Some(ErrorPosition { row, col: 0 })
    }

    async fn query_tables(&self, _filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(
                "select name as table_name,\n       quote(name) as name_raw\nfrom sqlite_master\nwhere type = 'table'\norder by table_name ASC",
            )
            .await
    }

    async fn query_tables_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        let tables = self.table_names(filter).await?;
        self.fields_of(tables).await
    }

    async fn query_tables_foreign_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        let tables = self.table_names(filter).await?;
        self.foreign_keys_of(tables).await
    }

    async fn query_tables_foreign_keys_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        let tables = self.table_names(filter).await?;
        let all = self.foreign_keys_of(tables).await?;
        let mut picked = DataTable::with_columns(FK_COLUMNS);
        for (r, row) in all.rows.iter().enumerate() {
            if names.contains(&all.text(r, "constraint_name")) {
                picked.add_row(row.clone())?;
            }
        }
        Ok(picked)
    }

    async fn query_tables_primary_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        let mut all = DataTable::with_columns(["constraint_name", "column_name", "table_name"]);
        for table in self.table_names(filter).await? {
            let info = self
                .conn
                .query(&format!("pragma table_info({})", literal(&table)))
                .await?;
            for r in 0..info.len() {
                if info.text(r, "pk") != "0" {
                    all.add_row(vec![
                        Value::from(format!("pk_{}", table)),
                        info.get(r, "name").clone(),
                        Value::from(table.as_str()),
                    ])?;
                }
            }
        }
        Ok(all)
    }

    async fn query_tables_primary_keys_columns(
        &self,
        filter: &ObjectFilter,
        _names: &[String],
    ) -> AppResult<DataTable> {
        let pks = self.query_tables_primary_keys(filter).await?;
        let mut columns = DataTable::with_columns(["column_name"]);
        for r in 0..pks.len() {
            columns.add_row(vec![pks.get(r, "column_name").clone()])?;
        }
        Ok(columns)
    }

    async fn query_tables_uniques(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        let mut all = DataTable::with_columns(["constraint_name", "table_name"]);
        for table in self.table_names(filter).await? {
            for (name, _, _) in self.indexes_by_origin(&table, "u").await? {
                all.add_row(vec![Value::from(name), Value::from(table.as_str())])?;
            }
        }
        Ok(all)
    }

    async fn query_tables_uniques_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        let mut all = DataTable::with_columns(["constraint_name", "column_name", "table_name"]);
        for table in self.table_names(filter).await? {
            for (name, _, _) in self.indexes_by_origin(&table, "u").await? {
                if !names.contains(&name) {
                    continue;
                }
                for column in self.index_column_names(&name).await? {
                    all.add_row(vec![
                        Value::from(name.as_str()),
                        Value::from(column),
                        Value::from(table.as_str()),
                    ])?;
                }
            }
        }
        Ok(all)
    }

    async fn query_tables_indexes(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        let mut all = DataTable::with_columns([
            "index_name",
            "table_name",
            "unique",
            "is_primary",
            "columns",
            "constraint",
        ]);
        for table in self.table_names(filter).await? {
            for (name, unique, origin) in self.indexes_by_origin(&table, "c").await? {
                let columns = self.index_column_names(&name).await?;
                let create = self
                    .conn
                    .execute_scalar(&format!(
                        "SELECT sql\nFROM sqlite_master\nWHERE type = 'index'\nAND name = {}",
                        literal(&name)
                    ))
                    .await?;
                let constraint = partial_predicate(&value_text(&create))
                    .map(Value::from)
                    .unwrap_or(Value::Null);
                all.add_row(vec![
                    Value::from(name.as_str()),
                    Value::from(table.as_str()),
                    Value::from(unique),
                    Value::from(origin == "pk"),
                    Value::from(columns),
                    constraint,
                ])?;
            }
        }
        Ok(all)
    }

    async fn query_tables_indexes_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        let mut all = DataTable::with_columns(["index_name", "column_name", "table_name"]);
        for table in self.table_names(filter).await? {
            for (name, _, _) in self.indexes_by_origin(&table, "c").await? {
                if !names.contains(&name) {
                    continue;
                }
                for column in self.index_column_names(&name).await? {
                    all.add_row(vec![
                        Value::from(name.as_str()),
                        Value::from(column),
                        Value::from(table.as_str()),
                    ])?;
                }
            }
        }
        Ok(all)
    }

    async fn query_tables_triggers(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        let mut sql = String::from(
            "SELECT name AS trigger_name,\n       tbl_name AS table_name\nFROM sqlite_master\nWHERE type = 'trigger'",
        );
        if let Some(table) = filter.table.as_deref().filter(|t| !t.is_empty()) {
            sql.push_str(&format!("\n  AND tbl_name = {}", literal(table)));
        }
        self.conn.query(&sql).await
    }

    async fn query_views(&self, _filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(
                "select name as table_name,\n       quote(name) as name_raw\nfrom sqlite_master\nwhere type = 'view'\norder by table_name ASC",
            )
            .await
    }

    async fn query_view_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        let views = match filter.table.as_deref().filter(|t| !t.is_empty()) {
            Some(view) => vec![view.to_string()],
            None => self
                .conn
                .query("select name from sqlite_master where type = 'view' order by name")
                .await?
                .column_texts("name"),
        };
        self.fields_of(views).await
    }

    async fn get_view_definition(&self, _schema: Option<&str>, view: &str) -> AppResult<String> {
        let sql = self
            .conn
            .execute_scalar(&format!(
                "SELECT sql from sqlite_master WHERE type = 'view' AND name = {}",
                literal(view)
            ))
            .await?;
        Ok(value_text(&sql))
    }

    async fn query_data_limited(&self, sql: &str, count: usize) -> AppResult<DataTable> {
        debug!(count, "SQLite 限量查询");
        self.conn.query_block(sql, count).await
    }

    async fn query_table_records(&self, request: &TableRecordsRequest) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                "select {}\nfrom '{}' t\n{}\n limit {}",
                request.columns,
                quote_literal(&request.table),
                request.filter,
                request.limit
            ))
            .await
    }

    async fn query_table_definition(
        &self,
        _schema: Option<&str>,
        table: &str,
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!("PRAGMA table_info({})", literal(table)))
            .await
    }

    fn dml_target(&self, _schema: Option<&str>, table: &str) -> String {
        format!("'{}'", quote_literal(table))
    }

    async fn template_select(
        &self,
        schema: Option<&str>,
        table: &str,
        kind: Option<&str>,
    ) -> AppResult<String> {
        let filter = ObjectFilter::table(None, table);
        let target = self.dml_target(schema, table);
        if kind == Some("v") {
            let fields = self.query_view_fields(&filter).await?;
            return Ok(render_select(&target, &fields, &[]));
        }
        let fields = self.query_tables_fields(&filter).await?;
        let pk = self.primary_key_columns(&filter).await?;
        Ok(render_select(&target, &fields, &pk))
    }

    async fn template_update(&self, schema: Option<&str>, table: &str) -> AppResult<String> {
        let filter = ObjectFilter::table(None, table);
        let fields = self.query_tables_fields(&filter).await?;
        let pk = self.primary_key_columns(&filter).await?;
        // SQLite 版本在表名后保留一个空格
        let target = format!("{} ", self.dml_target(schema, table));
        Ok(render_update(&target, &fields, &pk))
    }

    async fn get_properties(&self, object: &ObjectRefQuery) -> AppResult<Option<DataTable>> {
        let name = object.object.as_str();
        let table = object.table.as_deref().unwrap_or_default();
        let result = match object.object_type.as_str() {
            "table" => self.master_properties("table", name, None).await?,
            "index" => self.master_properties("index", name, None).await?,
            "view" => self.master_properties("view", name, None).await?,
            "trigger" => self.master_properties("trigger", name, Some(table)).await?,
            "table_field" => self.constant_properties("Column", name).await?,
            "pk" => self.constant_properties("PK", name).await?,
            "foreign_key" => self.constant_properties("FK", name).await?,
            "unique" => self.constant_properties("Unique", name).await?,
            _ => return Ok(None),
        };
        transposed(result, name).map(Some)
    }

    async fn get_ddl(&self, object: &ObjectRefQuery) -> AppResult<String> {
        let kind = object.object_type.as_str();
        if !matches!(kind, "table" | "index" | "view" | "trigger") {
            return Ok(String::new());
        }
        let mut sql = format!(
            "SELECT sql\nFROM sqlite_master\nWHERE type = {}\n  AND name = {}",
            literal(kind),
            literal(&object.object)
        );
        if kind == "trigger" {
            sql.push_str(&format!(
                "\n  AND tbl_name = {}",
                literal(object.table.as_deref().unwrap_or_default())
            ));
        }
        Ok(value_text(&self.conn.execute_scalar(&sql).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testing::{table, ScriptedDriver};
    use tempfile::TempDir;

    async fn sample_db() -> (TempDir, SqliteAdapter) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.db");
        let params = ConnectionParams {
            service: path.to_str().unwrap().to_string(),
            ..Default::default()
        };
        let adapter = SqliteAdapter::new(&params, PoolSettings::default(), None);
        let conn = adapter.connection();
        for stmt in [
            "create table dept (id integer primary key, name varchar(40) not null unique)",
            "create table emp (id integer primary key, dept_id integer references dept(id) on delete cascade, salary numeric(10,2), email text)",
            "create index emp_email_idx on emp (email) WHERE email is not null",
            "create view v_emp as select id, email from emp",
            "create trigger emp_audit after insert on emp begin select 1; end",
        ] {
            conn.execute(stmt).await.unwrap();
        }
        (dir, adapter)
    }

    #[test]
    fn test_split_type() {
        assert_eq!(
            split_type("VARCHAR(40)"),
            ("varchar".into(), "40".into(), String::new(), String::new())
        );
        assert_eq!(
            split_type("NUMERIC(10,2)"),
            ("numeric".into(), String::new(), "10".into(), "2".into())
        );
        assert_eq!(split_type("TEXT").0, "text");
    }

    #[test]
    fn test_version_number() {
        assert_eq!(version_number("3.45.1"), Some(34501));
        assert_eq!(version_number("3.8.11"), Some(30811));
    }

    #[test]
    fn test_error_position() {
        let params = ConnectionParams::default();
        let adapter = SqliteAdapter::with_driver(&params, Arc::new(ScriptedDriver::new()), None);
        let sql = "select *\nfrom t\nwehre id = 1";
        let pos = adapter.get_error_position("near \"wehre\": syntax error", sql);
        assert_eq!(pos, Some(ErrorPosition { row: 3, col: 0 }));
        assert_eq!(adapter.get_error_position("no such table: t", sql), None);
    }

    #[test]
    fn test_error_position_token_missing_from_multibyte_sql() {
        let params = ConnectionParams::default();
        let adapter = SqliteAdapter::with_driver(&params, Arc::new(ScriptedDriver::new()), None);
        let message = "near \"zzz\": syntax error";
        let pos = adapter.get_error_position(message, "select 'é'\nfrom t where x = 'é");
        assert_eq!(pos, Some(ErrorPosition { row: 2, col: 0 }));
        let pos = adapter.get_error_position(message, "é");
        assert_eq!(pos, Some(ErrorPosition { row: 1, col: 0 }));
        let pos = adapter.get_error_position(message, "");
        assert_eq!(pos, Some(ErrorPosition { row: 1, col: 0 }));
    }

    #[tokio::test]
    async fn test_version_and_names() {
        let driver = Arc::new(ScriptedDriver::new());
        driver.push(table(&["v"], &[&["3.45.1"]]));
        let params = ConnectionParams {
            service: "/data/app/main.db".into(),
            ..Default::default()
        };
        let adapter = SqliteAdapter::with_driver(&params, driver, None);
        assert_eq!(adapter.get_version().await.unwrap(), "SQLite 3.45.1");
        assert_eq!(adapter.version_num().await, Some(34501));
        assert_eq!(adapter.print_database_info(), "main.db");
        assert_eq!(adapter.print_database_details(), "Local File");
        assert_eq!(adapter.get_name(), "/data/app/main.db");
    }

    #[tokio::test]
    async fn test_test_connection() {
        let dir = tempfile::tempdir().unwrap();
        let params = ConnectionParams {
            service: dir.path().join("missing.db").to_str().unwrap().to_string(),
            ..Default::default()
        };
        let adapter = SqliteAdapter::new(&params, PoolSettings::default(), None);
        assert!(adapter.test_connection().await.starts_with("File does not exist"));

        let (_dir, adapter) = sample_db().await;
        assert_eq!(adapter.test_connection().await, CONNECTION_OK);
    }

    #[tokio::test]
    async fn test_tables_and_fields() {
        let (_dir, adapter) = sample_db().await;
        let tables = adapter.query_tables(&ObjectFilter::default()).await.unwrap();
        assert_eq!(tables.column_texts("table_name"), vec!["dept", "emp"]);
        assert_eq!(tables.text(0, "name_raw"), "'dept'");

        let fields = adapter
            .query_tables_fields(&ObjectFilter::table(None, "emp"))
            .await
            .unwrap();
        assert_eq!(fields.columns, FIELD_COLUMNS);
        assert_eq!(fields.column_texts("column_name"), vec!["id", "dept_id", "salary", "email"]);
        assert_eq!(fields.text(2, "data_type"), "numeric");
        assert_eq!(fields.text(2, "data_precision"), "10");
        assert_eq!(fields.text(2, "data_scale"), "2");

        let all = adapter.query_tables_fields(&ObjectFilter::default()).await.unwrap();
        assert_eq!(all.len(), 6);
        let dept_name = all.select(&["column_name"], &[Value::from("name")]).unwrap();
        assert_eq!(dept_name.text(0, "nullable"), "NO");
        assert_eq!(dept_name.text(0, "data_length"), "40");
    }

    #[tokio::test]
    async fn test_keys_and_indexes() {
        let (_dir, adapter) = sample_db().await;
        let emp = ObjectFilter::table(None, "emp");

        let pks = adapter.query_tables_primary_keys(&emp).await.unwrap();
        assert_eq!(pks.text(0, "constraint_name"), "pk_emp");
        assert_eq!(pks.text(0, "column_name"), "id");

        let fks = adapter.query_tables_foreign_keys(&emp).await.unwrap();
        assert_eq!(fks.len(), 1);
        assert_eq!(fks.text(0, "constraint_name"), "emp_fk_0");
        assert_eq!(fks.text(0, "r_table_name"), "dept");
        assert_eq!(fks.text(0, "delete_rule"), "CASCADE");

        let fk_cols = adapter
            .query_tables_foreign_keys_columns(&ObjectFilter::default(), &["emp_fk_0".to_string()])
            .await
            .unwrap();
        assert_eq!(fk_cols.len(), 1);
        assert_eq!(fk_cols.text(0, "column_name"), "dept_id");

        let uniques = adapter
            .query_tables_uniques(&ObjectFilter::table(None, "dept"))
            .await
            .unwrap();
        assert_eq!(uniques.len(), 1);
        let unique_name = uniques.text(0, "constraint_name");
        let unique_cols = adapter
            .query_tables_uniques_columns(&ObjectFilter::default(), &[unique_name])
            .await
            .unwrap();
        assert_eq!(unique_cols.column_texts("column_name"), vec!["name"]);

        let indexes = adapter.query_tables_indexes(&emp).await.unwrap();
        assert_eq!(indexes.len(), 1);
        assert_eq!(indexes.text(0, "index_name"), "emp_email_idx");
        assert_eq!(indexes.get(0, "unique"), &Value::Bool(false));
        assert_eq!(indexes.get(0, "columns"), &serde_json::json!(["email"]));
        assert_eq!(indexes.text(0, "constraint"), "email is not null");

        let triggers = adapter.query_tables_triggers(&emp).await.unwrap();
        assert_eq!(triggers.column_texts("trigger_name"), vec!["emp_audit"]);
    }

    #[tokio::test]
    async fn test_generated_dml() {
        let (_dir, adapter) = sample_db().await;
        let select = adapter.template_select(None, "emp", Some("t")).await.unwrap();
        assert_eq!(
            select,
            "SELECT t.id\n     , t.dept_id\n     , t.salary\n     , t.email\nFROM 'emp' t\nORDER BY t.id"
        );
        let view = adapter.template_select(None, "v_emp", Some("v")).await.unwrap();
        assert_eq!(view, "SELECT t.id\n     , t.email\nFROM 'v_emp' t");

        let insert = adapter.template_insert(None, "dept").await.unwrap();
        assert!(insert.starts_with("INSERT INTO 'dept' (\n      id\n    , name\n) VALUES (\n"));
        assert!(insert.contains("? -- id integer PRIMARY KEY"));

        let update = adapter.template_update(None, "emp").await.unwrap();
        assert!(update.starts_with("UPDATE 'emp' \nSET id = ? -- integer PRIMARY KEY"));
        assert!(update.contains("\n    , email = ? -- text NULLABLE"));
        assert!(update.ends_with("\nWHERE condition"));
    }

    #[tokio::test]
    async fn test_ddl_and_properties() {
        let (_dir, adapter) = sample_db().await;
        let ddl = adapter
            .get_ddl(&ObjectRefQuery {
                schema: None,
                table: None,
                object: "dept".into(),
                object_type: "table".into(),
            })
            .await
            .unwrap();
        assert!(ddl.starts_with("CREATE TABLE dept") || ddl.starts_with("create table dept"));

        let trigger_ddl = adapter
            .get_ddl(&ObjectRefQuery {
                schema: None,
                table: Some("emp".into()),
                object: "emp_audit".into(),
                object_type: "trigger".into(),
            })
            .await
            .unwrap();
        assert!(trigger_ddl.contains("emp_audit"));

        let props = adapter
            .get_properties(&ObjectRefQuery {
                schema: None,
                table: None,
                object: "emp".into(),
                object_type: "table".into(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(props.columns, vec!["Property", "Value"]);
        assert_eq!(props.column_texts("Property"), vec!["Type", "Name", "Root Page"]);
        assert_eq!(props.text(1, "Value"), "emp");

        let pk = adapter
            .get_properties(&ObjectRefQuery {
                schema: None,
                table: Some("emp".into()),
                object: "pk_emp".into(),
                object_type: "pk".into(),
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(pk.text(0, "Value"), "PK");

        let err = adapter
            .get_properties(&ObjectRefQuery {
                schema: None,
                table: None,
                object: "ghost".into(),
                object_type: "view".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Object ghost does not exist anymore. Please refresh the tree view."
        );

        let none = adapter
            .get_properties(&ObjectRefQuery {
                schema: None,
                table: None,
                object: "x".into(),
                object_type: "sequence".into(),
            })
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_records_and_limited_data() {
        let (_dir, adapter) = sample_db().await;
        let conn = adapter.connection();
        conn.execute("insert into dept (name) values ('a'), ('b'), ('c')")
            .await
            .unwrap();
        let limited = adapter.query_data_limited("select * from dept", 2).await.unwrap();
        assert_eq!(limited.len(), 2);

        let records = adapter
            .query_table_records(&TableRecordsRequest {
                columns: "t.name".into(),
                table: "dept".into(),
                schema: None,
                filter: "where t.name <> 'b'".into(),
                limit: 10,
            })
            .await
            .unwrap();
        assert_eq!(records.column_texts("name"), vec!["a", "c"]);

        let view = adapter.get_view_definition(None, "v_emp").await.unwrap();
        assert!(view.contains("select id, email from emp"));
    }
}
