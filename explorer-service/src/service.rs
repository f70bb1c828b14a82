//! 连接管理与对象浏览服务

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::errors::{AppError, AppResult};
use common::models::{
    ConnectionItem, CreateConnectionRequest, DefinitionQuery, ErrorPosition, GenerateQuery,
    NewQueryHistory, ObjectColumnsQuery, ObjectQuery, ObjectRefQuery, RulesRequest,
    TableRecordsRequest,
};
use dialect::{
    get_template, template_keys, Commands, DataTable, DatabaseAdapter, Features, ObjectFilter,
    Template, CONNECTION_OK,
};

use crate::sessions::SessionManager;
use crate::store::MetaStore;

/// 连接服务 Trait
#[async_trait]
pub trait ConnectionServiceTrait: Send + Sync {
    async fn list(&self) -> AppResult<Vec<ConnectionItem>>;

    async fn create(&self, req: CreateConnectionRequest) -> AppResult<ConnectionItem>;

    async fn get(&self, id: &str) -> AppResult<ConnectionItem>;

    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Outcome text of a connection attempt.
    async fn test(&self, id: &str) -> AppResult<String>;
}

/// Saved connection management.
pub struct ConnectionService {
    store: Arc<MetaStore>,
    sessions: Arc<SessionManager>,
}

impl ConnectionService {
    pub fn new(store: Arc<MetaStore>, sessions: Arc<SessionManager>) -> Self {
        Self { store, sessions }
    }
}

#[async_trait]
impl ConnectionServiceTrait for ConnectionService {
    async fn list(&self) -> AppResult<Vec<ConnectionItem>> {
        Ok(self
            .store
            .list_connections()
            .await?
            .into_iter()
            .map(ConnectionItem::from)
            .collect())
    }

    async fn create(&self, req: CreateConnectionRequest) -> AppResult<ConnectionItem> {
        req.validate()?;
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339();
        let config = req.into_config(id.clone(), created_at);

        self.store.insert_connection(&config).await?;

        tracing::info!(id = %id, name = %config.name, db_type = %config.db_type, "连接已创建");
        Ok(ConnectionItem::from(config))
    }

    async fn get(&self, id: &str) -> AppResult<ConnectionItem> {
        self.store.get_connection(id).await.map(ConnectionItem::from)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.store.delete_connection(id).await?;
        self.sessions.remove(id).await;
        tracing::info!(id = %id, "连接已删除");
        Ok(())
    }

    async fn test(&self, id: &str) -> AppResult<String> {
        let config = self.store.get_connection(id).await?;
        let adapter = self.sessions.get_or_create(&config).await?;
        Ok(adapter.test_connection().await)
    }
}

/// Summary shown when a connection is opened in the tree view.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectionInfo {
    pub name: String,
    pub dialect: dialect::Dialect,
    /// Absent when the server could not be reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub user_name: String,
    pub user_super: bool,
    pub database_info: String,
    pub database_details: String,
    pub console_help: String,
    pub features: Features,
    pub commands: Commands,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectionTestResult {
    pub id: String,
    pub success: bool,
    pub message: String,
}

impl ConnectionTestResult {
    pub fn new(id: String, message: String) -> Self {
        Self {
            success: message == CONNECTION_OK,
            id,
            message,
        }
    }
}

/// Catalog browsing, DDL and ad-hoc queries on one saved connection.
pub struct ExplorerService {
    store: Arc<MetaStore>,
    sessions: Arc<SessionManager>,
}

impl ExplorerService {
    pub fn new(store: Arc<MetaStore>, sessions: Arc<SessionManager>) -> Self {
        Self { store, sessions }
    }

    async fn adapter(&self, id: &str) -> AppResult<Arc<dyn DatabaseAdapter>> {
        let config = self.store.get_connection(id).await?;
        self.sessions.get_or_create(&config).await
    }

    pub async fn info(&self, id: &str) -> AppResult<ConnectionInfo> {
        let adapter = self.adapter(id).await?;
        let version = match adapter.get_version().await {
            Ok(version) => Some(version),
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "读取服务器版本失败");
                None
            }
        };
        Ok(ConnectionInfo {
            name: adapter.get_name(),
            dialect: adapter.dialect(),
            version,
            user_name: adapter.get_user_name(),
            user_super: adapter.get_user_super().await,
            database_info: adapter.print_database_info(),
            database_details: adapter.print_database_details(),
            console_help: adapter.console_help().to_string(),
            features: adapter.features(),
            commands: adapter.commands(),
        })
    }

    /// Every template of the dialect, rendered once against the server version.
    pub async fn templates(&self, id: &str) -> AppResult<BTreeMap<String, Template>> {
        let adapter = self.adapter(id).await?;
        let version = adapter.version_num().await;
        let major = adapter.major_version().await.unwrap_or_else(|e| {
            tracing::warn!(id = %id, error = %e, "无法获取主版本号");
            String::new()
        });
        let mut templates = BTreeMap::new();
        for key in template_keys(adapter.dialect()) {
            let template = get_template(adapter.dialect(), key, version)?;
            templates.insert(key.to_string(), template.render(&major));
        }
        Ok(templates)
    }

    pub async fn template(&self, id: &str, key: &str) -> AppResult<Template> {
        self.adapter(id).await?.template(key).await
    }

    /// Catalog listing by kind.
    pub async fn objects(&self, id: &str, kind: &str, query: &ObjectQuery) -> AppResult<DataTable> {
        let adapter = self.adapter(id).await?;
        let filter = ObjectFilter::from(query);
        tracing::debug!(id = %id, kind, dialect = %adapter.dialect(), "目录查询");
        match kind {
            "roles" => adapter.query_roles().await,
            "tablespaces" => adapter.query_tablespaces().await,
            "databases" => adapter.query_databases().await,
            "schemas" => adapter.query_schemas().await,
            "tables" => adapter.query_tables(&filter).await,
            "fields" => adapter.query_tables_fields(&filter).await,
            "foreign_keys" => adapter.query_tables_foreign_keys(&filter).await,
            "primary_keys" => adapter.query_tables_primary_keys(&filter).await,
            "uniques" => adapter.query_tables_uniques(&filter).await,
            "indexes" => adapter.query_tables_indexes(&filter).await,
            "checks" => adapter.query_tables_checks(&filter).await,
            "excludes" => adapter.query_tables_excludes(&filter).await,
            "rules" => adapter.query_tables_rules(&filter).await,
            "triggers" => adapter.query_tables_triggers(&filter).await,
            "views" => adapter.query_views(&filter).await,
            "view_fields" => adapter.query_view_fields(&filter).await,
            "functions" => adapter.query_functions(&filter).await,
            "procedures" => adapter.query_procedures(&filter).await,
            "sequences" => adapter.query_sequences(&filter).await,
            "packages" => adapter.query_packages(&filter).await,
            other => Err(AppError::Validation(format!("Unknown object kind: {}", other))),
        }
    }

    /// Column listing of constraints or indexes, restricted to `query.names`.
    pub async fn object_columns(
        &self,
        id: &str,
        kind: &str,
        query: &ObjectColumnsQuery,
    ) -> AppResult<DataTable> {
        let adapter = self.adapter(id).await?;
        let filter = ObjectFilter::from(query);
        let names = query.name_list();
        match kind {
            "foreign_keys" => adapter.query_tables_foreign_keys_columns(&filter, &names).await,
            "primary_keys" => adapter.query_tables_primary_keys_columns(&filter, &names).await,
            "uniques" => adapter.query_tables_uniques_columns(&filter, &names).await,
            "indexes" => adapter.query_tables_indexes_columns(&filter, &names).await,
            other => Err(AppError::Validation(format!("No column listing for: {}", other))),
        }
    }

    pub async fn ddl(&self, id: &str, object: &ObjectRefQuery) -> AppResult<String> {
        self.adapter(id).await?.get_ddl(object).await
    }

    pub async fn properties(&self, id: &str, object: &ObjectRefQuery) -> AppResult<Option<DataTable>> {
        self.adapter(id).await?.get_properties(object).await
    }

    pub async fn definition(&self, id: &str, query: &DefinitionQuery) -> AppResult<String> {
        let adapter = self.adapter(id).await?;
        let schema = query.schema.as_deref();
        match query.kind.as_str() {
            "view" => adapter.get_view_definition(schema, &query.object).await,
            "function" => adapter.get_function_definition(schema, &query.object).await,
            "procedure" => adapter.get_procedure_definition(schema, &query.object).await,
            other => Err(AppError::Validation(format!("No definition for: {}", other))),
        }
    }

    /// Arguments of a routine, or the column definition of a table.
    pub async fn fields(&self, id: &str, query: &DefinitionQuery) -> AppResult<DataTable> {
        let adapter = self.adapter(id).await?;
        let schema = query.schema.as_deref();
        match query.kind.as_str() {
            "function" => adapter.query_function_fields(schema, &query.object).await,
            "procedure" => adapter.query_procedure_fields(schema, &query.object).await,
            "table" => adapter.query_table_definition(schema, &query.object).await,
            other => Err(AppError::Validation(format!("No field listing for: {}", other))),
        }
    }

    pub async fn generate(
        &self,
        id: &str,
        statement: &str,
        query: &GenerateQuery,
    ) -> AppResult<String> {
        let adapter = self.adapter(id).await?;
        let schema = query.schema.as_deref();
        match statement {
            "select" => {
                adapter
                    .template_select(schema, &query.table, query.kind.as_deref())
                    .await
            }
            "insert" => adapter.template_insert(schema, &query.table).await,
            "update" => adapter.template_update(schema, &query.table).await,
            other => Err(AppError::Validation(format!("Unknown statement: {}", other))),
        }
    }

    /// Runs the statement with a row cap and records it in query history either way.
    pub async fn query(&self, id: &str, sql: &str, limit: u32) -> AppResult<DataTable> {
        let adapter = self.adapter(id).await?;
        let start_time = Utc::now();
        let started = Instant::now();
        let result = adapter.query_data_limited(sql, limit as usize).await;

        let entry = NewQueryHistory {
            connection_id: id.to_string(),
            start_time: start_time.to_rfc3339(),
            end_time: Utc::now().to_rfc3339(),
            duration: format!("{:.3}", started.elapsed().as_secs_f64()),
            status: if result.is_ok() { "success" } else { "error" }.to_string(),
            snippet: sql.to_string(),
        };
        if let Err(e) = self.store.add_query_history(&entry).await {
            tracing::warn!(id = %id, error = %e, "写入查询历史失败");
        }
        result
    }

    pub async fn records(&self, id: &str, request: &TableRecordsRequest) -> AppResult<DataTable> {
        self.adapter(id).await?.query_table_records(request).await
    }

    pub async fn error_position(
        &self,
        id: &str,
        message: &str,
        sql: &str,
    ) -> AppResult<Option<ErrorPosition>> {
        Ok(self.adapter(id).await?.get_error_position(message, sql))
    }

    pub async fn rules(&self, id: &str, rules: &RulesRequest) -> AppResult<String> {
        Ok(self
            .adapter(id)
            .await?
            .handle_update_delete_rules(&rules.update_rule, &rules.delete_rule))
    }
}
