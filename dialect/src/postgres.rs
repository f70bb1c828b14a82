//! PostgreSQL 适配器
//!
//! 目录查询全部基于 `pg_catalog`；输出列名与其它引擎保持一致，
//! 便于前端树视图统一处理。服务器版本在首次需要时读取并缓存。

use std::sync::Arc;

use async_trait::async_trait;
use common::errors::{AppError, AppResult};
use common::models::{ErrorPosition, ObjectRefQuery, TableRecordsRequest};
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::adapter::{
    first_text, scalar_text, server_url, transposed, ActiveParams, Commands, Connection,
    ConnectionParams, DatabaseAdapter, Features, ObjectFilter, VersionCache, VersionInfo,
};
use crate::data_table::DataTable;
use crate::driver::{Driver, PoolSettings, SqlxDriver, SqlxEngine};
use crate::quoting::{literal, literal_list, quote_ident_if_needed};
use crate::Dialect;

static LINE_NO: Lazy<Regex> = Lazy::new(|| Regex::new(r"LINE (\d+):").expect("line pattern"));

const DEFAULT_SCHEMA: &str = "public";

/// `pg_constraint.confupdtype` / `confdeltype` as the rule keyword.
fn rule_case(column: &str) -> String {
    format!(
        "case {column} when 'a' then 'NO ACTION' when 'r' then 'RESTRICT' when 'c' then 'CASCADE' when 'n' then 'SET NULL' when 'd' then 'SET DEFAULT' end"
    )
}

/// `and {column} in (...)` for a non-empty name list.
fn names_clause(column: &str, names: &[String]) -> String {
    if names.is_empty() {
        String::new()
    } else {
        format!("and {} in ({}) ", column, literal_list(names))
    }
}

/// `server_version_num` → 文档链接中的主版本号：10 起为整数，之前为 `9.6` 形式。
fn major_of(version_num: u32) -> String {
    if version_num >= 100_000 {
        (version_num / 10_000).to_string()
    } else {
        format!("{}.{}", version_num / 10_000, (version_num / 100) % 100)
    }
}

fn ident(name: &str) -> String {
    quote_ident_if_needed(Dialect::Postgres, name)
}

pub struct PostgresAdapter {
    active: ActiveParams,
    conn: Connection,
    version: VersionCache,
}

impl PostgresAdapter {
    pub fn new(
        params: &ConnectionParams,
        settings: PoolSettings,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        let active = params.resolve("5432", "postgres");
        let driver = SqlxDriver::new(SqlxEngine::Postgres, server_url("postgres", &active), settings);
        Self {
            active,
            conn: Connection::new(Arc::new(driver), lock),
            version: RwLock::new(None),
        }
    }

    pub fn with_driver(
        params: &ConnectionParams,
        driver: Arc<dyn Driver>,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        Self {
            active: params.resolve("5432", "postgres"),
            conn: Connection::new(driver, lock),
            version: RwLock::new(None),
        }
    }

    fn schema_of<'a>(&self, schema: Option<&'a str>) -> &'a str {
        schema.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SCHEMA)
    }

    /// `schema.name` with identifiers quoted only where needed.
    fn target(&self, schema: Option<&str>, name: &str) -> String {
        format!("{}.{}", ident(self.schema_of(schema)), ident(name))
    }

    /// `format('%I.%I', ...)::regclass` for a relation in a schema.
    fn regclass(&self, schema: Option<&str>, name: &str) -> String {
        format!(
            "format('%I.%I', {}, {})::regclass",
            literal(self.schema_of(schema)),
            literal(name)
        )
    }

    /// Expression yielding the routine oid. A name carrying `(args)` is taken as a signature.
    fn routine_oid(&self, schema: Option<&str>, name: &str) -> String {
        if name.contains('(') {
            format!("{}::regprocedure", literal(name))
        } else {
            format!(
                "(select p.oid from pg_proc p join pg_namespace n on n.oid = p.pronamespace where n.nspname = {} and p.proname = {} limit 1)",
                literal(self.schema_of(schema)),
                literal(name)
            )
        }
    }

    async fn load_version(&self) -> AppResult<VersionInfo> {
        let version = scalar_text(&self.conn.execute_scalar("show server_version").await?);
        let version_num = scalar_text(&self.conn.execute_scalar("show server_version_num").await?)
            .trim()
            .parse::<u32>()
            .ok();
        let info = VersionInfo {
            version,
            version_num,
            major_version: version_num.map(major_of).unwrap_or_default(),
        };
        info!(version = %info.version, "PostgreSQL 版本已缓存");
        *self.version.write().await = Some(info.clone());
        Ok(info)
    }

    async fn version_info(&self) -> AppResult<VersionInfo> {
        if let Some(info) = self.version.read().await.as_ref() {
            return Ok(info.clone());
        }
        self.load_version().await
    }

    /// `prokind` = 'f' 函数，'p' 过程（PostgreSQL 11+）。
    async fn routines(&self, prokind: &str, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select n.nspname as "schema_name",
                   quote_ident(n.nspname) || '.' || quote_ident(p.proname) || '(' || oidvectortypes(p.proargtypes) || ')' as "id",
                   p.proname as "name"
            from pg_proc p
            join pg_namespace n on n.oid = p.pronamespace
            where p.prokind = '{}'
            {}
            order by 2
        "#,
                prokind,
                filter.schema_clause("n.nspname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn routine_fields(
        &self,
        with_return: bool,
        schema: Option<&str>,
        name: &str,
    ) -> AppResult<DataTable> {
        let oid = self.routine_oid(schema, name);
        let returns = if with_return {
            format!(
                r#"
            select 'O' as "type",
                   'returns ' || format_type(p.prorettype, null) as "name",
                   0::bigint as "seq"
            from pg_proc p
            where p.oid = {oid}
            union all"#
            )
        } else {
            String::new()
        };
        self.conn
            .query(&format!(
                r#"{returns}
            select case coalesce(k.mode, 'i')
                       when 'i' then 'I'
                       when 'o' then 'O'
                       when 'b' then 'X'
                       else 'R'
                   end as "type",
                   trim(coalesce(k.name, '') || ' ' || format_type(k.type_oid, null)) as "name",
                   k.ord + 1 as "seq"
            from pg_proc p
            cross join lateral unnest(coalesce(p.proallargtypes, p.proargtypes::oid[]), p.proargnames, p.proargmodes)
                 with ordinality as k(type_oid, name, mode, ord)
            where p.oid = {oid}
            order by 3
        "#
            ))
            .await
    }

    async fn routine_definition(&self, schema: Option<&str>, name: &str) -> AppResult<String> {
        let definition = self
            .conn
            .execute_scalar(&format!(
                "select pg_get_functiondef({})",
                self.routine_oid(schema, name)
            ))
            .await?;
        Ok(scalar_text(&definition))
    }

    async fn relations(&self, relkinds: &str, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.relname as "table_name",
                   n.nspname as "table_schema"
            from pg_class c
            join pg_namespace n on n.oid = c.relnamespace
            where c.relkind in ({})
            {}
            order by 2, 1
        "#,
                relkinds,
                filter.schema_clause("n.nspname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn relation_fields(&self, relkinds: &str, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.relname as "table_name",
                   a.attname as "column_name",
                   format_type(a.atttypid, a.atttypmod) as "data_type",
                   case when a.attnotnull then 'NO' else 'YES' end as "nullable",
                   case when t.typname in ('varchar', 'bpchar') and a.atttypmod > 0
                        then (a.atttypmod - 4)::text end as "data_length",
                   case when t.typname = 'numeric' and a.atttypmod > 0
                        then (((a.atttypmod - 4) >> 16) & 65535)::text end as "data_precision",
                   case when t.typname = 'numeric' and a.atttypmod > 0
                        then ((a.atttypmod - 4) & 65535)::text end as "data_scale",
                   a.attnum as "ordinal_position"
            from pg_attribute a
            join pg_class c on c.oid = a.attrelid
            join pg_namespace n on n.oid = c.relnamespace
            join pg_type t on t.oid = a.atttypid
            where a.attnum > 0
              and not a.attisdropped
              and c.relkind in ({})
            {}
            order by c.relname,
                     a.attnum
        "#,
                relkinds,
                filter.clause("n.nspname", "c.relname", DEFAULT_SCHEMA)
            ))
            .await
    }

    /// 主键 / 唯一约束列表，`contype` 为 'p' 或 'u'。
    async fn key_constraints(&self, contype: &str, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.conname as "constraint_name",
                   t.relname as "table_name",
                   n.nspname as "table_schema"
            from pg_constraint c
            join pg_class t on t.oid = c.conrelid
            join pg_namespace n on n.oid = t.relnamespace
            where c.contype = '{}'
            {}
            order by n.nspname,
                     t.relname,
                     c.conname
        "#,
                contype,
                filter.clause("n.nspname", "t.relname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn key_constraint_columns(
        &self,
        contype: &str,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.conname as "constraint_name",
                   a.attname as "column_name",
                   k.ord as "ordinal_position"
            from pg_constraint c
            join pg_class t on t.oid = c.conrelid
            join pg_namespace n on n.oid = t.relnamespace
            cross join lateral unnest(c.conkey) with ordinality as k(attnum, ord)
            join pg_attribute a on a.attrelid = c.conrelid and a.attnum = k.attnum
            where c.contype = '{}'
            {}{}
            order by c.conname,
                     k.ord
        "#,
                contype,
                filter.clause("n.nspname", "t.relname", DEFAULT_SCHEMA),
                names_clause("c.conname", names)
            ))
            .await
    }

    /// CHECK / EXCLUDE 约束，定义由 `pg_get_constraintdef` 给出。
    async fn constraint_definitions(
        &self,
        contype: &str,
        definition_column: &str,
        filter: &ObjectFilter,
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.conname as "constraint_name",
                   t.relname as "table_name",
                   n.nspname as "table_schema",
                   pg_get_constraintdef(c.oid) as "{}"
            from pg_constraint c
            join pg_class t on t.oid = c.conrelid
            join pg_namespace n on n.oid = t.relnamespace
            where c.contype = '{}'
            {}
            order by n.nspname,
                     t.relname,
                     c.conname
        "#,
                definition_column,
                contype,
                filter.clause("n.nspname", "t.relname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn table_ddl(&self, schema: Option<&str>, table: &str) -> AppResult<String> {
        let fields = self
            .query_tables_fields(&ObjectFilter::table(Some(self.schema_of(schema)), table))
            .await?;
        if fields.is_empty() {
            return Err(AppError::ObjectNotFound(format!(
                "Object {} does not exist anymore. Please refresh the tree view.",
                table
            )));
        }
        let constraints = self
            .conn
            .query(&format!(
                r#"
            select c.conname as "constraint_name",
                   pg_get_constraintdef(c.oid) as "definition"
            from pg_constraint c
            where c.conrelid = {}
            order by case c.contype when 'p' then 0 when 'u' then 1 when 'f' then 2 else 3 end,
                     c.conname
        "#,
                self.regclass(schema, table)
            ))
            .await?;

        let mut lines = Vec::with_capacity(fields.len() + constraints.len());
        for row in 0..fields.len() {
            let not_null = if fields.text(row, "nullable") == "NO" {
                " NOT NULL"
            } else {
                ""
            };
            lines.push(format!(
                "    {} {}{}",
                ident(&fields.text(row, "column_name")),
                fields.text(row, "data_type"),
                not_null
            ));
        }
        for row in 0..constraints.len() {
            lines.push(format!(
                "    CONSTRAINT {} {}",
                ident(&constraints.text(row, "constraint_name")),
                constraints.text(row, "definition")
            ));
        }
        Ok(format!(
            "CREATE TABLE {} (\n{}\n);\n",
            self.target(schema, table),
            lines.join(",\n")
        ))
    }

    async fn sequence_ddl(&self, schema: Option<&str>, sequence: &str) -> AppResult<String> {
        let seq = self
            .conn
            .query(&format!(
                r#"
            select start_value as "start_value",
                   min_value as "min_value",
                   max_value as "max_value",
                   increment_by as "increment_by",
                   cache_size as "cache_size",
                   cycle as "cycle"
            from pg_sequences
            where schemaname = {}
              and sequencename = {}
        "#,
                literal(self.schema_of(schema)),
                literal(sequence)
            ))
            .await?;
        if seq.is_empty() {
            return Ok(String::new());
        }
        let cycle = if first_text(&seq, "cycle") == "true" {
            "CYCLE"
        } else {
            "NO CYCLE"
        };
        Ok(format!(
            "CREATE SEQUENCE {}\n    INCREMENT BY {}\n    MINVALUE {}\n    MAXVALUE {}\n    START WITH {}\n    CACHE {}\n    {};\n",
            self.target(schema, sequence),
            first_text(&seq, "increment_by"),
            first_text(&seq, "min_value"),
            first_text(&seq, "max_value"),
            first_text(&seq, "start_value"),
            first_text(&seq, "cache_size"),
            cycle
        ))
    }

    fn relation_properties_sql(&self, relkind: &str, schema: &str, name: &str) -> String {
        format!(
            r#"
                select n.nspname as "Schema",
                       c.relname as "Name",
                       pg_get_userbyid(c.relowner) as "Owner",
                       c.oid::text as "OID",
                       c.reltuples::bigint as "Estimate Count",
                       pg_size_pretty(pg_relation_size(c.oid)) as "Size",
                       pg_size_pretty(pg_total_relation_size(c.oid)) as "Total Size",
                       c.relhasindex as "Has Indexes",
                       c.relkind = 'p' as "Partitioned",
                       obj_description(c.oid, 'pg_class') as "Comment"
                from pg_class c
                join pg_namespace n on n.oid = c.relnamespace
                where c.relkind in ({})
                  and n.nspname = {}
                  and c.relname = {}
            "#,
            relkind,
            literal(schema),
            literal(name)
        )
    }
}

#[async_trait]
impl DatabaseAdapter for PostgresAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn features(&self) -> Features {
        Features {
            has_schema: true,
            has_functions: true,
            has_procedures: true,
            has_packages: false,
            has_sequences: true,
            has_primary_keys: true,
            has_foreign_keys: true,
            has_uniques: true,
            has_indexes: true,
            has_checks: true,
            has_excludes: true,
            has_rules: true,
            has_triggers: true,
            has_partitions: true,
            has_statistics: true,
            has_update_rule: true,
        }
    }

    fn commands(&self) -> Commands {
        Commands {
            can_alter_type: true,
            alter_type_command: Some("alter table #p_table_name# alter column #p_column_name# type #p_new_data_type#"),
            can_alter_nullable: true,
            set_nullable_command: Some("alter table #p_table_name# alter column #p_column_name# drop not null"),
            drop_nullable_command: Some("alter table #p_table_name# alter column #p_column_name# set not null"),
            can_rename_column: true,
            rename_column_command: Some("alter table #p_table_name# rename column #p_column_name# to #p_new_column_name#"),
            add_column_command: "alter table #p_table_name# add column #p_column_name# #p_data_type# #p_nullable#",
            ..Commands::standard().with_constraints()
        }
    }

    fn console_help(&self) -> &'static str {
        "Console tab. Type the commands in the editor below this box. \\? to view command list."
    }

    fn active(&self) -> &ActiveParams {
        &self.active
    }

    fn connection(&self) -> &Connection {
        &self.conn
    }

    fn default_schema(&self) -> String {
        DEFAULT_SCHEMA.to_string()
    }

    async fn get_version(&self) -> AppResult<String> {
        let info = self.load_version().await?;
        Ok(format!("PostgreSQL {}", info.version))
    }

    async fn get_user_super(&self) -> bool {
        match self
            .conn
            .execute_scalar("select rolsuper from pg_roles where rolname = current_user")
            .await
        {
            Ok(value) => scalar_text(&value) == "true",
            Err(e) => {
                debug!(error = %e, "无法读取 rolsuper");
                false
            }
        }
    }

    async fn version_num(&self) -> Option<u32> {
        match self.version_info().await {
            Ok(info) => info.version_num,
            Err(e) => {
                debug!(error = %e, "无法读取 server_version_num");
                None
            }
        }
    }

    async fn major_version(&self) -> AppResult<String> {
        Ok(self.version_info().await?.major_version)
    }

    /// `LINE n:` 行号；列为插入符相对该行正文的偏移。
    fn get_error_position(&self, message: &str, _sql: &str) -> Option<ErrorPosition> {
        let row: u32 = LINE_NO.captures(message)?.get(1)?.as_str().parse().ok()?;
        let marker = format!("LINE {}: ", row);
        let mut lines = message.lines();
        let line = lines.find(|l| l.contains(&marker))?;
        let prefix = line.find(&marker)? + marker.len();
        let col = lines
            .next()
            .and_then(|caret| caret.find('^'))
            .map(|pos| pos.saturating_sub(prefix) as u32)
            .unwrap_or(0);
        Some(ErrorPosition { row, col })
    }

    async fn query_roles(&self) -> AppResult<DataTable> {
        self.conn
            .query(
                r#"
            select quote_ident(rolname) as "role_name"
            from pg_roles
            order by rolname
        "#,
            )
            .await
    }

    async fn query_tablespaces(&self) -> AppResult<DataTable> {
        self.conn
            .query(
                r#"
            select quote_ident(spcname) as "tablespace_name"
            from pg_tablespace
            order by spcname
        "#,
            )
            .await
    }

    async fn query_databases(&self) -> AppResult<DataTable> {
        self.conn
            .query(
                r#"
            select quote_ident(datname) as "database_name"
            from pg_database
            where not datistemplate
            order by datname
        "#,
            )
            .await
    }

    async fn query_schemas(&self) -> AppResult<DataTable> {
        self.conn
            .query(
                r#"
            select nspname as "schema_name"
            from pg_namespace
            where nspname not in ('information_schema', 'pg_toast')
              and nspname not like 'pg_temp%'
              and nspname not like 'pg_toast_temp%'
            order by nspname
        "#,
            )
            .await
    }

    async fn query_tables(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.relations("'r', 'p'", filter).await
    }

    async fn query_tables_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.relation_fields("'r', 'p'", filter).await
    }

    async fn query_tables_foreign_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.conname as "constraint_name",
                   t.relname as "table_name",
                   rt.relname as "r_table_name",
                   n.nspname as "table_schema",
                   rn.nspname as "r_table_schema",
                   {} as "update_rule",
                   {} as "delete_rule"
            from pg_constraint c
            join pg_class t on t.oid = c.conrelid
            join pg_namespace n on n.oid = t.relnamespace
            join pg_class rt on rt.oid = c.confrelid
            join pg_namespace rn on rn.oid = rt.relnamespace
            where c.contype = 'f'
            {}
            order by c.conname,
                     t.relname
        "#,
                rule_case("c.confupdtype"),
                rule_case("c.confdeltype"),
                filter.clause("n.nspname", "t.relname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn query_tables_foreign_keys_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.conname as "constraint_name",
                   t.relname as "table_name",
                   rt.relname as "r_table_name",
                   a.attname as "column_name",
                   ra.attname as "r_column_name",
                   n.nspname as "table_schema",
                   rn.nspname as "r_table_schema",
                   {} as "update_rule",
                   {} as "delete_rule",
                   k.ord as "ordinal_position"
            from pg_constraint c
            join pg_class t on t.oid = c.conrelid
            join pg_namespace n on n.oid = t.relnamespace
            join pg_class rt on rt.oid = c.confrelid
            join pg_namespace rn on rn.oid = rt.relnamespace
            cross join lateral unnest(c.conkey, c.confkey) with ordinality as k(attnum, r_attnum, ord)
            join pg_attribute a on a.attrelid = c.conrelid and a.attnum = k.attnum
            join pg_attribute ra on ra.attrelid = c.confrelid and ra.attnum = k.r_attnum
            where c.contype = 'f'
            {}{}
            order by c.conname,
                     t.relname,
                     k.ord
        "#,
                rule_case("c.confupdtype"),
                rule_case("c.confdeltype"),
                filter.clause("n.nspname", "t.relname", DEFAULT_SCHEMA),
                names_clause("c.conname", names)
            ))
            .await
    }

    async fn query_tables_primary_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.key_constraints("p", filter).await
    }

    async fn query_tables_primary_keys_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.key_constraint_columns("p", filter, names).await
    }

    async fn query_tables_uniques(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.key_constraints("u", filter).await
    }

    async fn query_tables_uniques_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.key_constraint_columns("u", filter, names).await
    }

    async fn query_tables_indexes(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select n.nspname as "schema_name",
                   t.relname as "table_name",
                   i.relname as "index_name",
                   case when x.indisunique then 'Unique' else 'Non Unique' end as "uniqueness",
                   array(
                       select a.attname::text
                       from unnest(x.indkey::int2[]) with ordinality as k(attnum, ord)
                       join pg_attribute a on a.attrelid = t.oid and a.attnum = k.attnum
                       order by k.ord
                   ) as "columns",
                   x.indisprimary as "is_primary",
                   am.amname as "index_type"
            from pg_index x
            join pg_class i on i.oid = x.indexrelid
            join pg_class t on t.oid = x.indrelid
            join pg_namespace n on n.oid = t.relnamespace
            join pg_am am on am.oid = i.relam
            where t.relkind in ('r', 'p', 'm')
            {}
            order by n.nspname,
                     t.relname,
                     i.relname
        "#,
                filter.clause("n.nspname", "t.relname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn query_tables_indexes_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select i.relname as "index_name",
                   a.attname as "column_name",
                   k.ord as "seq_in_index"
            from pg_index x
            join pg_class i on i.oid = x.indexrelid
            join pg_class t on t.oid = x.indrelid
            join pg_namespace n on n.oid = t.relnamespace
            cross join lateral unnest(x.indkey::int2[]) with ordinality as k(attnum, ord)
            join pg_attribute a on a.attrelid = t.oid and a.attnum = k.attnum
            where 1 = 1
            {}{}
            order by i.relname,
                     k.ord
        "#,
                filter.clause("n.nspname", "t.relname", DEFAULT_SCHEMA),
                names_clause("i.relname", names)
            ))
            .await
    }

    async fn query_tables_checks(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.constraint_definitions("c", "constraint_source", filter).await
    }

    async fn query_tables_excludes(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.constraint_definitions("x", "definition", filter).await
    }

    async fn query_tables_rules(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select r.rulename as "rule_name",
                   r.tablename as "table_name",
                   r.schemaname as "table_schema"
            from pg_rules r
            where 1 = 1
            {}
            order by r.schemaname,
                     r.tablename,
                     r.rulename
        "#,
                filter.clause("r.schemaname", "r.tablename", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn query_tables_triggers(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select t.tgname as "trigger_name",
                   c.relname as "table_name",
                   n.nspname as "table_schema",
                   t.tgenabled <> 'D' as "enabled",
                   p.proname as "trigger_function_name",
                   pn.nspname as "trigger_function_schema"
            from pg_trigger t
            join pg_class c on c.oid = t.tgrelid
            join pg_namespace n on n.oid = c.relnamespace
            join pg_proc p on p.oid = t.tgfoid
            join pg_namespace pn on pn.oid = p.pronamespace
            where not t.tgisinternal
            {}
            order by n.nspname,
                     c.relname,
                     t.tgname
        "#,
                filter.clause("n.nspname", "c.relname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn query_views(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.relations("'v'", filter).await
    }

    async fn query_view_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.relation_fields("'v', 'm'", filter).await
    }

    async fn get_view_definition(&self, schema: Option<&str>, view: &str) -> AppResult<String> {
        let definition = self
            .conn
            .execute_scalar(&format!("select pg_get_viewdef({})", self.regclass(schema, view)))
            .await?;
        Ok(format!(
            "CREATE OR REPLACE VIEW {} AS\n{}",
            self.target(schema, view),
            scalar_text(&definition)
        ))
    }

    async fn query_functions(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.routines("f", filter).await
    }

    async fn query_function_fields(
        &self,
        schema: Option<&str>,
        function: &str,
    ) -> AppResult<DataTable> {
        self.routine_fields(true, schema, function).await
    }

    async fn get_function_definition(
        &self,
        schema: Option<&str>,
        function: &str,
    ) -> AppResult<String> {
        self.routine_definition(schema, function).await
    }

    async fn query_procedures(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.routines("p", filter).await
    }

    async fn query_procedure_fields(
        &self,
        schema: Option<&str>,
        procedure: &str,
    ) -> AppResult<DataTable> {
        self.routine_fields(false, schema, procedure).await
    }

    async fn get_procedure_definition(
        &self,
        schema: Option<&str>,
        procedure: &str,
    ) -> AppResult<String> {
        self.routine_definition(schema, procedure).await
    }

    async fn query_sequences(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select c.relname as "sequence_name",
                   n.nspname as "sequence_schema"
            from pg_class c
            join pg_namespace n on n.oid = c.relnamespace
            where c.relkind = 'S'
            {}
            order by 2, 1
        "#,
                filter.schema_clause("n.nspname", DEFAULT_SCHEMA)
            ))
            .await
    }

    async fn query_data_limited(&self, sql: &str, count: usize) -> AppResult<DataTable> {
        debug!(dialect = %self.dialect(), count, "限量查询");
        self.conn
            .query_block_or_cancel(&format!("select * from ( {} ) t limit {}", sql, count), count)
            .await
    }

    async fn query_table_records(&self, request: &TableRecordsRequest) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                "\n            select {}\n            from {} t\n            {}\n            limit {}\n        ",
                request.columns, request.table, request.filter, request.limit
            ))
            .await
    }

    fn dml_target(&self, schema: Option<&str>, table: &str) -> String {
        self.target(schema, table)
    }

    async fn get_properties(&self, object: &ObjectRefQuery) -> AppResult<Option<DataTable>> {
        let schema = self.schema_of(object.schema.as_deref());
        let name = object.object.as_str();
        let sql = match object.object_type.as_str() {
            "table" => self.relation_properties_sql("'r', 'p'", schema, name),
            "view" => self.relation_properties_sql("'v'", schema, name),
            "mview" => self.relation_properties_sql("'m'", schema, name),
            "function" | "procedure" => format!(
                r#"
                select n.nspname as "Schema",
                       p.proname as "Name",
                       p.oid::regprocedure::text as "Signature",
                       pg_get_userbyid(p.proowner) as "Owner",
                       l.lanname as "Language",
                       format_type(p.prorettype, null) as "Return Type",
                       case p.provolatile
                           when 'i' then 'IMMUTABLE'
                           when 's' then 'STABLE'
                           else 'VOLATILE'
                       end as "Volatility",
                       p.prosecdef as "Security Definer",
                       obj_description(p.oid, 'pg_proc') as "Comment"
                from pg_proc p
                join pg_namespace n on n.oid = p.pronamespace
                join pg_language l on l.oid = p.prolang
                where p.oid = {}
            "#,
                self.routine_oid(Some(schema), name)
            ),
            "sequence" => format!(
                r#"
                select schemaname as "Schema",
                       sequencename as "Sequence",
                       sequenceowner as "Owner",
                       data_type::text as "Data Type",
                       start_value as "Start Value",
                       min_value as "Min Value",
                       max_value as "Max Value",
                       increment_by as "Increment By",
                       cycle as "Cycle",
                       cache_size as "Cache Size",
                       last_value as "Last Value"
                from pg_sequences
                where schemaname = {}
                  and sequencename = {}
            "#,
                literal(schema),
                literal(name)
            ),
            "index" => format!(
                r#"
                select n.nspname as "Schema",
                       i.relname as "Index",
                       t.relname as "Table",
                       am.amname as "Method",
                       x.indisunique as "Unique",
                       x.indisprimary as "Primary",
                       pg_size_pretty(pg_relation_size(i.oid)) as "Size",
                       pg_get_indexdef(i.oid) as "Definition"
                from pg_index x
                join pg_class i on i.oid = x.indexrelid
                join pg_class t on t.oid = x.indrelid
                join pg_namespace n on n.oid = i.relnamespace
                join pg_am am on am.oid = i.relam
                where n.nspname = {}
                  and i.relname = {}
            "#,
                literal(schema),
                literal(name)
            ),
            "role" => format!(
                r#"
                select rolname as "Role",
                       oid::text as "OID",
                       rolsuper as "Superuser",
                       rolinherit as "Inherit",
                       rolcreaterole as "Create Role",
                       rolcreatedb as "Create Database",
                       rolcanlogin as "Can Login",
                       rolreplication as "Replication",
                       rolconnlimit as "Connection Limit",
                       rolvaliduntil::text as "Valid Until"
                from pg_roles
                where rolname = {}
            "#,
                literal(name)
            ),
            "database" => format!(
                r#"
                select d.datname as "Database",
                       d.oid::text as "OID",
                       pg_get_userbyid(d.datdba) as "Owner",
                       pg_encoding_to_char(d.encoding) as "Encoding",
                       d.datcollate::text as "LC_COLLATE",
                       d.datctype::text as "LC_CTYPE",
                       d.datconnlimit as "Connection Limit",
                       s.spcname as "Tablespace",
                       pg_size_pretty(pg_database_size(d.oid)) as "Size"
                from pg_database d
                join pg_tablespace s on s.oid = d.dattablespace
                where d.datname = {}
            "#,
                literal(name)
            ),
            "schema" => format!(
                r#"
                select nspname as "Schema",
                       oid::text as "OID",
                       pg_get_userbyid(nspowner) as "Owner",
                       obj_description(oid, 'pg_namespace') as "Comment"
                from pg_namespace
                where nspname = {}
            "#,
                literal(name)
            ),
            "tablespace" => format!(
                r#"
                select spcname as "Tablespace",
                       oid::text as "OID",
                       pg_get_userbyid(spcowner) as "Owner",
                       pg_tablespace_location(oid) as "Location",
                       pg_size_pretty(pg_tablespace_size(oid)) as "Size"
                from pg_tablespace
                where spcname = {}
            "#,
                literal(name)
            ),
            _ => return Ok(None),
        };
        let result = self.conn.query(&sql).await?;
        transposed(result, name).map(Some)
    }

    async fn get_ddl(&self, object: &ObjectRefQuery) -> AppResult<String> {
        let schema = object.schema.as_deref();
        let name = object.object.as_str();
        match object.object_type.as_str() {
            "table" => self.table_ddl(schema, name).await,
            "view" => self.get_view_definition(schema, name).await,
            "mview" => {
                let definition = self
                    .conn
                    .execute_scalar(&format!("select pg_get_viewdef({})", self.regclass(schema, name)))
                    .await?;
                Ok(format!(
                    "CREATE MATERIALIZED VIEW {} AS\n{}",
                    self.target(schema, name),
                    scalar_text(&definition)
                ))
            }
            "function" | "procedure" => self.routine_definition(schema, name).await,
            "index" => {
                let definition = self
                    .conn
                    .execute_scalar(&format!("select pg_get_indexdef({})", self.regclass(schema, name)))
                    .await?;
                Ok(format!("{};\n", scalar_text(&definition)))
            }
            "trigger" => {
                let definition = self
                    .conn
                    .execute_scalar(&format!(
                        r#"
                select pg_get_triggerdef(t.oid)
                from pg_trigger t
                where t.tgrelid = {}
                  and t.tgname = {}
            "#,
                        self.regclass(schema, object.table.as_deref().unwrap_or_default()),
                        literal(name)
                    ))
                    .await?;
                Ok(format!("{};\n", scalar_text(&definition)))
            }
            "sequence" => self.sequence_ddl(schema, name).await,
            _ => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testing::{table, ScriptedDriver};

    fn adapter() -> (Arc<ScriptedDriver>, PostgresAdapter) {
        let driver = Arc::new(ScriptedDriver::new());
        let params = ConnectionParams {
            server: "pg.local".into(),
            user: "app".into(),
            ..Default::default()
        };
        let adapter = PostgresAdapter::with_driver(&params, driver.clone(), None);
        (driver, adapter)
    }

    fn object(object_type: &str, name: &str) -> ObjectRefQuery {
        ObjectRefQuery {
            schema: Some("sales".into()),
            table: Some("orders".into()),
            object: name.into(),
            object_type: object_type.into(),
        }
    }

    #[test]
    fn test_defaults() {
        let (_, a) = adapter();
        assert_eq!(a.active().port, "5432");
        assert_eq!(a.get_name(), "postgres");
        assert_eq!(a.default_schema(), "public");
        assert!(!a.features().has_packages);
        assert!(a.features().has_excludes);
        assert_eq!(
            a.commands().rename_column_command,
            Some("alter table #p_table_name# rename column #p_column_name# to #p_new_column_name#")
        );
        assert_eq!(
            a.commands().drop_column_command,
            Some("alter table #p_table_name# drop column #p_column_name#")
        );
        assert_eq!(
            a.handle_update_delete_rules("CASCADE", "NO ACTION"),
            " on update CASCADE  on delete NO ACTION "
        );
    }

    #[test]
    fn test_major_of() {
        assert_eq!(major_of(160_002), "16");
        assert_eq!(major_of(100_000), "10");
        assert_eq!(major_of(90_624), "9.6");
    }

    #[test]
    fn test_error_position_from_caret() {
        let (_, a) = adapter();
        let msg = "relation \"tabl\" does not exist\nLINE 2: from tabl x\n             ^";
        assert_eq!(a.get_error_position(msg, ""), Some(ErrorPosition { row: 2, col: 5 }));
        assert_eq!(a.get_error_position("permission denied", ""), None);
    }

    #[tokio::test]
    async fn test_version_is_cached_for_templates() {
        let (driver, a) = adapter();
        driver.push(table(&["server_version"], &[&["16.2"]]));
        driver.push(table(&["server_version_num"], &[&["160002"]]));
        assert_eq!(a.get_version().await.unwrap(), "PostgreSQL 16.2");

        let rendered = a.template("create_database").await.unwrap();
        assert!(rendered.text.contains("docs/16/sql-createdatabase.html"));
        assert!(rendered.text.contains("--LOCALE locale"));
        // 模板渲染直接使用缓存，不再访问数据库
        assert_eq!(driver.statements.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_old_server_template_bucket() {
        let (driver, a) = adapter();
        driver.push(table(&["server_version"], &[&["9.6.24"]]));
        driver.push(table(&["server_version_num"], &[&["90624"]]));
        let rendered = a.template("create_database").await.unwrap();
        assert!(rendered.text.contains("docs/9.6/"));
        assert!(!rendered.text.contains("--LOCALE locale"));
    }

    #[tokio::test]
    async fn test_user_super() {
        let (driver, a) = adapter();
        driver.push(table(&["rolsuper"], &[&["true"]]));
        assert!(a.get_user_super().await);
        driver.push_err("connection refused");
        assert!(!a.get_user_super().await);
    }

    #[tokio::test]
    async fn test_catalog_filters() {
        let (driver, a) = adapter();
        a.query_tables(&ObjectFilter::default()).await.unwrap();
        let sql = driver.last_sql();
        assert!(sql.contains("c.relkind in ('r', 'p')"));
        assert!(sql.contains("and n.nspname = 'public' "));

        a.query_tables_fields(&ObjectFilter::table(Some("sales"), "orders"))
            .await
            .unwrap();
        assert!(driver
            .last_sql()
            .contains("and n.nspname = 'sales' and c.relname = 'orders' "));

        a.query_tables_uniques_columns(&ObjectFilter::all(), &["uq_a".into(), "uq_b".into()])
            .await
            .unwrap();
        let sql = driver.last_sql();
        assert!(sql.contains("c.contype = 'u'"));
        assert!(sql.contains("and c.conname in ('uq_a', 'uq_b') "));
        assert!(!sql.contains("n.nspname ="));

        a.query_tables_foreign_keys(&ObjectFilter::schema(Some("sales"))).await.unwrap();
        assert!(driver.last_sql().contains("when 'c' then 'CASCADE'"));

        a.query_tables_excludes(&ObjectFilter::default()).await.unwrap();
        assert!(driver.last_sql().contains("c.contype = 'x'"));

        a.query_tables_rules(&ObjectFilter::table(None, "orders")).await.unwrap();
        assert!(driver
            .last_sql()
            .contains("and r.schemaname = 'public' and r.tablename = 'orders' "));
    }

    #[tokio::test]
    async fn test_routines_by_kind_and_signature() {
        let (driver, a) = adapter();
        a.query_procedures(&ObjectFilter::schema(Some("sales"))).await.unwrap();
        assert!(driver.last_sql().contains("p.prokind = 'p'"));

        a.query_function_fields(Some("sales"), "sales.total(integer)").await.unwrap();
        let sql = driver.last_sql();
        assert!(sql.contains("'returns ' || format_type"));
        assert!(sql.contains("p.oid = 'sales.total(integer)'::regprocedure"));

        a.query_procedure_fields(None, "refresh").await.unwrap();
        let sql = driver.last_sql();
        assert!(!sql.contains("'returns '"));
        assert!(sql.contains("n.nspname = 'public' and p.proname = 'refresh'"));

        driver.push(table(&["pg_get_functiondef"], &[&["CREATE OR REPLACE FUNCTION sales.total() ..."]]));
        let def = a.get_function_definition(Some("sales"), "sales.total()").await.unwrap();
        assert!(def.starts_with("CREATE OR REPLACE FUNCTION"));
    }

    #[tokio::test]
    async fn test_view_definition() {
        let (driver, a) = adapter();
        driver.push(table(&["pg_get_viewdef"], &[&[" SELECT 1;"]]));
        let def = a.get_view_definition(Some("Sales"), "v_orders").await.unwrap();
        assert_eq!(def, "CREATE OR REPLACE VIEW \"Sales\".v_orders AS\n SELECT 1;");
        assert!(driver
            .last_sql()
            .contains("format('%I.%I', 'Sales', 'v_orders')::regclass"));
    }

    #[tokio::test]
    async fn test_limited_query_wraps_and_cancels() {
        let (driver, a) = adapter();
        a.query_data_limited("select 1", 5).await.unwrap();
        assert_eq!(driver.last_sql(), "select * from ( select 1 ) t limit 5");

        driver.push_err("syntax error");
        assert!(a.query_data_limited("selec", 5).await.is_err());
        assert!(*driver.cancelled.lock().unwrap());
    }

    #[tokio::test]
    async fn test_table_ddl_assembled() {
        let (driver, a) = adapter();
        driver.push(table(
            &["table_name", "column_name", "data_type", "nullable"],
            &[
                &["orders", "id", "integer", "NO"],
                &["orders", "Note", "text", "YES"],
            ],
        ));
        driver.push(table(
            &["constraint_name", "definition"],
            &[&["orders_pkey", "PRIMARY KEY (id)"]],
        ));
        let ddl = a.get_ddl(&object("table", "orders")).await.unwrap();
        assert_eq!(
            ddl,
            "CREATE TABLE sales.orders (\n    id integer NOT NULL,\n    \"Note\" text,\n    CONSTRAINT orders_pkey PRIMARY KEY (id)\n);\n"
        );

        let err = a.get_ddl(&object("table", "gone")).await.unwrap_err();
        assert!(err.to_string().starts_with("Object gone does not exist"));
    }

    #[tokio::test]
    async fn test_sequence_and_index_ddl() {
        let (driver, a) = adapter();
        driver.push(table(
            &["start_value", "min_value", "max_value", "increment_by", "cache_size", "cycle"],
            &[&["1", "1", "9223372036854775807", "1", "1", "false"]],
        ));
        let ddl = a.get_ddl(&object("sequence", "order_seq")).await.unwrap();
        assert!(ddl.starts_with("CREATE SEQUENCE sales.order_seq\n    INCREMENT BY 1"));
        assert!(ddl.ends_with("NO CYCLE;\n"));

        driver.push(table(&["pg_get_indexdef"], &[&["CREATE INDEX ix ON sales.orders USING btree (id)"]]));
        let ddl = a.get_ddl(&object("index", "ix")).await.unwrap();
        assert_eq!(ddl, "CREATE INDEX ix ON sales.orders USING btree (id);\n");

        assert_eq!(a.get_ddl(&object("rule", "r")).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_properties() {
        let (driver, a) = adapter();
        driver.push(table(&["Role", "Superuser"], &[&["app", "false"]]));
        let props = a.get_properties(&object("role", "app")).await.unwrap().unwrap();
        assert_eq!(props.column_texts("Property"), vec!["Role", "Superuser"]);
        assert!(driver.last_sql().contains("where rolname = 'app'"));

        driver.push(table(&["Schema"], &[]));
        assert!(a.get_properties(&object("table", "gone")).await.is_err());

        assert!(a.get_properties(&object("trigger", "t")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_generated_insert_quotes_target() {
        let (driver, a) = adapter();
        driver.push(table(
            &["table_name", "column_name", "data_type", "nullable"],
            &[&["Orders", "id", "integer", "NO"]],
        ));
        let sql = a.template_insert(Some("sales"), "Orders").await.unwrap();
        assert!(sql.starts_with("INSERT INTO sales.\"Orders\" (\n      id"));
        assert!(sql.contains("? -- id integer\n)"));
    }
}
