//! MariaDB / MySQL 适配器
//!
//! 两个引擎共用一套 `information_schema` 查询，[`Flavor`] 只影响版本前缀、
//! 模板注册表与序列支持（仅 MariaDB）。

use std::sync::Arc;

use async_trait::async_trait;
use common::errors::{AppError, AppResult};
use common::models::{ErrorPosition, ObjectRefQuery, TableRecordsRequest};
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::Mutex;
use tracing::debug;

use crate::adapter::{
    cell_text, scalar_text, server_url, transposed, ActiveParams, Commands, Connection,
    ConnectionParams, DatabaseAdapter, Features, ObjectFilter,
};
use crate::data_table::DataTable;
use crate::driver::{Driver, PoolSettings, SqlxDriver, SqlxEngine};
use crate::quoting::{literal, literal_list, quote_ident};
use crate::Dialect;

static AT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*\sat line (\d+)").expect("at-line pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    MariaDb,
    MySql,
}

impl Flavor {
    fn product(self) -> &'static str {
        match self {
            Flavor::MariaDb => "MariaDB",
            Flavor::MySql => "MySQL",
        }
    }
}

pub struct MySqlAdapter {
    flavor: Flavor,
    active: ActiveParams,
    conn: Connection,
}

impl MySqlAdapter {
    pub fn new(
        flavor: Flavor,
        params: &ConnectionParams,
        settings: PoolSettings,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        let active = params.resolve("3306", "");
        let driver = SqlxDriver::new(SqlxEngine::MySql, server_url("mysql", &active), settings);
        Self {
            flavor,
            active,
            conn: Connection::new(Arc::new(driver), lock),
        }
    }

    pub fn with_driver(
        flavor: Flavor,
        params: &ConnectionParams,
        driver: Arc<dyn Driver>,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        Self {
            flavor,
            active: params.resolve("3306", ""),
            conn: Connection::new(driver, lock),
        }
    }

    fn schema(&self) -> &str {
        &self.active.service
    }

    fn target(&self, schema: Option<&str>, name: &str) -> String {
        format!(
            "{}.{}",
            quote_ident(Dialect::MySql, schema.filter(|s| !s.is_empty()).unwrap_or(self.schema())),
            quote_ident(Dialect::MySql, name)
        )
    }

    async fn routines(&self, routine_type: &str, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select t.routine_schema as "schema_name",
                   t.routine_name as "id",
                   t.routine_name as "name"
            from information_schema.routines t
            where t.routine_type = '{}'
            {}
            order by 2
        "#,
                routine_type,
                filter.schema_clause("t.routine_schema", self.schema())
            ))
            .await
    }

    async fn routine_definition(
        &self,
        kind: &str,
        schema: Option<&str>,
        name: &str,
    ) -> AppResult<String> {
        let created = self
            .conn
            .query(&format!("show create {} {}", kind, self.target(schema, name)))
            .await?;
        Ok(format!(
            "--DROP {} {};\n{}",
            kind.to_uppercase(),
            name,
            cell_text(&created, 2)
        ))
    }

    fn routine_properties_sql(&self, routine_type: &str, schema: &str, name: &str) -> String {
        format!(
            r#"
                select routine_schema as "Routine Schema",
                       routine_name as "Routine Name",
                       routine_type as "Routine Type",
                       data_type as "Data Type",
                       character_maximum_length as "Character Maximum Length",
                       character_octet_length as "Character Octet Length",
                       numeric_precision as "Numeric Precision",
                       numeric_scale as "Numeric Scale",
                       datetime_precision as "Datetime Precision",
                       character_set_name as "Character Set Name",
                       collation_name as "Collation Name",
                       routine_body as "Routine Body",
                       external_name as "External Name",
                       external_language as "External Language",
                       parameter_style as "Parameter Style",
                       is_deterministic as "Is Deterministic",
                       sql_data_access as "SQL Data Access",
                       sql_path as "SQL Path",
                       security_type as "Security Type",
                       created as "Created",
                       last_altered as "Last Altered",
                       character_set_client as "Character Set Client",
                       collation_connection as "Collation Connection",
                       database_collation as "Database Collation"
                from information_schema.routines
                where routine_type = '{}'
                  and routine_schema = {}
                  and routine_name = {}
            "#,
            routine_type,
            literal(schema),
            literal(name)
        )
    }
}

/// `and {column} in (...)` for a non-empty name list.
fn names_clause(column: &str, names: &[String]) -> String {
    if names.is_empty() {
        String::new()
    } else {
        format!("and {} in ({}) ", column, literal_list(names))
    }
}

#[async_trait]
impl DatabaseAdapter for MySqlAdapter {
    fn dialect(&self) -> Dialect {
        match self.flavor {
            Flavor::MariaDb => Dialect::MariaDb,
            Flavor::MySql => Dialect::MySql,
        }
    }

    fn features(&self) -> Features {
        Features {
            has_schema: true,
            has_functions: true,
            has_procedures: true,
            has_sequences: self.flavor == Flavor::MariaDb,
            has_primary_keys: true,
            has_foreign_keys: true,
            has_uniques: true,
            has_indexes: true,
            has_update_rule: true,
            ..Default::default()
        }
    }

    fn commands(&self) -> Commands {
        Commands {
            can_alter_type: true,
            alter_type_command: Some("alter table #p_table_name# modify #p_column_name# #p_new_data_type#"),
            can_alter_nullable: true,
            set_nullable_command: Some("alter table #p_table_name# modify #p_column_name# null"),
            drop_nullable_command: Some("alter table #p_table_name# modify #p_column_name# not null"),
            can_rename_column: true,
            rename_column_command: Some("alter table #p_table_name# rename column #p_column_name# to #p_new_column_name#"),
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
        self.active.service.clone()
    }

    async fn get_version(&self) -> AppResult<String> {
        let version = self.conn.execute_scalar("select version()").await?;
        Ok(format!("{} {}", self.flavor.product(), scalar_text(&version)))
    }

    async fn get_user_super(&self) -> bool {
        let sql = format!(
            "select super_priv as \"super_priv\" from mysql.user where user = {}",
            literal(&self.active.user)
        );
        match self.conn.execute_scalar(&sql).await {
            Ok(value) => scalar_text(&value) == "Y",
            Err(e) => {
                debug!(error = %e, "无法读取 super_priv");
                false
            }
        }
    }

    fn get_error_position(&self, message: &str, _sql: &str) -> Option<ErrorPosition> {
        let row = AT_LINE.captures(message)?.get(1)?.as_str().parse().ok()?;
        Some(ErrorPosition { row, col: 0 })
    }

    async fn query_roles(&self) -> AppResult<DataTable> {
        self.conn
            .query(
                r#"
            select concat('''',user,'''','@','''',host,'''') as "role_name"
            from mysql.user
            order by 1
        "#,
            )
            .await
    }

    async fn query_databases(&self) -> AppResult<DataTable> {
        self.conn.query("show databases").await
    }

    async fn query_schemas(&self) -> AppResult<DataTable> {
        self.conn
            .query(r#"select schema_name as "schema_name" from information_schema.schemata"#)
            .await
    }

    async fn query_tables(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select table_name as "table_name",
                   table_schema as "table_schema"
            from information_schema.tables
            where table_type in ('BASE TABLE', 'SYSTEM VIEW')
            {}
            order by 2, 1
        "#,
                filter.schema_clause("table_schema", self.schema())
            ))
            .await
    }

    async fn query_tables_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select distinct c.table_name as "table_name",
                   c.column_name as "column_name",
                   c.data_type as "data_type",
                   c.is_nullable as "nullable",
                   c.character_maximum_length as "data_length",
                   c.numeric_precision as "data_precision",
                   c.numeric_scale as "data_scale",
                   c.ordinal_position as "ordinal_position"
            from information_schema.columns c,
                 information_schema.tables t
            where t.table_name = c.table_name
              and t.table_schema = c.table_schema
              and t.table_type in ('BASE TABLE', 'SYSTEM VIEW')
            {}
            order by c.table_name,
                     c.ordinal_position
        "#,
                filter.for_alias("t.", self.schema())
            ))
            .await
    }

    async fn query_tables_foreign_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select distinct i.constraint_name as "constraint_name",
                   i.table_name as "table_name",
                   k.referenced_table_name as "r_table_name",
                   k.table_schema as "table_schema",
                   k.referenced_table_schema as "r_table_schema",
                   r.update_rule as "update_rule",
                   r.delete_rule as "delete_rule"
            from information_schema.table_constraints i
            left join information_schema.key_column_usage k on i.constraint_name = k.constraint_name
            left join information_schema.referential_constraints r on i.constraint_name = r.constraint_name
            where i.constraint_type = 'FOREIGN KEY'
            {}
            order by i.constraint_name,
                     i.table_name
        "#,
                filter.for_alias("i.", self.schema())
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
            select distinct i.constraint_name as "constraint_name",
                   i.table_name as "table_name",
                   k.referenced_table_name as "r_table_name",
                   k.column_name as "column_name",
                   k.referenced_column_name as "r_column_name",
                   k.table_schema as "table_schema",
                   k.referenced_table_schema as "r_table_schema",
                   r.update_rule as "update_rule",
                   r.delete_rule as "delete_rule",
                   k.ordinal_position as "ordinal_position"
            from information_schema.table_constraints i
            left join information_schema.key_column_usage k on i.constraint_name = k.constraint_name
            left join information_schema.referential_constraints r on i.constraint_name = r.constraint_name
            where i.constraint_type = 'FOREIGN KEY'
            {}{}
            order by i.constraint_name,
                     i.table_name,
                     k.ordinal_position
        "#,
                filter.for_alias("i.", self.schema()),
                names_clause("i.constraint_name", names)
            ))
            .await
    }

    async fn query_tables_primary_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select distinct concat('pk_', t.table_name) as "constraint_name",
                   t.table_name as "table_name",
                   t.table_schema as "table_schema"
            from information_schema.table_constraints t
            where t.constraint_type = 'PRIMARY KEY'
            {}
            order by t.table_schema,
                     t.table_name
        "#,
                filter.for_alias("t.", self.schema())
            ))
            .await
    }

    async fn query_tables_primary_keys_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select distinct k.column_name as "column_name",
                   k.ordinal_position as "ordinal_position"
            from information_schema.table_constraints t
            join information_schema.key_column_usage k
            using (constraint_name, table_schema, table_name)
            where t.constraint_type = 'PRIMARY KEY'
            {}{}
            order by k.ordinal_position
        "#,
                filter.for_alias("t.", self.schema()),
                names_clause("concat('pk_', t.table_name)", names)
            ))
            .await
    }

    async fn query_tables_uniques(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select distinct t.constraint_name as "constraint_name",
                   t.table_name as "table_name",
                   t.table_schema as "table_schema"
            from information_schema.table_constraints t
            where t.constraint_type = 'UNIQUE'
            {}
            order by t.table_schema,
                     t.table_name
        "#,
                filter.for_alias("t.", self.schema())
            ))
            .await
    }

    async fn query_tables_uniques_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select distinct t.constraint_name as "constraint_name",
                   k.column_name as "column_name",
                   k.ordinal_position as "ordinal_position"
            from information_schema.table_constraints t
            join information_schema.key_column_usage k
            using (constraint_name, table_schema, table_name)
            where t.constraint_type = 'UNIQUE'
            {}{}
            order by k.ordinal_position
        "#,
                filter.for_alias("t.", self.schema()),
                names_clause("t.constraint_name", names)
            ))
            .await
    }

    async fn query_tables_indexes(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select t.table_schema as "schema_name",
                   t.table_name as "table_name",
                   (case when t.index_name = 'PRIMARY' then concat('pk_', t.table_name) else t.index_name end) as "index_name",
                   case when t.non_unique = 1 then 'Non Unique' else 'Unique' end as "uniqueness",
                   JSON_ARRAYAGG(t.column_name) as "columns",
                   case
                       when tc.constraint_type = 'PRIMARY KEY' then TRUE
                       else FALSE
                   end as "is_primary",
                   t.index_type as "index_type"
            from information_schema.statistics t
            left join
                information_schema.table_constraints tc
                ON t.table_schema = tc.table_schema
                AND t.table_name = tc.table_name
                AND t.index_name = tc.constraint_name
            where 1 = 1
            {}
            GROUP BY t.table_schema, t.table_name, t.index_name, t.non_unique, tc.constraint_type, t.index_type
            ORDER BY t.table_schema, t.table_name, t.index_name
        "#,
                filter.for_alias("t.", self.schema())
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
            select distinct t.column_name as "column_name",
                   t.seq_in_index as "seq_in_index"
            from information_schema.statistics t
            where 1 = 1
            {}{}
            order by t.seq_in_index
        "#,
                filter.for_alias("t.", self.schema()),
                names_clause(
                    "(case when t.index_name = 'PRIMARY' then concat('pk_', t.table_name) else t.index_name end)",
                    names
                )
            ))
            .await
    }

    async fn query_functions(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.routines("FUNCTION", filter).await
    }

    async fn query_function_fields(
        &self,
        schema: Option<&str>,
        function: &str,
    ) -> AppResult<DataTable> {
        let schema = literal(schema.filter(|s| !s.is_empty()).unwrap_or(self.schema()));
        let function = literal(function);
        self.conn
            .query(&format!(
                r#"
            select 'O' as "type",
                   concat('returns ', t.data_type) as "name",
                   0 as "seq"
            from information_schema.routines t
            where t.routine_type = 'FUNCTION'
              and t.routine_schema = {schema}
              and t.specific_name = {function}
            union
            select (case t.parameter_mode
                      when 'IN' then 'I'
                      when 'OUT' then 'O'
                      else 'R'
                    end) as "type",
                   concat(t.parameter_name, ' ', t.data_type) as "name",
                   t.ordinal_position+1 as "seq"
            from information_schema.parameters t
            where t.ordinal_position > 0
              and t.specific_schema = {schema}
              and t.specific_name = {function}
            order by 3 desc
        "#
            ))
            .await
    }

    async fn get_function_definition(
        &self,
        schema: Option<&str>,
        function: &str,
    ) -> AppResult<String> {
        self.routine_definition("function", schema, function).await
    }

    async fn query_procedures(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.routines("PROCEDURE", filter).await
    }

    async fn query_procedure_fields(
        &self,
        schema: Option<&str>,
        procedure: &str,
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select (case t.parameter_mode
                      when 'IN' then 'I'
                      when 'OUT' then 'O'
                      else 'R'
                    end) as "type",
                   concat(t.parameter_name, ' ', t.data_type) as "name",
                   t.ordinal_position+1 as "seq"
            from information_schema.parameters t
            where t.specific_schema = {}
              and t.specific_name = {}
            order by 3 desc
        "#,
                literal(schema.filter(|s| !s.is_empty()).unwrap_or(self.schema())),
                literal(procedure)
            ))
            .await
    }

    async fn get_procedure_definition(
        &self,
        schema: Option<&str>,
        procedure: &str,
    ) -> AppResult<String> {
        self.routine_definition("procedure", schema, procedure).await
    }

    async fn query_sequences(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        if self.flavor != Flavor::MariaDb {
            return Err(AppError::UnsupportedDatabaseType(
                "query_sequences is not available for mysql".to_string(),
            ));
        }
        self.conn
            .query(&format!(
                r#"
            select table_name as "sequence_name",
                   table_schema as "sequence_schema"
            from information_schema.tables
            where table_type = 'SEQUENCE'
            {}
            order by 2, 1
        "#,
                filter.schema_clause("table_schema", self.schema())
            ))
            .await
    }

    async fn query_views(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select table_name as "table_name",
                   table_schema as "table_schema"
            from information_schema.views
            where 1=1
            {}
            order by 2, 1
        "#,
                filter.schema_clause("table_schema", self.schema())
            ))
            .await
    }

    async fn query_view_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select distinct c.table_name as "table_name",
                   c.column_name as "column_name",
                   c.data_type as "data_type",
                   c.is_nullable as "nullable",
                   c.character_maximum_length as "data_length",
                   c.numeric_precision as "data_precision",
                   c.numeric_scale as "data_scale",
                   c.ordinal_position as "ordinal_position"
            from information_schema.columns c,
                 information_schema.tables t
            where t.table_name = c.table_name
              and t.table_schema = c.table_schema
              and t.table_type = 'VIEW'
            {}
            order by c.table_name,
                     c.ordinal_position
        "#,
                filter.for_alias("c.", self.schema())
            ))
            .await
    }

    async fn get_view_definition(&self, schema: Option<&str>, view: &str) -> AppResult<String> {
        let created = self
            .conn
            .query(&format!("show create view {}", self.target(schema, view)))
            .await?;
        Ok(cell_text(&created, 1))
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
                "\n            select *\n            from (\n            select {}\n            from {} t\n            {}\n            ) t\n             limit {}\n        ",
                request.columns, request.table, request.filter, request.limit
            ))
            .await
    }

    async fn get_properties(&self, object: &ObjectRefQuery) -> AppResult<Option<DataTable>> {
        let schema = object.schema.as_deref().filter(|s| !s.is_empty()).unwrap_or(self.schema());
        let name = object.object.as_str();
        let sql = match object.object_type.as_str() {
            "table" => format!(
                r#"
                select table_schema as "Table Schema",
                       table_name as "Table Name",
                       table_type as "Table Type",
                       engine as "Engine",
                       version as "Version",
                       row_format as "Row Format",
                       table_rows as "Table Rows",
                       avg_row_length as "Average Row Length",
                       data_length as "Data Length",
                       max_data_length as "Max Data Length",
                       index_length as "Index Length",
                       data_free as "Data Free",
                       auto_increment as "Auto Increment",
                       create_time as "Create Time",
                       update_time as "Update Time",
                       check_time as "Check Time",
                       table_collation as "Table Collaction",
                       checksum as "Checksum"
                from information_schema.tables
                where table_schema = {}
                  and table_name = {}
            "#,
                literal(schema),
                literal(name)
            ),
            "view" => format!(
                r#"
                select table_schema as "View Schema",
                       table_name as "View Name",
                       check_option as "Check Option",
                       is_updatable as "Is Updatable",
                       security_type as "Security Type",
                       character_set_client as "Character Set Client",
                       collation_connection as "Collation Connection",
                       algorithm as "Algorithm"
                from information_schema.views
                where table_schema = {}
                  and table_name = {}
            "#,
                literal(schema),
                literal(name)
            ),
            "function" => self.routine_properties_sql("FUNCTION", schema, name),
            "procedure" => self.routine_properties_sql("PROCEDURE", schema, name),
            "sequence" if self.flavor == Flavor::MariaDb => format!(
                r#"
                select next_not_cached_value as "Next Not Cached Value",
                       minimum_value as "Min Value",
                       maximum_value as "Max Value",
                       start_value as "Start Value",
                       increment as "Increment By",
                       cache_size as "Cache Size",
                       (case when cycle_option = 0 then 'No Cycle' else 'Cycle' end) as "Cycle Option",
                       cycle_count as "Cycle Count"
                from {}
            "#,
                self.target(Some(schema), name)
            ),
            "index" => format!(
                r#"SELECT
                        table_schema,
                        table_name,
                        index_name,
                        GROUP_CONCAT(column_name ORDER BY seq_in_index) AS columns,
                        GROUP_CONCAT(seq_in_index ORDER BY seq_in_index) AS seq_in_index_list,
                        GROUP_CONCAT(cardinality ORDER BY seq_in_index) AS cardinality_list,
                        GROUP_CONCAT(non_unique ORDER BY seq_in_index) AS non_unique,
                        GROUP_CONCAT(index_type ORDER BY seq_in_index) AS index_type
                    FROM information_schema.statistics
                    WHERE index_name = {}
                    AND table_schema = {}
                    AND table_name = {}
                    GROUP BY table_schema, table_name, index_name
                    "#,
                literal(name),
                literal(schema),
                literal(object.table.as_deref().unwrap_or_default())
            ),
            _ => return Ok(None),
        };
        let result = self.conn.query(&sql).await?;
        transposed(result, name).map(Some)
    }

    async fn get_ddl(&self, object: &ObjectRefQuery) -> AppResult<String> {
        let kind = object.object_type.as_str();
        let column = match kind {
            "function" | "procedure" => 2,
            "table" | "view" => 1,
            _ => return Ok(String::new()),
        };
        let created = self
            .conn
            .query(&format!(
                "show create {} {}",
                kind,
                self.target(object.schema.as_deref(), &object.object)
            ))
            .await?;
        Ok(cell_text(&created, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testing::{table, ScriptedDriver};

    fn adapter(flavor: Flavor) -> (Arc<ScriptedDriver>, MySqlAdapter) {
        let driver = Arc::new(ScriptedDriver::new());
        let params = ConnectionParams {
            server: "db.local".into(),
            service: "shop".into(),
            user: "app".into(),
            ..Default::default()
        };
        let adapter = MySqlAdapter::with_driver(flavor, &params, driver.clone(), None);
        (driver, adapter)
    }

    fn object(object_type: &str, name: &str) -> ObjectRefQuery {
        ObjectRefQuery {
            schema: None,
            table: Some("orders".into()),
            object: name.into(),
            object_type: object_type.into(),
        }
    }

    #[test]
    fn test_defaults_and_info() {
        let (_, a) = adapter(Flavor::MariaDb);
        assert_eq!(a.active().port, "3306");
        assert_eq!(a.default_schema(), "shop");
        assert_eq!(a.print_database_info(), "app@shop");
        assert_eq!(a.print_database_details(), "db.local:3306");
        assert!(a.features().has_sequences);
        assert!(!adapter(Flavor::MySql).1.features().has_sequences);
        assert_eq!(
            a.commands().drop_index_command,
            "drop index #p_schema_name#.#p_index_name#"
        );
        assert!(a.commands().can_alter_nullable);
    }

    #[test]
    fn test_error_position() {
        let (_, a) = adapter(Flavor::MySql);
        let msg = "You have an error in your SQL syntax; check the manual near 'form t' at line 3";
        assert_eq!(a.get_error_position(msg, ""), Some(ErrorPosition { row: 3, col: 0 }));
        assert_eq!(a.get_error_position("Unknown column 'x'", ""), None);
    }

    #[tokio::test]
    async fn test_version_prefix() {
        let (driver, a) = adapter(Flavor::MariaDb);
        driver.push(table(&["version()"], &[&["10.11.6-MariaDB"]]));
        assert_eq!(a.get_version().await.unwrap(), "MariaDB 10.11.6-MariaDB");

        let (driver, a) = adapter(Flavor::MySql);
        driver.push(table(&["version()"], &[&["8.0.36"]]));
        assert_eq!(a.get_version().await.unwrap(), "MySQL 8.0.36");
    }

    #[tokio::test]
    async fn test_user_super() {
        let (driver, a) = adapter(Flavor::MySql);
        driver.push(table(&["super_priv"], &[&["Y"]]));
        assert!(a.get_user_super().await);
        assert!(driver.last_sql().contains("where user = 'app'"));

        driver.push_err("SELECT command denied to user");
        assert!(!a.get_user_super().await);
    }

    #[tokio::test]
    async fn test_limited_query_wraps_and_cancels() {
        let (driver, a) = adapter(Flavor::MySql);
        a.query_data_limited("select * from orders", 10).await.unwrap();
        assert_eq!(driver.last_sql(), "select * from ( select * from orders ) t limit 10");
        assert!(!*driver.cancelled.lock().unwrap());

        driver.push_err("Table 'shop.nope' doesn't exist");
        let err = a.query_data_limited("select * from nope", 10).await.unwrap_err();
        assert_eq!(err.to_string(), "Table 'shop.nope' doesn't exist");
        assert!(*driver.cancelled.lock().unwrap());
    }

    #[tokio::test]
    async fn test_catalog_filters() {
        let (driver, a) = adapter(Flavor::MariaDb);
        a.query_tables(&ObjectFilter::default()).await.unwrap();
        assert!(driver.last_sql().contains("and table_schema = 'shop' "));

        a.query_tables_primary_keys(&ObjectFilter::table(None, "orders"))
            .await
            .unwrap();
        let sql = driver.last_sql();
        assert!(sql.contains("concat('pk_', t.table_name) as \"constraint_name\""));
        assert!(sql.contains("and t.table_schema = 'shop' and t.table_name = 'orders' "));

        a.query_tables_primary_keys_columns(
            &ObjectFilter::table(Some("sales"), "orders"),
            &["pk_orders".to_string()],
        )
        .await
        .unwrap();
        let sql = driver.last_sql();
        assert!(sql.contains("and t.table_schema = 'sales' and t.table_name = 'orders' "));
        assert!(sql.contains("and concat('pk_', t.table_name) in ('pk_orders') "));

        a.query_tables_foreign_keys_columns(
            &ObjectFilter::all(),
            &["fk_a".to_string(), "fk_b".to_string()],
        )
        .await
        .unwrap();
        assert!(driver.last_sql().contains("and i.constraint_name in ('fk_a', 'fk_b') "));

        a.query_tables_indexes_columns(&ObjectFilter::table(None, "orders"), &["pk_orders".into()])
            .await
            .unwrap();
        assert!(driver.last_sql().contains("then concat('pk_', t.table_name) else t.index_name end) in ('pk_orders')"));
    }

    #[tokio::test]
    async fn test_sequences_only_on_mariadb() {
        let (driver, a) = adapter(Flavor::MariaDb);
        a.query_sequences(&ObjectFilter::schema(Some("s"))).await.unwrap();
        assert!(driver.last_sql().contains("table_type = 'SEQUENCE'"));

        let (_, a) = adapter(Flavor::MySql);
        assert!(a.query_sequences(&ObjectFilter::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_definitions_and_ddl() {
        let (driver, a) = adapter(Flavor::MySql);
        driver.push(table(
            &["Function", "sql_mode", "Create Function"],
            &[&["total", "", "CREATE FUNCTION total() RETURNS int RETURN 1"]],
        ));
        let def = a.get_function_definition(None, "total").await.unwrap();
        assert_eq!(def, "--DROP FUNCTION total;\nCREATE FUNCTION total() RETURNS int RETURN 1");
        assert_eq!(driver.last_sql(), "show create function `shop`.`total`");

        driver.push(table(&["Table", "Create Table"], &[&["orders", "CREATE TABLE `orders` (...)"]]));
        let ddl = a.get_ddl(&object("table", "orders")).await.unwrap();
        assert_eq!(ddl, "CREATE TABLE `orders` (...)");

        assert_eq!(a.get_ddl(&object("trigger", "x")).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_generated_dml_uses_schema_and_pk() {
        let (driver, a) = adapter(Flavor::MariaDb);
        driver.push(table(
            &["table_name", "column_name", "data_type", "nullable"],
            &[&["orders", "id", "int", "NO"], &["orders", "note", "text", "YES"]],
        ));
        driver.push(table(&["constraint_name", "table_name", "table_schema"], &[&["pk_orders", "orders", "shop"]]));
        driver.push(table(&["column_name", "ordinal_position"], &[&["id", "1"]]));
        let sql = a.template_select(None, "orders", None).await.unwrap();
        assert_eq!(sql, "SELECT t.id\n     , t.note\nFROM shop.orders t\nORDER BY t.id");
    }

    #[tokio::test]
    async fn test_properties() {
        let (driver, a) = adapter(Flavor::MariaDb);
        driver.push(table(&["View Schema", "View Name"], &[&["shop", "v_orders"]]));
        let props = a.get_properties(&object("view", "v_orders")).await.unwrap().unwrap();
        assert_eq!(props.column_texts("Property"), vec!["View Schema", "View Name"]);

        driver.push(table(&["Table Schema"], &[]));
        let err = a.get_properties(&object("table", "gone")).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Object gone does not exist anymore. Please refresh the tree view."
        );

        let (_, mysql) = adapter(Flavor::MySql);
        assert!(mysql.get_properties(&object("sequence", "s")).await.unwrap().is_none());
    }
}
