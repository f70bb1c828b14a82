//! Oracle 适配器
//!
//! 目录查询基于 `all_*` / `dba_*` 视图。对外展示的标识符统一经过
//! [`crate::quoting::oracle_normalized`]：非纯大写的名字带双引号。过滤条件也比较规范化后的值。
//! 本服务没有 Oracle 驱动，连接走 [`UnsupportedDriver`]，查询文本可通过
//! `with_driver` 注入的驱动校验。

use std::sync::Arc;

use async_trait::async_trait;
use common::errors::AppResult;
use common::models::{DbType, ObjectRefQuery, TableRecordsRequest};
use tokio::sync::Mutex;
use tracing::debug;

use crate::adapter::{
    scalar_text, transposed, ActiveParams, Commands, Connection, ConnectionParams,
    DatabaseAdapter, Features, ObjectFilter,
};
use crate::data_table::DataTable;
use crate::driver::{Driver, UnsupportedDriver};
use crate::quoting::{literal, literal_list, oracle_normalized as norm};
use crate::Dialect;

pub struct OracleAdapter {
    active: ActiveParams,
    schema: String,
    conn: Connection,
}

impl OracleAdapter {
    pub fn new(params: &ConnectionParams, lock: Option<Arc<Mutex<()>>>) -> Self {
        Self::with_driver(params, Arc::new(UnsupportedDriver::new(DbType::Oracle)), lock)
    }

    pub fn with_driver(
        params: &ConnectionParams,
        driver: Arc<dyn Driver>,
        lock: Option<Arc<Mutex<()>>>,
    ) -> Self {
        let upper = ConnectionParams {
            service: params.service.to_uppercase(),
            user: params.user.to_uppercase(),
            ..params.clone()
        };
        // 含空格的用户名按原样加引号作为 schema
        let schema = if params.user.contains(' ') {
            format!("\"{}\"", params.user)
        } else {
            upper.user.clone()
        };
        Self {
            active: upper.resolve("1521", "XE"),
            schema,
            conn: Connection::new(driver, lock),
        }
    }

    /// Whether the server is an Express edition.
    pub async fn get_express(&self) -> AppResult<bool> {
        let express = self
            .conn
            .query("select * from product_component_version where product like '%Express%'")
            .await?;
        Ok(!express.is_empty())
    }

    /// `owner` / `table_name` style filter over normalized names.
    fn owner_clause(&self, filter: &ObjectFilter, owner: &str, table: &str) -> String {
        filter.clause(&norm(owner), &norm(table), &self.schema)
    }

    fn owner_only(&self, filter: &ObjectFilter, owner: &str) -> String {
        filter.schema_clause(&norm(owner), &self.schema)
    }

    fn schema_or<'a>(&'a self, schema: Option<&'a str>) -> &'a str {
        schema.filter(|s| !s.is_empty()).unwrap_or(&self.schema)
    }

    async fn objects(
        &self,
        view: &str,
        object_type: &str,
        filter: &ObjectFilter,
    ) -> AppResult<DataTable> {
        let type_filter = if object_type.is_empty() {
            String::from("1 = 1")
        } else {
            format!("object_type = '{}'", object_type)
        };
        self.conn
            .query(&format!(
                r#"
            select {} as "schema_name",
                   {} as "id",
                   {} as "name"
            from {}
            where {}
            {}
            order by 2
        "#,
                norm("owner"),
                norm("object_name"),
                norm("object_name"),
                view,
                type_filter,
                self.owner_only(filter, "owner")
            ))
            .await
    }

    async fn metadata_ddl(&self, kind: &str, name: &str) -> AppResult<String> {
        let ddl = self
            .conn
            .execute_scalar(&format!(
                "select dbms_lob.substr(dbms_metadata.get_ddl('{}', {}), 4000, 1) from dual",
                kind,
                literal(name)
            ))
            .await?;
        Ok(format!("-- DROP {} {};\n{}", kind, name, scalar_text(&ddl)))
    }

    /// Constraint listing over `all_constraints` for type `P` or `U`.
    async fn key_constraints(
        &self,
        constraint_type: &str,
        filter: &ObjectFilter,
        names: Option<&[String]>,
    ) -> AppResult<DataTable> {
        // 子查询已规范化，外层直接比较别名列
        let mut outer = filter.clause("\"table_schema\"", "\"table_name\"", &self.schema);
        let (select, column, order) = match names {
            Some(names) => {
                if !names.is_empty() {
                    outer.push_str(&format!("and \"constraint_name\" in ({}) ", literal_list(names)));
                }
                (
                    "\"constraint_name\", \"column_name\"",
                    format!(",\n                       {} as \"column_name\"", norm("cols.column_name")),
                    ",\n                         cols.position",
                )
            }
            None => ("distinct *", String::new(), ""),
        };
        self.conn
            .query(&format!(
                r#"
            select {select}
            from (
                select {} as "constraint_name",
                       {} as "table_name"{column},
                       {} as "table_schema"
                from all_constraints cons,
                     all_cons_columns cols,
                     all_tables t
                where cons.constraint_type = '{constraint_type}'
                  and t.table_name = cols.table_name
                  and cons.constraint_name = cols.constraint_name
                  and cons.owner = cols.owner
                order by cons.owner,
                         cols.table_name,
                         cons.constraint_name{order}
            )
            where 1 = 1
            {outer}
        "#,
                norm("cons.constraint_name"),
                norm("cols.table_name"),
                norm("cons.owner"),
            ))
            .await
    }

    /// `all_tab_columns` listing; serves both tables and views.
    async fn columns_of(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "table_name",
                   {} as "column_name",
                   case when data_type = 'NUMBER' and data_scale = '0' then 'INTEGER' else data_type end as "data_type",
                   case nullable when 'Y' then 'YES' else 'NO' end as "nullable",
                   data_length as "data_length",
                   data_precision as "data_precision",
                   data_scale as "data_scale"
            from all_tab_columns
            where 1 = 1
            {}
            order by table_name,
                     column_id
        "#,
                norm("table_name"),
                norm("column_name"),
                self.owner_clause(filter, "owner", "table_name")
            ))
            .await
    }
}

#[async_trait]
impl DatabaseAdapter for OracleAdapter {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    fn features(&self) -> Features {
        Features {
            has_schema: true,
            has_functions: true,
            has_procedures: true,
            has_packages: true,
            has_sequences: true,
            has_primary_keys: true,
            has_foreign_keys: true,
            has_uniques: true,
            has_indexes: true,
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
        self.schema.clone()
    }

    async fn get_version(&self) -> AppResult<String> {
        let version = self
            .conn
            .execute_scalar(
                r#"
            select (case when product like '%Express%'
                         then 'Oracle XE '
                         else 'Oracle '
                    end) || version
            from product_component_version
            where product like 'Oracle%'
        "#,
            )
            .await?;
        Ok(scalar_text(&version))
    }

    async fn get_user_super(&self) -> bool {
        self.conn
            .query("select * from v$session where rownum <= 1")
            .await
            .is_ok()
    }

    async fn query_roles(&self) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "role_name"
            from all_users
            order by username
        "#,
                norm("username")
            ))
            .await
    }

    async fn query_tablespaces(&self) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "tablespace_name"
            from dba_tablespaces
            order by tablespace_name
        "#,
                norm("tablespace_name")
            ))
            .await
    }

    async fn query_tables(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "table_name",
                   {} as "table_schema"
            from all_tables
            where 1 = 1
            {}
            order by owner,
                     table_name
        "#,
                norm("table_name"),
                norm("owner"),
                self.owner_only(filter, "owner")
            ))
            .await
    }

    async fn query_tables_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.columns_of(filter).await
    }

    async fn query_tables_foreign_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "constraint_name",
                   {} as "table_name",
                   {} as "r_constraint_name",
                   {} as "r_table_name",
                   {} as "table_schema",
                   {} as "r_table_schema",
                   constraint_info.delete_rule as "delete_rule",
                   'NO ACTION' as "update_rule"
            from user_constraints constraint_info,
                 user_cons_columns detail_table,
                 user_cons_columns master_table
            where constraint_info.constraint_name = detail_table.constraint_name
              and constraint_info.r_constraint_name = master_table.constraint_name
              and detail_table.position = master_table.position
              and constraint_info.constraint_type = 'R'
            {}
            order by constraint_info.constraint_name,
                     detail_table.table_name
        "#,
                norm("constraint_info.constraint_name"),
                norm("detail_table.table_name"),
                norm("constraint_info.r_constraint_name"),
                norm("master_table.table_name"),
                norm("detail_table.owner"),
                norm("master_table.owner"),
                self.owner_clause(filter, "constraint_info.owner", "detail_table.table_name")
            ))
            .await
    }

    async fn query_tables_foreign_keys_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        let mut clause = self.owner_clause(filter, "constraint_info.owner", "detail_table.table_name");
        if !names.is_empty() {
            clause.push_str(&format!(
                "and {} in ({}) ",
                norm("constraint_info.constraint_name"),
                literal_list(names)
            ));
        }
        self.conn
            .query(&format!(
                r#"
            select {} as "constraint_name",
                   {} as "table_name",
                   {} as "column_name",
                   {} as "r_constraint_name",
                   {} as "r_table_name",
                   {} as "r_column_name",
                   {} as "table_schema",
                   {} as "r_table_schema",
                   constraint_info.delete_rule as "delete_rule",
                   'NO ACTION' as "update_rule",
                   detail_table.position as "ordinal_position"
            from user_constraints constraint_info,
                 user_cons_columns detail_table,
                 user_cons_columns master_table
            where constraint_info.constraint_name = detail_table.constraint_name
              and constraint_info.r_constraint_name = master_table.constraint_name
              and detail_table.position = master_table.position
              and constraint_info.constraint_type = 'R'
            {}
            order by constraint_info.constraint_name,
                     detail_table.table_name,
                     detail_table.position
        "#,
                norm("constraint_info.constraint_name"),
                norm("detail_table.table_name"),
                norm("detail_table.column_name"),
                norm("constraint_info.r_constraint_name"),
                norm("master_table.table_name"),
                norm("master_table.column_name"),
                norm("detail_table.owner"),
                norm("master_table.owner"),
                clause
            ))
            .await
    }

    async fn query_tables_primary_keys(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.key_constraints("P", filter, None).await
    }

    async fn query_tables_primary_keys_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.key_constraints("P", filter, Some(names)).await
    }

    async fn query_tables_uniques(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.key_constraints("U", filter, None).await
    }

    async fn query_tables_uniques_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        self.key_constraints("U", filter, Some(names)).await
    }

    async fn query_tables_indexes(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "schema_name",
                   {} as "table_name",
                   {} as "index_name",
                   case when uniqueness = 'UNIQUE' then 'Unique' else 'Non Unique' end as "uniqueness"
            from all_indexes
            where 1=1
            {}
            order by owner,
                     table_name,
                     index_name
        "#,
                norm("owner"),
                norm("table_name"),
                norm("index_name"),
                self.owner_clause(filter, "owner", "table_name")
            ))
            .await
    }

    async fn query_tables_indexes_columns(
        &self,
        filter: &ObjectFilter,
        names: &[String],
    ) -> AppResult<DataTable> {
        let mut clause = self.owner_clause(filter, "t.owner", "t.table_name");
        if !names.is_empty() {
            clause.push_str(&format!("and {} in ({}) ", norm("t.index_name"), literal_list(names)));
        }
        self.conn
            .query(&format!(
                r#"
            select {} as "index_name",
                   {} as "column_name"
            from all_indexes t,
                 all_ind_columns c
            where t.table_name = c.table_name
              and t.index_name = c.index_name
              and t.owner = c.index_owner
            {}
            order by c.column_position
        "#,
                norm("t.index_name"),
                norm("c.column_name"),
                clause
            ))
            .await
    }

    async fn query_packages(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.objects("all_packages", "", filter).await
    }

    async fn query_functions(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.objects("all_procedures", "FUNCTION", filter).await
    }

    async fn query_function_fields(
        &self,
        schema: Option<&str>,
        function: &str,
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select (case in_out
                      when 'IN' then 'I'
                      when 'OUT' then 'O'
                      else 'R'
                    end) as "type",
                   (case when position = 0
                         then 'return ' || data_type
                         else argument_name || ' ' || data_type
                    end) as "name",
                   position+1 as "seq"
            from all_arguments
            where {} = {}
              and {} = {}
            order by 3
        "#,
                norm("owner"),
                literal(self.schema_or(schema)),
                norm("object_name"),
                literal(function)
            ))
            .await
    }

    async fn get_function_definition(
        &self,
        _schema: Option<&str>,
        function: &str,
    ) -> AppResult<String> {
        self.metadata_ddl("FUNCTION", function).await
    }

    async fn query_procedures(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.objects("all_procedures", "PROCEDURE", filter).await
    }

    async fn query_procedure_fields(
        &self,
        schema: Option<&str>,
        procedure: &str,
    ) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select (case in_out
                      when 'IN' then 'I'
                      when 'OUT' then 'O'
                      else 'R'
                    end) as "type",
                   argument_name || ' ' || data_type as "name",
                   position+1 as "seq"
            from all_arguments
            where {} = {}
              and {} = {}
            order by 3
        "#,
                norm("owner"),
                literal(self.schema_or(schema)),
                norm("object_name"),
                literal(procedure)
            ))
            .await
    }

    async fn get_procedure_definition(
        &self,
        _schema: Option<&str>,
        procedure: &str,
    ) -> AppResult<String> {
        self.metadata_ddl("PROCEDURE", procedure).await
    }

    async fn query_sequences(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "sequence_schema",
                   {} as "sequence_name"
            from all_sequences
            where 1 = 1
            {}
            order by sequence_owner,
                     sequence_name
        "#,
                norm("sequence_owner"),
                norm("sequence_name"),
                self.owner_only(filter, "sequence_owner")
            ))
            .await
    }

    async fn query_views(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                r#"
            select {} as "table_name",
                   {} as "table_schema"
            from all_views
            where 1 = 1
            {}
            order by 2, 1
        "#,
                norm("view_name"),
                norm("owner"),
                self.owner_only(filter, "owner")
            ))
            .await
    }

    async fn query_view_fields(&self, filter: &ObjectFilter) -> AppResult<DataTable> {
        self.columns_of(filter).await
    }

    async fn get_view_definition(&self, schema: Option<&str>, view: &str) -> AppResult<String> {
        let schema = self.schema_or(schema);
        let text = self
            .conn
            .execute_scalar(&format!(
                r#"
                select text
                from all_views
                where {} = {}
                  and {} = {}
            "#,
                norm("owner"),
                literal(schema),
                norm("view_name"),
                literal(view)
            ))
            .await?;
        Ok(format!(
            "CREATE OR REPLACE VIEW {}.{} AS\n{}\n",
            schema,
            view,
            scalar_text(&text)
        ))
    }

    async fn query_data_limited(&self, sql: &str, count: usize) -> AppResult<DataTable> {
        debug!(count, "Oracle 限量查询");
        self.conn
            .query_block_or_cancel(
                &format!("select * from ( {} ) t where rownum <= {}", sql, count),
                count,
            )
            .await
    }

    async fn query_table_records(&self, request: &TableRecordsRequest) -> AppResult<DataTable> {
        self.conn
            .query(&format!(
                "\n            select *\n            from (\n            select {}\n            from {} t\n            {}\n            )\n             where rownum <= {}\n        ",
                request.columns, request.table, request.filter, request.limit
            ))
            .await
    }

    async fn get_properties(&self, object: &ObjectRefQuery) -> AppResult<Option<DataTable>> {
        let name = object.object.as_str();
        let properties = match object.object_type.as_str() {
            "role" => {
                let sql = format!(
                    r#"
                select username as "User",
                       user_id as "ID",
                       account_status as "Status",
                       lock_date as "Lock Date",
                       expiry_date as "Expiry Date",
                       default_tablespace as "Default Tablespace",
                       temporary_tablespace as "Temporary Tablespace",
                       created as "Creation Date",
                       initial_rsrc_consumer_group as "Group",
                       authentication_type as "Authentication Type"
                from dba_users
                where {} = {}
            "#,
                    norm("username"),
                    literal(name)
                );
                transposed(self.conn.query(&sql).await?, name)?
            }
            "tablespace" => {
                let sql = format!(
                    r#"
                select tablespace_name as "Tablespace",
                       block_size as "Block Size",
                       initial_extent as "Initial Extent",
                       next_extent as "Next Extent",
                       min_extents as "Min Extents",
                       max_extents as "Max Extents",
                       max_size as "Max Size",
                       pct_increase as "Percent Increase",
                       min_extlen as "Min Extent Length",
                       status as "Status",
                       contents as "Contents",
                       logging as "Logging",
                       force_logging as "Force Logging",
                       extent_management as "Extent Management",
                       allocation_type as "Allocation Type",
                       plugged_in as "Plugged In",
                       segment_space_management as "Segment Space Management",
                       def_tab_compression as "Deferrable Compression",
                       retention as "Retention",
                       bigfile as "Big File",
                       predicate_evaluation as "Predicate Evaluation",
                       encrypted as "Encrypted",
                       compress_for as "Compression Format"
                from dba_tablespaces
                where {} = {}
            "#,
                    norm("tablespace_name"),
                    literal(name)
                );
                transposed(self.conn.query(&sql).await?, name)?
            }
            kind => {
                let sql = format!(
                    r#"
                select owner as "Owner",
                       object_name as "Object Name",
                       object_id as "Object ID",
                       object_type as "Object Type",
                       created as "Created",
                       last_ddl_time as "Last DDL Time",
                       timestamp as "Timestamp",
                       status as "Status",
                       temporary as "Temporary",
                       generated as "Generated",
                       secondary as "Secondary"
                from all_objects
                where {} = {}
                  and {} = {}
                  and subobject_name is null
            "#,
                    norm("owner"),
                    literal(&self.schema),
                    norm("object_name"),
                    literal(name)
                );
                let mut properties = transposed(self.conn.query(&sql).await?, name)?;
                if kind == "sequence" {
                    let sql = format!(
                        r#"
                    select last_number as "Last Value",
                           min_value as "Min Value",
                           max_value as "Max Value",
                           increment_by as "Increment By",
                           cycle_flag as "Is Cached",
                           order_flag as "Is Ordered",
                           cache_size as "Cache Size"
                    from all_sequences
                    where {} = {}
                      and {} = {}
                "#,
                        norm("sequence_owner"),
                        literal(&self.schema),
                        norm("sequence_name"),
                        literal(name)
                    );
                    properties.merge(transposed(self.conn.query(&sql).await?, name)?)?;
                }
                properties
            }
        };
        Ok(Some(properties))
    }

    async fn get_ddl(&self, object: &ObjectRefQuery) -> AppResult<String> {
        if matches!(object.object_type.as_str(), "role" | "tablespace" | "database") {
            return Ok(" ".to_string());
        }
        let ddl = self
            .conn
            .execute_scalar(&format!(
                r#"
select dbms_lob.substr(dbms_metadata.get_ddl(object_type, object_name), 4000, 1) as ddl
from (
select * from all_objects
                where (SHARING is NULL OR SHARING <> 'METADATA LINK') and
                 {} = {})"#,
                norm("object_name"),
                literal(&object.object)
            ))
            .await?;
        Ok(scalar_text(&ddl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testing::{table, ScriptedDriver};

    fn adapter(user: &str) -> (Arc<ScriptedDriver>, OracleAdapter) {
        let driver = Arc::new(ScriptedDriver::new());
        let params = ConnectionParams {
            server: "ora.local".into(),
            user: user.into(),
            service: "orclpdb".into(),
            ..Default::default()
        };
        let adapter = OracleAdapter::with_driver(&params, driver.clone(), None);
        (driver, adapter)
    }

    fn object(object_type: &str, name: &str) -> ObjectRefQuery {
        ObjectRefQuery {
            schema: None,
            table: None,
            object: name.into(),
            object_type: object_type.into(),
        }
    }

    #[test]
    fn test_params_are_upper_cased() {
        let (_, a) = adapter("scott");
        assert_eq!(a.active().user, "SCOTT");
        assert_eq!(a.active().service, "ORCLPDB");
        assert_eq!(a.active().port, "1521");
        assert_eq!(a.default_schema(), "SCOTT");
        assert_eq!(a.print_database_info(), "SCOTT@ORCLPDB");

        let (_, spaced) = adapter("my user");
        assert_eq!(spaced.default_schema(), "\"my user\"");

        let blank = OracleAdapter::new(&ConnectionParams::default(), None);
        assert_eq!(blank.active().service, "XE");
    }

    #[test]
    fn test_rules_without_update() {
        let (_, a) = adapter("scott");
        assert!(!a.features().has_update_rule);
        assert_eq!(a.handle_update_delete_rules("CASCADE", "SET NULL"), " on delete SET NULL ");
        assert_eq!(a.get_error_position("ORA-00942: table or view does not exist", ""), None);
    }

    #[tokio::test]
    async fn test_limited_query_uses_rownum() {
        let (driver, a) = adapter("scott");
        a.query_data_limited("select * from emp", 5).await.unwrap();
        assert_eq!(driver.last_sql(), "select * from ( select * from emp ) t where rownum <= 5");

        driver.push_err("ORA-00942: table or view does not exist");
        assert!(a.query_data_limited("select * from nope", 5).await.is_err());
        assert!(*driver.cancelled.lock().unwrap());
    }

    #[tokio::test]
    async fn test_filters_are_normalized() {
        let (driver, a) = adapter("scott");
        a.query_tables(&ObjectFilter::default()).await.unwrap();
        assert!(driver.last_sql().contains(&format!("and {} = 'SCOTT' ", norm("owner"))));

        a.query_tables_fields(&ObjectFilter::table(Some("HR"), "EMP")).await.unwrap();
        let sql = driver.last_sql();
        assert!(sql.contains(&format!(
            "and {} = 'HR' and {} = 'EMP' ",
            norm("owner"),
            norm("table_name")
        )));
        assert!(sql.contains("then 'INTEGER'"));

        a.query_tables_primary_keys_columns(&ObjectFilter::table(None, "EMP"), &["PK_EMP".into()])
            .await
            .unwrap();
        let sql = driver.last_sql();
        assert!(sql.contains("and \"table_schema\" = 'SCOTT' and \"table_name\" = 'EMP' "));
        assert!(sql.contains("and \"constraint_name\" in ('PK_EMP') "));
        assert!(sql.contains("cons.constraint_type = 'P'"));
    }

    #[tokio::test]
    async fn test_version_and_super() {
        let (driver, a) = adapter("scott");
        driver.push(table(&["v"], &[&["Oracle XE 21.0.0.0.0"]]));
        assert_eq!(a.get_version().await.unwrap(), "Oracle XE 21.0.0.0.0");

        driver.push_err("ORA-00942");
        assert!(!a.get_user_super().await);
        assert!(a.get_user_super().await);

        driver.push(table(&["product"], &[&["Oracle Database 21c Express Edition"]]));
        assert!(a.get_express().await.unwrap());
    }

    #[tokio::test]
    async fn test_definitions() {
        let (driver, a) = adapter("scott");
        driver.push(table(&["ddl"], &[&["CREATE FUNCTION F1 ..."]]));
        let def = a.get_function_definition(None, "F1").await.unwrap();
        assert_eq!(def, "-- DROP FUNCTION F1;\nCREATE FUNCTION F1 ...");

        driver.push(table(&["text"], &[&["select 1 from dual"]]));
        let view = a.get_view_definition(None, "V1").await.unwrap();
        assert_eq!(view, "CREATE OR REPLACE VIEW SCOTT.V1 AS\nselect 1 from dual\n");
    }

    #[tokio::test]
    async fn test_sequence_properties_are_merged() {
        let (driver, a) = adapter("scott");
        driver.push(table(&["Owner", "Object Name"], &[&["SCOTT", "S1"]]));
        driver.push(table(&["Last Value", "Min Value"], &[&["21", "1"]]));
        let props = a.get_properties(&object("sequence", "S1")).await.unwrap().unwrap();
        assert_eq!(
            props.column_texts("Property"),
            vec!["Owner", "Object Name", "Last Value", "Min Value"]
        );

        driver.push(table(&["User"], &[]));
        let err = a.get_properties(&object("role", "GHOST")).await.unwrap_err();
        assert!(err.to_string().starts_with("Object GHOST does not exist anymore"));
    }

    #[tokio::test]
    async fn test_ddl() {
        let (driver, a) = adapter("scott");
        assert_eq!(a.get_ddl(&object("tablespace", "USERS")).await.unwrap(), " ");
        driver.push(table(&["ddl"], &[&["CREATE TABLE EMP (...)"]]));
        assert_eq!(a.get_ddl(&object("table", "EMP")).await.unwrap(), "CREATE TABLE EMP (...)");
        assert!(driver.last_sql().contains("SHARING <> 'METADATA LINK'"));
    }

    #[tokio::test]
    async fn test_unsupported_driver_reports_error() {
        let a = OracleAdapter::new(
            &ConnectionParams {
                user: "scott".into(),
                ..Default::default()
            },
            None,
        );
        assert!(a.test_connection().await.contains("no driver available"));
    }
}
