//! 数据库对象浏览相关的请求与响应模型

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Catalog listing filter: one table, one schema, or every schema.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct ObjectQuery {
    pub schema: Option<String>,
    pub table: Option<String>,
    #[serde(default)]
    pub all_schemas: bool,
}

/// Column listing for constraints / indexes, filtered by object names.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
pub struct ObjectColumnsQuery {
    pub schema: Option<String>,
    pub table: Option<String>,
    #[serde(default)]
    pub all_schemas: bool,
    /// Comma separated constraint or index names.
    #[serde(default)]
    pub names: String,
}

impl ObjectColumnsQuery {
    pub fn name_list(&self) -> Vec<String> {
        self.names
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Identifies one catalog object for DDL and property lookups.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct ObjectRefQuery {
    pub schema: Option<String>,
    /// Owning table, for sub-objects such as columns, indexes and constraints.
    pub table: Option<String>,
    pub object: String,
    /// Object type, e.g. `table`, `view`, `index`, `function`.
    #[serde(rename = "type")]
    pub object_type: String,
}

/// Names one view, routine or table for definition and field lookups.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct DefinitionQuery {
    pub schema: Option<String>,
    pub object: String,
    /// `view`, `function`, `procedure`, or `table` for field listings.
    pub kind: String,
}

/// Target of generated select/insert/update statements.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct GenerateQuery {
    pub schema: Option<String>,
    pub table: String,
    /// `t` for tables (default), `v` for views.
    pub kind: Option<String>,
}

/// Ad-hoc query with a row cap.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct QueryDataRequest {
    #[validate(length(min = 1, message = "SQL statement is required"))]
    pub sql: String,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100000))]
    pub limit: u32,
}

/// Rows of one table with optional filter text.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct TableRecordsRequest {
    #[validate(length(min = 1))]
    pub columns: String,
    #[validate(length(min = 1))]
    pub table: String,
    pub schema: Option<String>,
    /// Raw `where ...` / `order by ...` clause appended after the table.
    #[serde(default)]
    pub filter: String,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100000))]
    pub limit: u32,
}

fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ErrorPositionRequest {
    pub message: String,
    /// The statement that failed. Needed by engines that only report the offending token.
    #[serde(default)]
    pub sql: String,
}

/// Line (1-based) and column of an error inside the submitted SQL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ErrorPosition {
    pub row: u32,
    pub col: u32,
}

/// Referential actions for a foreign key.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RulesRequest {
    #[serde(default)]
    pub update_rule: String,
    #[serde(default)]
    pub delete_rule: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_list_skips_blanks() {
        let q = ObjectColumnsQuery {
            names: "pk_a, ,fk_b,".into(),
            ..Default::default()
        };
        assert_eq!(q.name_list(), vec!["pk_a".to_string(), "fk_b".to_string()]);
    }

    #[test]
    fn test_query_request_default_limit() {
        let req: QueryDataRequest =
            serde_json::from_value(serde_json::json!({ "sql": "select 1" })).unwrap();
        assert_eq!(req.limit, 50);
        assert!(req.validate().is_ok());
    }
}
