//! 命令历史模型
//!
//! 两类历史：编辑器中执行的查询（Query）与控制台命令（Console）。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Kind of recorded command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum CommandKind {
    Query,
    Console,
}

impl CommandKind {
    /// Backing table in the metadata store.
    pub fn table(&self) -> &'static str {
        match self {
            CommandKind::Query => "query_history",
            CommandKind::Console => "console_history",
        }
    }
}

/// Filter shared by list and clear.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HistoryFilter {
    #[validate(length(min = 1, message = "Connection ID is required"))]
    pub connection_id: String,
    pub command_type: CommandKind,
    /// Case-insensitive substring of the snippet.
    #[serde(default)]
    pub command_contains: String,
    /// Lower bound on `start_time` (inclusive). Empty means unbounded.
    #[serde(default)]
    pub command_from: Option<String>,
    /// Upper bound on `start_time` (inclusive). Empty means unbounded.
    #[serde(default)]
    pub command_to: Option<String>,
}

impl HistoryFilter {
    pub fn from_bound(&self) -> Option<&str> {
        self.command_from.as_deref().filter(|v| !v.is_empty())
    }

    pub fn to_bound(&self) -> Option<&str> {
        self.command_to.as_deref().filter(|v| !v.is_empty())
    }
}

/// Paginated listing request.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HistoryListRequest {
    /// 1-based page; out-of-range pages fall back to 1.
    #[serde(default = "first_page")]
    pub current_page: i64,
    #[serde(flatten)]
    #[validate(nested)]
    pub filter: HistoryFilter,
}

fn first_page() -> i64 {
    1
}

/// A recorded editor query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema, sqlx::FromRow)]
pub struct QueryHistoryItem {
    pub start_time: String,
    pub end_time: String,
    /// Seconds, formatted by the caller.
    pub duration: String,
    pub status: String,
    pub snippet: String,
}

/// A recorded console command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema, sqlx::FromRow)]
pub struct ConsoleHistoryItem {
    pub start_time: String,
    pub snippet: String,
}

/// One entry of a history page.
#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum HistoryItem {
    Query(QueryHistoryItem),
    Console(ConsoleHistoryItem),
}

/// Page of history entries.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryPage {
    pub command_list: Vec<HistoryItem>,
    pub pages: i64,
}

/// Append a query history record.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewQueryHistory {
    #[validate(length(min = 1))]
    pub connection_id: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub status: String,
    pub snippet: String,
}

/// Append a console history record.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewConsoleHistory {
    #[validate(length(min = 1))]
    pub connection_id: String,
    pub start_time: String,
    pub snippet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bounds_are_ignored() {
        let filter: HistoryFilter = serde_json::from_value(serde_json::json!({
            "connection_id": "c1",
            "command_type": "Query",
            "command_from": "",
            "command_to": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(filter.from_bound(), None);
        assert_eq!(filter.to_bound(), Some("2024-01-01"));
        assert_eq!(filter.command_contains, "");
    }

    #[test]
    fn test_list_request_defaults_to_first_page() {
        let req: HistoryListRequest = serde_json::from_value(serde_json::json!({
            "connection_id": "c1",
            "command_type": "Console"
        }))
        .unwrap();
        assert_eq!(req.current_page, 1);
        assert_eq!(req.filter.command_type, CommandKind::Console);
    }
}
