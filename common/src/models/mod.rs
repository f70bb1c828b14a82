//! Shared data models.

pub mod connection;
pub mod explorer;
pub mod history;

pub use connection::{ConnectionConfig, ConnectionItem, CreateConnectionRequest, DbType};
pub use explorer::{
    DefinitionQuery, ErrorPosition, ErrorPositionRequest, GenerateQuery, ObjectColumnsQuery,
    ObjectQuery, ObjectRefQuery, QueryDataRequest, RulesRequest, TableRecordsRequest,
};
pub use history::{
    CommandKind, ConsoleHistoryItem, HistoryFilter, HistoryItem, HistoryListRequest, HistoryPage,
    NewConsoleHistory, NewQueryHistory, QueryHistoryItem,
};
