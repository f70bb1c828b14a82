//! 数据库方言适配层
//!
//! 每种数据库一个适配器，对外提供统一的元数据查询、DDL 生成与语句模板接口。
//! 适配器内部按引擎拼装系统目录查询，通过 [`driver::Driver`] 执行并得到
//! [`DataTable`]。

pub mod adapter;
pub mod data_table;
pub mod driver;
pub mod factory;
pub mod mssql;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod quoting;
pub mod sqlite;
pub mod template;

use common::models::DbType;
use serde::Serialize;
use utoipa::ToSchema;

pub use adapter::{
    ActiveParams, Commands, ConnectionParams, DatabaseAdapter, Features, ObjectFilter,
    CONNECTION_OK,
};
pub use data_table::DataTable;
pub use factory::instantiate;
pub use template::{get_template, template_keys, Template, TemplateType};

/// SQL flavor used for templates and quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    MySql,
    MariaDb,
    Sqlite,
    Oracle,
    MsSql,
}

impl Dialect {
    pub const ALL: [Dialect; 6] = [
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::MariaDb,
        Dialect::Sqlite,
        Dialect::Oracle,
        Dialect::MsSql,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::MariaDb => "mariadb",
            Dialect::Sqlite => "sqlite",
            Dialect::Oracle => "oracle",
            Dialect::MsSql => "mssql",
        }
    }
}

impl From<DbType> for Dialect {
    fn from(db_type: DbType) -> Self {
        match db_type {
            DbType::Postgres => Dialect::Postgres,
            DbType::MySQL => Dialect::MySql,
            DbType::MariaDB => Dialect::MariaDb,
            DbType::SQLite => Dialect::Sqlite,
            DbType::Oracle => Dialect::Oracle,
            DbType::MSSQL => Dialect::MsSql,
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
