//! 语句模板注册表
//!
//! 每个方言一组静态模板，按 key 查找。PostgreSQL 的部分模板按服务端版本
//! （`server_version_num`）分为 `<13`、`13-14` 与默认三档。

mod mariadb;
mod mssql;
mod mysql;
mod oracle;
mod postgres;
mod sqlite;

use common::errors::{AppError, AppResult};
use serde::Serialize;
use utoipa::ToSchema;

use crate::Dialect;

/// How the UI should run a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    Execute,
    Script,
}

/// A SQL skeleton. `#placeholders#` are left for the editor to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Template {
    pub text: String,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            template_type: TemplateType::Execute,
        }
    }

    /// Substitutes `$major_version`. Other `$` sequences such as `$function$` are kept.
    pub fn render(&self, major_version: &str) -> Template {
        Template {
            text: self.text.replace("$major_version", major_version),
            template_type: self.template_type,
        }
    }
}

/// Static registry entry.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TemplateEntry {
    Fixed(&'static str),
    Versioned {
        before_13: Option<&'static str>,
        from_13_to_14: Option<&'static str>,
        default: &'static str,
    },
}

impl TemplateEntry {
    fn pick(self, version: u32) -> &'static str {
        match self {
            TemplateEntry::Fixed(text) => text,
            TemplateEntry::Versioned {
                before_13,
                from_13_to_14,
                default,
            } => {
                let bucket = if version < 130_000 {
                    before_13
                } else if version < 140_000 {
                    from_13_to_14
                } else {
                    None
                };
                bucket.unwrap_or(default)
            }
        }
    }
}

fn registry(dialect: Dialect) -> (&'static [&'static str], fn(&str) -> Option<TemplateEntry>) {
    match dialect {
        Dialect::Postgres => (postgres::KEYS, postgres::lookup),
        Dialect::MariaDb => (mariadb::KEYS, mariadb::lookup),
        Dialect::MySql => (mysql::KEYS, mysql::lookup),
        Dialect::Oracle => (oracle::KEYS, oracle::lookup),
        Dialect::Sqlite => (sqlite::KEYS, sqlite::lookup),
        Dialect::MsSql => (mssql::KEYS, mssql::lookup),
    }
}

/// Looks up a template. `version` is the numeric server version; missing counts as 0.
pub fn get_template(dialect: Dialect, key: &str, version: Option<u32>) -> AppResult<Template> {
    let (_, lookup) = registry(dialect);
    let entry = lookup(key).ok_or_else(|| AppError::TemplateNotFound(key.to_string()))?;
    Ok(Template::new(entry.pick(version.unwrap_or(0))))
}

/// All keys of a dialect, in registry order.
pub fn template_keys(dialect: Dialect) -> &'static [&'static str] {
    registry(dialect).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key() {
        let err = get_template(Dialect::Sqlite, "create_galaxy", None).unwrap_err();
        assert_eq!(err.to_string(), "No such template: create_galaxy");
    }

    #[test]
    fn test_every_key_resolves() {
        for dialect in Dialect::ALL {
            for key in template_keys(dialect) {
                for version in [None, Some(120_000), Some(130_005), Some(160_002)] {
                    assert!(
                        get_template(dialect, key, version).is_ok(),
                        "{:?} {}",
                        dialect,
                        key
                    );
                }
            }
        }
    }

    #[test]
    fn test_registry_sizes() {
        assert_eq!(template_keys(Dialect::Postgres).len(), 116);
        assert_eq!(template_keys(Dialect::Sqlite).len(), 13);
        assert!(!template_keys(Dialect::MsSql).is_empty());
    }

    #[test]
    fn test_version_buckets() {
        let old = get_template(Dialect::Postgres, "drop_database", Some(120_000)).unwrap();
        let new = get_template(Dialect::Postgres, "drop_database", Some(150_000)).unwrap();
        assert!(!old.text.contains("FORCE"));
        assert!(new.text.contains("--WITH ( FORCE )"));
        // no 13-14 bucket: falls back to the default text
        let mid = get_template(Dialect::Postgres, "drop_database", Some(130_000)).unwrap();
        assert_eq!(mid, new);
        // unknown version behaves like a pre-13 server
        let none = get_template(Dialect::Postgres, "drop_database", None).unwrap();
        assert_eq!(none, old);
    }

    #[test]
    fn test_render_keeps_dollar_quotes() {
        let tpl = get_template(Dialect::Postgres, "create_function", Some(160_000)).unwrap();
        let rendered = tpl.render("16");
        assert!(rendered.text.contains("docs/16/"));
        assert!(!rendered.text.contains("$major_version"));
        assert!(rendered.text.contains("$function$"));
    }

    #[test]
    fn test_fixed_templates_ignore_version() {
        let a = get_template(Dialect::Sqlite, "drop_view", Some(1)).unwrap();
        let b = get_template(Dialect::Sqlite, "drop_view", None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.text, "DROP VIEW #view_name#");
        assert_eq!(a.template_type, TemplateType::Execute);
    }
}
