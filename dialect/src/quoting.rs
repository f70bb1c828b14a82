//! Identifier quoting and literal escaping.
//!
//! Catalog queries interpolate object names supplied by the client. Every such
//! name goes through [`quote_literal`] (inside `'...'`) or [`quote_ident`].

use crate::Dialect;

/// Escapes a value for use inside a single-quoted SQL string.
pub fn quote_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// `'value'` with quotes doubled.
pub fn literal(value: &str) -> String {
    format!("'{}'", quote_literal(value))
}

/// Comma separated list of literals, for `in (...)` filters.
pub fn literal_list<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| literal(v.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quotes an identifier with the dialect's delimiter.
pub fn quote_ident(dialect: Dialect, name: &str) -> String {
    match dialect {
        Dialect::MySql | Dialect::MariaDb => format!("`{}`", name.replace('`', "``")),
        Dialect::MsSql => format!("[{}]", name.replace(']', "]]")),
        Dialect::Postgres | Dialect::Oracle | Dialect::Sqlite => {
            format!("\"{}\"", name.replace('"', "\"\""))
        }
    }
}

/// Postgres style identifier: quoted only when it is not a plain lower-case name.
pub fn quote_ident_if_needed(dialect: Dialect, name: &str) -> String {
    let plain = !name.is_empty()
        && name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if plain {
        name.to_string()
    } else {
        quote_ident(dialect, name)
    }
}

/// `schema.name`, or just `name` when there is no schema.
pub fn qualified(schema: Option<&str>, name: &str) -> String {
    match schema.filter(|s| !s.is_empty()) {
        Some(schema) => format!("{}.{}", schema, name),
        None => name.to_string(),
    }
}

/// Oracle names that are not plain upper-case identifiers are shown double-quoted.
pub fn oracle_normalized(expr: &str) -> String {
    format!(
        "(case when upper(replace({expr}, ' ', '')) <> {expr} then '\"' || {expr} || '\"' else {expr} end)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_escaping() {
        assert_eq!(quote_literal("o'brien"), "o''brien");
        assert_eq!(literal("x' or '1'='1"), "'x'' or ''1''=''1'");
        assert_eq!(literal_list(&["a", "b'c"]), "'a', 'b''c'");
    }

    #[test]
    fn test_quote_ident() {
        assert_eq!(quote_ident(Dialect::MySql, "a`b"), "`a``b`");
        assert_eq!(quote_ident(Dialect::Postgres, "My \"T\""), "\"My \"\"T\"\"\"");
        assert_eq!(quote_ident(Dialect::MsSql, "x]"), "[x]]]");
        assert_eq!(quote_ident_if_needed(Dialect::Postgres, "users_2"), "users_2");
        assert_eq!(quote_ident_if_needed(Dialect::Postgres, "Users"), "\"Users\"");
    }

    #[test]
    fn test_qualified() {
        assert_eq!(qualified(Some("hr"), "emp"), "hr.emp");
        assert_eq!(qualified(Some(""), "emp"), "emp");
        assert_eq!(qualified(None, "emp"), "emp");
    }

    #[test]
    fn test_oracle_normalized() {
        assert_eq!(
            oracle_normalized("t.owner"),
            "(case when upper(replace(t.owner, ' ', '')) <> t.owner then '\"' || t.owner || '\"' else t.owner end)"
        );
    }
}
