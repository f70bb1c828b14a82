//! SQLite 语句模板

use super::TemplateEntry;

pub(super) const KEYS: &[&str] = &[
    "create_view",
    "drop_view",
    "create_table",
    "alter_table",
    "drop_table",
    "create_column",
    "create_index",
    "reindex",
    "drop_index",
    "delete",
    "create_trigger",
    "alter_trigger",
    "drop_trigger",
];

pub(super) fn lookup(key: &str) -> Option<TemplateEntry> {
    let entry = match key {
        "create_view" => TemplateEntry::Fixed(r#"CREATE
--TEMPORARY
VIEW view_name
--( column_definition, ... )
AS
--SELECT...
"#),
        "drop_view" => TemplateEntry::Fixed(r#"DROP VIEW #view_name#"#),
        "create_table" => TemplateEntry::Fixed(r#"CREATE
--TEMPORARY
TABLE table_name
(
    column_name data_type
    --CONSTRAINT constraint_name
    --NOT NULL
    --CHECK
    --UNIQUE
    --PRIMARY KEY
    --FOREIGN KEY
)
--WITHOUT ROWID
"#),
        "alter_table" => TemplateEntry::Fixed(r#"ALTER TABLE #table_name#
--RENAME TO new_table_name
--RENAME COLUMN column_name TO new_column_name
--ADD COLUMN columnd_definition
"#),
        "drop_table" => TemplateEntry::Fixed(r#"DROP TABLE #table_name#"#),
        "create_column" => TemplateEntry::Fixed(r#"ALTER TABLE #table_name#
ADD COLUMN columnd_definition
"#),
        "create_index" => TemplateEntry::Fixed(r#"CREATE
--UNIQUE
INDEX index_name ON #table_name# ( column_name, ... )
--WHERE expression
"#),
        "reindex" => TemplateEntry::Fixed(r#"REINDEX #index_name#"#),
        "drop_index" => TemplateEntry::Fixed(r#"DROP INDEX #index_name#"#),
        "delete" => TemplateEntry::Fixed(r#"DELETE FROM
#table_name#
WHERE condition
"#),
        "create_trigger" => TemplateEntry::Fixed(r#"CREATE
--TEMPORARY
TRIGGER trigger_name
--BEFORE
--AFTER
--INSTEAD OF
--DELETE
--INSERT
--UPDATE
--OF column_name
ON #table_name#
--FOR EACH ROW
WHEN expression
BEGIN
    statement
;
END
"#),
        "alter_trigger" => TemplateEntry::Fixed(r#"DROP TRIGGER #trigger_name#
                              CREATE
--TEMPORARY
TRIGGER trigger_name
--BEFORE
--AFTER
--INSTEAD OF
--DELETE
--INSERT
--UPDATE
--OF column_name
ON #table_name#
--FOR EACH ROW
WHEN expression
BEGIN
    statement
;
END
"#),
        "drop_trigger" => TemplateEntry::Fixed(r#"DROP TRIGGER #trigger_name#"#),
        _ => return None,
    };
    Some(entry)
}
