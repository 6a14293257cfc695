use rusqlite::Connection;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS LocalizationResources (
    Id               INTEGER PRIMARY KEY AUTOINCREMENT,
    ResourceKey      TEXT    NOT NULL,
    Author           TEXT    NOT NULL DEFAULT '',
    FromCode         INTEGER NOT NULL DEFAULT 0,
    IsHidden         INTEGER NOT NULL DEFAULT 0,
    IsModified       INTEGER NOT NULL DEFAULT 0,
    ModificationDate TEXT    NOT NULL,
    Notes            TEXT    NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS IX_LocalizationResources_ResourceKey
    ON LocalizationResources (ResourceKey);

CREATE TABLE IF NOT EXISTS LocalizationResourceTranslations (
    Id         INTEGER PRIMARY KEY AUTOINCREMENT,
    ResourceId INTEGER NOT NULL REFERENCES LocalizationResources (Id) ON DELETE CASCADE,
    Language   TEXT    NOT NULL DEFAULT '',
    Value      TEXT    NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS IX_LocalizationResourceTranslations_ResourceId_Language
    ON LocalizationResourceTranslations (ResourceId, Language);
"#;

/// Creates the tables and indexes if they do not exist yet.
pub(crate) fn migrate(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
