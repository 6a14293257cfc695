use crate::storage::error::{RepositoryError, RepositoryResult};
use crate::storage::schema;
use chrono::{DateTime, Utc};
use localization_common::model::resource::{LocalizationResource, LocalizationResourceTranslation};
use log::debug;
use rusqlite::{params, Connection, Row};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const SELECT_RESOURCES: &str = r#"
    SELECT
        r.Id,
        r.ResourceKey,
        r.Author,
        r.FromCode,
        r.IsHidden,
        r.IsModified,
        r.ModificationDate,
        r.Notes,
        t.Id AS TranslationId,
        t.Value AS Translation,
        t.Language
    FROM LocalizationResources r
    LEFT JOIN LocalizationResourceTranslations t ON r.Id = t.ResourceId"#;

/// One row of the resource/translation join.
///
/// Translation columns are `None` for resources that have no translations yet.
struct ResourceRow {
    resource: LocalizationResource,
    translation: Option<LocalizationResourceTranslation>,
}

impl ResourceRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        let id: i64 = row.get(0)?;
        let resource = LocalizationResource {
            id,
            resource_key: row.get(1)?,
            author: row.get(2)?,
            from_code: row.get(3)?,
            is_hidden: row.get(4)?,
            is_modified: row.get(5)?,
            modification_date: row.get::<_, DateTime<Utc>>(6)?,
            notes: row.get(7)?,
            translations: Vec::new(),
        };

        let translation = match row.get::<_, Option<i64>>(8)? {
            Some(translation_id) => Some(LocalizationResourceTranslation {
                id: translation_id,
                resource_id: id,
                value: row.get(9)?,
                language: row.get::<_, Option<String>>(10)?.unwrap_or_default(),
            }),
            None => None,
        };

        Ok(Self {
            resource,
            translation,
        })
    }
}

/// Folds joined rows into resources, keyed by resource key.
///
/// The first row seen for a key creates the resource; later rows only contribute
/// their translation. Output order is the order in which keys first appear.
fn aggregate<I>(rows: I) -> rusqlite::Result<Vec<LocalizationResource>>
where
    I: IntoIterator<Item = rusqlite::Result<ResourceRow>>,
{
    let mut lookup: HashMap<String, usize> = HashMap::new();
    let mut resources: Vec<LocalizationResource> = Vec::new();

    for row in rows {
        let ResourceRow {
            resource,
            translation,
        } = row?;

        let existing = lookup.get(&resource.resource_key).copied();
        let index = match existing {
            Some(index) => index,
            None => {
                lookup.insert(resource.resource_key.clone(), resources.len());
                resources.push(resource);
                resources.len() - 1
            }
        };

        if let Some(translation) = translation {
            resources[index].translations.push(translation);
        }
    }

    Ok(resources)
}

/// Data access for localization resources.
///
/// The repository holds no connection; each call opens the database file, does
/// its work in a single statement (or transaction) and closes it again.
#[derive(Debug, Clone)]
pub struct ResourceRepository {
    db_path: PathBuf,
}

impl ResourceRepository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> RepositoryResult<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    /// Creates the schema when the database is new. Safe to call on every start.
    pub fn initialize_schema(&self) -> RepositoryResult<()> {
        let conn = self.open()?;
        schema::migrate(&conn)?;
        Ok(())
    }

    /// Loads every resource together with all of its translations.
    pub fn get_all(&self) -> RepositoryResult<Vec<LocalizationResource>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(&format!("{SELECT_RESOURCES} ORDER BY r.Id, t.Id"))?;
        let rows = stmt.query_map([], ResourceRow::read)?;
        let resources = aggregate(rows)?;

        debug!("Loaded {} localization resources", resources.len());
        Ok(resources)
    }

    /// Loads a single resource by key, or `None` if no such resource exists.
    pub fn get_by_key(&self, resource_key: &str) -> RepositoryResult<Option<LocalizationResource>> {
        if resource_key.is_empty() {
            return Err(RepositoryError::InvalidArgument("resource_key"));
        }

        let conn = self.open()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_RESOURCES} WHERE r.ResourceKey = ?1 ORDER BY t.Id"
        ))?;
        let rows = stmt.query_map(params![resource_key], ResourceRow::read)?;

        Ok(aggregate(rows)?.into_iter().next())
    }

    /// Distinct languages that have at least one translation, sorted.
    pub fn get_available_languages(&self) -> RepositoryResult<Vec<String>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT Language FROM LocalizationResourceTranslations ORDER BY Language",
        )?;
        let languages = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(languages)
    }

    /// Inserts `translation` for `resource` and returns the new translation id.
    pub fn add_translation_for_resource(
        &self,
        resource: &LocalizationResource,
        translation: &LocalizationResourceTranslation,
    ) -> RepositoryResult<i64> {
        ensure_persisted(resource)?;

        let conn = self.open()?;
        conn.execute(
            "INSERT INTO LocalizationResourceTranslations (Language, ResourceId, Value) VALUES (?1, ?2, ?3)",
            params![translation.language, resource.id, translation.value],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update_translation(
        &self,
        resource: &LocalizationResource,
        translation: &LocalizationResourceTranslation,
    ) -> RepositoryResult<()> {
        ensure_persisted(resource)?;
        if translation.id <= 0 {
            return Err(RepositoryError::InvalidArgument("translation"));
        }

        let conn = self.open()?;
        conn.execute(
            "UPDATE LocalizationResourceTranslations SET Value = ?1 WHERE Id = ?2",
            params![translation.value, translation.id],
        )?;
        Ok(())
    }

    pub fn delete_translation(
        &self,
        resource: &LocalizationResource,
        translation: &LocalizationResourceTranslation,
    ) -> RepositoryResult<()> {
        ensure_persisted(resource)?;
        if translation.id <= 0 {
            return Err(RepositoryError::InvalidArgument("translation"));
        }

        let conn = self.open()?;
        conn.execute(
            "DELETE FROM LocalizationResourceTranslations WHERE Id = ?1 AND ResourceId = ?2",
            params![translation.id, resource.id],
        )?;
        Ok(())
    }

    /// Writes the modification flag, timestamp, hidden flag and notes of `resource`.
    pub fn update_resource(&self, resource: &LocalizationResource) -> RepositoryResult<()> {
        ensure_persisted(resource)?;

        let conn = self.open()?;
        conn.execute(
            "UPDATE LocalizationResources SET IsModified = ?1, ModificationDate = ?2, IsHidden = ?3, Notes = ?4 WHERE Id = ?5",
            params![
                resource.is_modified,
                resource.modification_date,
                resource.is_hidden,
                resource.notes,
                resource.id
            ],
        )?;
        Ok(())
    }

    /// Inserts a new resource with all of its translations and returns its id.
    pub fn insert_resource(&self, resource: &LocalizationResource) -> RepositoryResult<i64> {
        if resource.resource_key.is_empty() {
            return Err(RepositoryError::InvalidArgument("resource"));
        }

        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO LocalizationResources (ResourceKey, Author, FromCode, IsHidden, IsModified, ModificationDate, Notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                resource.resource_key,
                resource.author,
                resource.from_code,
                resource.is_hidden,
                resource.is_modified,
                resource.modification_date,
                resource.notes
            ],
        )?;
        let id = tx.last_insert_rowid();

        for translation in &resource.translations {
            tx.execute(
                "INSERT INTO LocalizationResourceTranslations (Language, ResourceId, Value) VALUES (?1, ?2, ?3)",
                params![translation.language, id, translation.value],
            )?;
        }
        tx.commit()?;

        Ok(id)
    }
}

fn ensure_persisted(resource: &LocalizationResource) -> RepositoryResult<()> {
    if resource.id <= 0 {
        return Err(RepositoryError::InvalidArgument("resource"));
    }
    Ok(())
}
