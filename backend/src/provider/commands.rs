use crate::provider::language::canonical_language;
use crate::provider::{Command, CommandError};
use crate::storage::ResourceRepository;
use chrono::Utc;
use localization_common::model::export::ExportedResource;
use localization_common::model::resource::{
    LocalizationResource, LocalizationResourceTranslation,
};
use log::{info, warn};
use serde::Serialize;

/// Longest resource key accepted from an import, in characters.
pub const MAX_KEY_LENGTH: usize = 1024;
/// Most `.` separated segments accepted in an imported resource key.
pub const MAX_KEY_SEGMENTS: usize = 64;

fn require_language(language: &str) -> Result<String, CommandError> {
    canonical_language(language).ok_or_else(|| CommandError::InvalidLanguage(language.to_string()))
}

/// Sets the translation of `key` in `language`, adding it when missing.
///
/// The language is canonicalized first, so `SV-se` updates an existing `sv-SE` row.
/// An unknown key is a no-op: resources are only created by synchronization or import.
#[derive(Debug, Clone)]
pub struct CreateOrUpdateTranslation {
    pub key: String,
    pub language: String,
    pub translation: String,
}

impl CreateOrUpdateTranslation {
    pub fn new(
        key: impl Into<String>,
        language: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            language: language.into(),
            translation: translation.into(),
        }
    }
}

impl Command for CreateOrUpdateTranslation {
    type Output = ();

    fn execute(&self, repository: &ResourceRepository) -> Result<(), CommandError> {
        let language = require_language(&self.language)?;

        let Some(mut resource) = repository.get_by_key(&self.key)? else {
            warn!("Translation for unknown resource `{}` ignored", self.key);
            return Ok(());
        };

        match resource.translation(&language).cloned() {
            Some(mut existing) => {
                existing.value = Some(self.translation.clone());
                repository.update_translation(&resource, &existing)?;
            }
            None => {
                let translation = LocalizationResourceTranslation::new(
                    resource.id,
                    language.clone(),
                    self.translation.clone(),
                );
                repository.add_translation_for_resource(&resource, &translation)?;
            }
        }

        mark_modified(repository, &mut resource)?;
        info!("Saved `{}` translation of `{}`", language, self.key);
        Ok(())
    }
}

/// Deletes the translation of `key` in `language`.
///
/// Unknown keys and missing translations are no-ops. The invariant translation of a
/// code-declared resource is its fallback text and is never deleted.
#[derive(Debug, Clone)]
pub struct RemoveTranslation {
    pub key: String,
    pub language: String,
}

impl RemoveTranslation {
    pub fn new(key: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            language: language.into(),
        }
    }
}

impl Command for RemoveTranslation {
    type Output = ();

    fn execute(&self, repository: &ResourceRepository) -> Result<(), CommandError> {
        let language = require_language(&self.language)?;

        let Some(mut resource) = repository.get_by_key(&self.key)? else {
            return Ok(());
        };
        let Some(existing) = resource.translation(&language).cloned() else {
            return Ok(());
        };

        if resource.from_code && existing.is_invariant() {
            warn!("Refused to delete invariant translation of `{}`", self.key);
            return Err(CommandError::InvariantOfCodeResource(self.key.clone()));
        }

        repository.delete_translation(&resource, &existing)?;
        resource.translations.retain(|t| t.id != existing.id);
        mark_modified(repository, &mut resource)?;

        info!("Removed `{}` translation of `{}`", language, self.key);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

/// Merges exported resources into the store.
///
/// New keys are inserted with the exported flags (`from_code`, `is_hidden`, notes).
/// For existing keys each translation is upserted, `is_hidden` is taken over and notes
/// are replaced when the document carries them; the resource is marked modified if
/// anything changed. The whole batch is validated before the first write.
#[derive(Debug, Clone)]
pub struct ImportResources {
    pub resources: Vec<ExportedResource>,
    pub author: String,
}

impl ImportResources {
    /// Checks every resource and returns the batch with canonical language tags.
    fn validate(&self) -> Result<Vec<ExportedResource>, CommandError> {
        let mut normalized = Vec::with_capacity(self.resources.len());
        for resource in &self.resources {
            let key = &resource.resource_key;
            if key.trim().is_empty() {
                return Err(CommandError::InvalidImport(
                    "resource key must not be empty".to_string(),
                ));
            }
            if key.chars().count() > MAX_KEY_LENGTH {
                return Err(CommandError::InvalidImport(format!(
                    "resource key longer than {} characters",
                    MAX_KEY_LENGTH
                )));
            }
            if key.split('.').count() > MAX_KEY_SEGMENTS {
                return Err(CommandError::InvalidImport(format!(
                    "resource key with more than {} segments",
                    MAX_KEY_SEGMENTS
                )));
            }

            let mut resource = resource.clone();
            let mut seen: Vec<String> = Vec::with_capacity(resource.translations.len());
            for translation in &mut resource.translations {
                translation.language = require_language(&translation.language)?;
                if seen.contains(&translation.language) {
                    return Err(CommandError::InvalidImport(format!(
                        "duplicate `{}` translation for `{}`",
                        translation.language, resource.resource_key
                    )));
                }
                seen.push(translation.language.clone());
            }
            normalized.push(resource);
        }
        Ok(normalized)
    }
}

impl Command for ImportResources {
    type Output = ImportSummary;

    fn execute(&self, repository: &ResourceRepository) -> Result<ImportSummary, CommandError> {
        let resources = self.validate()?;

        let mut summary = ImportSummary::default();
        for incoming in resources {
            match repository.get_by_key(&incoming.resource_key)? {
                None => {
                    let mut resource = LocalizationResource::new(incoming.resource_key);
                    resource.author = incoming.author.unwrap_or_else(|| self.author.clone());
                    resource.from_code = incoming.from_code;
                    resource.is_hidden = incoming.is_hidden;
                    resource.notes = incoming.notes;
                    resource.translations = incoming
                        .translations
                        .into_iter()
                        .map(|t| LocalizationResourceTranslation {
                            id: 0,
                            resource_id: 0,
                            language: t.language,
                            value: t.value,
                        })
                        .collect();
                    repository.insert_resource(&resource)?;
                    summary.inserted += 1;
                }
                Some(mut resource) => {
                    let mut changed = false;
                    for t in &incoming.translations {
                        match resource.translation(&t.language).cloned() {
                            Some(existing) if existing.value == t.value => {}
                            Some(mut existing) => {
                                existing.value = t.value.clone();
                                repository.update_translation(&resource, &existing)?;
                                changed = true;
                            }
                            None => {
                                let translation = LocalizationResourceTranslation {
                                    id: 0,
                                    resource_id: resource.id,
                                    language: t.language.clone(),
                                    value: t.value.clone(),
                                };
                                repository.add_translation_for_resource(&resource, &translation)?;
                                changed = true;
                            }
                        }
                    }

                    if resource.is_hidden != incoming.is_hidden {
                        resource.is_hidden = incoming.is_hidden;
                        changed = true;
                    }
                    if incoming.notes.is_some() && resource.notes != incoming.notes {
                        resource.notes = incoming.notes;
                        changed = true;
                    }

                    if changed {
                        mark_modified(repository, &mut resource)?;
                        summary.updated += 1;
                    } else {
                        summary.unchanged += 1;
                    }
                }
            }
        }

        info!(
            "Import finished: {} inserted, {} updated, {} unchanged",
            summary.inserted, summary.updated, summary.unchanged
        );
        Ok(summary)
    }
}

fn mark_modified(
    repository: &ResourceRepository,
    resource: &mut LocalizationResource,
) -> Result<(), CommandError> {
    resource.is_modified = true;
    resource.modification_date = Utc::now();
    repository.update_resource(resource)?;
    Ok(())
}
