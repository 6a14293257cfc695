use crate::provider::Query;
use crate::storage::{RepositoryResult, ResourceRepository};
use chrono::Utc;
use localization_common::model::export::{ExportedResource, ExportedTranslation, ResourceExport};
use localization_common::model::resource::{LocalizationResource, INVARIANT_CULTURE};

/// Languages that have at least one translation.
///
/// With `include_invariant` the invariant culture is always present and listed first;
/// without it the invariant culture is left out even if translations exist for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailableLanguages {
    pub include_invariant: bool,
}

impl Query for AvailableLanguages {
    type Output = Vec<String>;

    fn execute(&self, repository: &ResourceRepository) -> RepositoryResult<Vec<String>> {
        let mut languages: Vec<String> = repository
            .get_available_languages()?
            .into_iter()
            .filter(|language| language != INVARIANT_CULTURE)
            .collect();

        if self.include_invariant {
            languages.insert(0, INVARIANT_CULTURE.to_string());
        }
        Ok(languages)
    }
}

/// Every resource, ordered by key.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetAllResources;

impl Query for GetAllResources {
    type Output = Vec<LocalizationResource>;

    fn execute(&self, repository: &ResourceRepository) -> RepositoryResult<Vec<LocalizationResource>> {
        let mut resources = repository.get_all()?;
        resources.sort_by(|a, b| a.resource_key.cmp(&b.resource_key));
        Ok(resources)
    }
}

/// Every resource as an export document, the format `ImportResources` reads back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportResources;

impl Query for ExportResources {
    type Output = ResourceExport;

    fn execute(&self, repository: &ResourceRepository) -> RepositoryResult<ResourceExport> {
        let resources = GetAllResources.execute(repository)?;

        Ok(ResourceExport {
            exported_at: Utc::now(),
            resources: resources
                .into_iter()
                .map(|r| ExportedResource {
                    resource_key: r.resource_key,
                    author: Some(r.author),
                    from_code: r.from_code,
                    is_hidden: r.is_hidden,
                    notes: r.notes,
                    translations: r
                        .translations
                        .into_iter()
                        .map(|t| ExportedTranslation {
                            language: t.language,
                            value: t.value,
                        })
                        .collect(),
                })
                .collect(),
        })
    }
}
