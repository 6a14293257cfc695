//! Resources declared in code.
//!
//! The admin UI ships its own captions as hidden, code-defined resources. On start-up
//! they are registered in the store so they can be translated like anything else;
//! resources that already exist are never overwritten, because they may carry edits.

use crate::storage::{RepositoryResult, ResourceRepository};
use localization_common::model::resource::{
    LocalizationResource, LocalizationResourceTranslation, INVARIANT_CULTURE,
};
use log::info;
use std::collections::HashSet;

/// Author recorded for resources registered from code.
pub const CODE_AUTHOR: &str = "type-scanner";

const ADMIN_UI_PREFIX: &str = "LocalizationAdmin.Resources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredResource {
    pub key: String,
    /// Fallback text, stored as the invariant translation.
    pub invariant: String,
    pub hidden: bool,
}

impl DeclaredResource {
    fn into_resource(self) -> LocalizationResource {
        let mut resource = LocalizationResource::new(self.key);
        resource.author = CODE_AUTHOR.to_string();
        resource.from_code = true;
        resource.is_hidden = self.hidden;
        resource.translations.push(LocalizationResourceTranslation::new(
            0,
            INVARIANT_CULTURE,
            self.invariant,
        ));
        resource
    }
}

/// Captions used by the admin UI itself.
pub fn admin_ui_resources() -> Vec<DeclaredResource> {
    [
        ("Title", "Admin UI"),
        ("Header", "Localized Resource Editor"),
        ("Export", "Export"),
        ("Import", "Import"),
        ("Languages", "Languages"),
        ("Settings", "Settings"),
        ("Save", "Ok, Save!"),
        ("Cancel", "Cancel"),
        ("SearchPlaceholder", "if it gets too noisy, type filter here..."),
        ("ResourceKeyColumn", "Key"),
        ("InvariantCultureColumn", "Invariant"),
        ("HiddenColumn", "Is Hidden?"),
    ]
    .into_iter()
    .map(|(name, text)| DeclaredResource {
        key: format!("{}.{}", ADMIN_UI_PREFIX, name),
        invariant: text.to_string(),
        hidden: true,
    })
    .collect()
}

/// Registers every declared resource that is not in the store yet.
/// Returns how many were added.
pub fn synchronize(
    repository: &ResourceRepository,
    declared: Vec<DeclaredResource>,
) -> RepositoryResult<usize> {
    let existing: HashSet<String> = repository
        .get_all()?
        .into_iter()
        .map(|r| r.resource_key)
        .collect();

    let mut added = 0;
    for resource in declared {
        if existing.contains(&resource.key) {
            continue;
        }
        repository.insert_resource(&resource.into_resource())?;
        added += 1;
    }

    info!("Registered {} code resources", added);
    Ok(added)
}
