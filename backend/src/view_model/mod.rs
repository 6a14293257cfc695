//! Assembly of the JSON projections served to the admin UI.
//!
//! Both projections share the per-resource pieces defined here: the truncated keys,
//! the translation items and the language header.

pub mod list;
pub mod tree;

use crate::config::UiConfig;
use crate::provider::language::display_name;
use localization_common::model::api::{CultureApiModel, ResourceItemApiModel};
use localization_common::model::resource::LocalizationResource;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct KeyLengths {
    pub display: usize,
    pub popup_title: usize,
}

impl From<&UiConfig> for KeyLengths {
    fn from(ui: &UiConfig) -> Self {
        Self {
            display: ui.max_resource_key_display_length,
            popup_title: ui.max_resource_key_popup_title_length,
        }
    }
}

/// Keeps the first `max` characters of `key`, appending `...` when something was cut.
pub fn truncate_key(key: &str, max: usize) -> String {
    let trimmed: String = key.chars().take(max).collect();
    if key.chars().count() <= max {
        trimmed
    } else {
        format!("{}...", trimmed)
    }
}

pub(crate) fn resource_items(resource: &LocalizationResource) -> Vec<ResourceItemApiModel> {
    resource
        .translations
        .iter()
        .map(|t| ResourceItemApiModel {
            key: resource.resource_key.clone(),
            value: t.value.clone(),
            source_culture: t.language.clone(),
        })
        .collect()
}

pub fn cultures(languages: &[String], names: &HashMap<String, String>) -> Vec<CultureApiModel> {
    languages
        .iter()
        .map(|code| CultureApiModel {
            code: code.clone(),
            display: display_name(code, names),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_keys_are_unchanged() {
        assert_eq!(truncate_key("App.Title", 80), "App.Title");
    }

    #[test]
    fn key_at_cap_has_no_ellipsis() {
        let key = "k".repeat(80);
        assert_eq!(truncate_key(&key, 80), key);
    }

    #[test]
    fn long_keys_are_cut_at_cap_with_ellipsis() {
        let key = "k".repeat(81);
        let shown = truncate_key(&key, 80);

        assert_eq!(shown.len(), 83);
        assert!(shown.ends_with("k..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_key("ÅÄÖåäö", 3), "ÅÄÖ...");
    }
}
