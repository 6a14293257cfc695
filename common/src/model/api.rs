//! JSON projections served to the admin UI.
//!
//! Field names are camelCase on the wire because the browser side consumes
//! them directly.

use serde::{Deserialize, Serialize};

/// Flat list projection: one row per resource, one column per language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationResourceApiModel {
    pub resources: Vec<ResourceListItemApiModel>,
    pub languages: Vec<CultureApiModel>,
    pub options: UiOptionsApiModel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListItemApiModel {
    pub key: String,
    /// Key shortened for the grid cell.
    pub display_key: String,
    /// Key shortened for the edit popup title.
    pub title_key: String,
    pub value: Vec<ResourceItemApiModel>,
    /// Code-declared resources keep their translations.
    pub allow_delete: bool,
    pub is_hidden: bool,
}

/// One translation of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItemApiModel {
    pub key: String,
    pub value: Option<String>,
    pub source_culture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CultureApiModel {
    pub code: String,
    pub display: String,
}

/// Visibility switches the UI applies when rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiOptionsApiModel {
    pub admin_mode: bool,
    pub show_invariant_culture: bool,
    pub show_hidden_resources: bool,
}

/// Body returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOperationResult {
    pub message: String,
}

impl ServiceOperationResult {
    pub fn ok() -> Self {
        Self {
            message: "Ok".to_string(),
        }
    }
}
