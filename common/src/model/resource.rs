use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Language identifier of the invariant (language-neutral) culture.
pub const INVARIANT_CULTURE: &str = "";

/// A translatable piece of text, identified by its unique resource key.
///
/// Resources are either declared in code (`from_code`) and registered during
/// synchronization, or created through the admin API. They are never removed
/// implicitly; editing a translation flips `is_modified` and refreshes
/// `modification_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationResource {
    pub id: i64,
    pub resource_key: String,
    pub author: String,
    pub from_code: bool,
    pub is_hidden: bool,
    pub is_modified: bool,
    pub modification_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub translations: Vec<LocalizationResourceTranslation>,
}

impl LocalizationResource {
    pub fn new(resource_key: impl Into<String>) -> Self {
        Self {
            id: 0,
            resource_key: resource_key.into(),
            author: String::new(),
            from_code: false,
            is_hidden: false,
            is_modified: false,
            modification_date: Utc::now(),
            notes: None,
            translations: Vec::new(),
        }
    }

    /// Returns the translation for `language`, if any.
    pub fn translation(&self, language: &str) -> Option<&LocalizationResourceTranslation> {
        self.translations.iter().find(|t| t.language == language)
    }
}

/// A single per-language value of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationResourceTranslation {
    pub id: i64,
    pub resource_id: i64,
    pub language: String,
    pub value: Option<String>,
}

impl LocalizationResourceTranslation {
    pub fn new(resource_id: i64, language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: 0,
            resource_id,
            language: language.into(),
            value: Some(value.into()),
        }
    }

    pub fn is_invariant(&self) -> bool {
        self.language == INVARIANT_CULTURE
    }
}
