use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document produced by the export endpoint and accepted by import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceExport {
    pub exported_at: DateTime<Utc>,
    pub resources: Vec<ExportedResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedResource {
    pub resource_key: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub from_code: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub translations: Vec<ExportedTranslation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedTranslation {
    pub language: String,
    pub value: Option<String>,
}
