use crate::model::api::{CultureApiModel, ResourceItemApiModel, UiOptionsApiModel};
use serde::{Deserialize, Serialize};

/// Hierarchical projection: resource keys split on `.` into nested nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationResourceApiTreeModel {
    pub resources: Vec<ResourceTreeNodeApiModel>,
    pub languages: Vec<CultureApiModel>,
    pub options: UiOptionsApiModel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTreeNodeApiModel {
    /// Depth-first sequence number, unique within one response.
    pub id: u32,
    /// Last key segment of this node.
    pub key: String,
    /// Full key up to and including this segment.
    pub path: String,
    pub display_key: String,
    pub title_key: String,
    /// Set when `path` is an actual resource key.
    pub is_leaf: bool,
    pub translations: Vec<ResourceItemApiModel>,
    pub allow_delete: bool,
    pub is_hidden: bool,
    pub children: Vec<ResourceTreeNodeApiModel>,
}
