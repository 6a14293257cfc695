use crate::view_model::{resource_items, truncate_key, KeyLengths};
use localization_common::model::api::{CultureApiModel, UiOptionsApiModel};
use localization_common::model::resource::LocalizationResource;
use localization_common::model::tree::{LocalizationResourceApiTreeModel, ResourceTreeNodeApiModel};
use std::collections::BTreeMap;

const KEY_SEPARATOR: char = '.';

/// Intermediate trie over key segments; `BTreeMap` keeps siblings sorted.
#[derive(Default)]
struct Branch<'a> {
    children: BTreeMap<&'a str, Branch<'a>>,
    resource: Option<&'a LocalizationResource>,
}

impl<'a> Branch<'a> {
    fn insert(&mut self, resource: &'a LocalizationResource) {
        let mut node = self;
        for segment in resource.resource_key.split(KEY_SEPARATOR) {
            node = node.children.entry(segment).or_default();
        }
        node.resource = Some(resource);
    }
}

struct Flattener {
    next_id: u32,
    lengths: KeyLengths,
}

impl Flattener {
    fn convert(&mut self, segment: &str, parent_path: &str, branch: &Branch<'_>) -> ResourceTreeNodeApiModel {
        let path = if parent_path.is_empty() {
            segment.to_string()
        } else {
            format!("{}{}{}", parent_path, KEY_SEPARATOR, segment)
        };

        self.next_id += 1;
        let mut node = ResourceTreeNodeApiModel {
            id: self.next_id,
            key: segment.to_string(),
            display_key: truncate_key(segment, self.lengths.display),
            title_key: truncate_key(&path, self.lengths.popup_title),
            ..ResourceTreeNodeApiModel::default()
        };

        if let Some(resource) = branch.resource {
            node.is_leaf = true;
            node.translations = resource_items(resource);
            node.allow_delete = !resource.from_code;
            node.is_hidden = resource.is_hidden;
        }

        node.children = branch
            .children
            .iter()
            .map(|(child, sub)| self.convert(child, &path, sub))
            .collect();
        node.path = path;
        node
    }
}

/// Builds the hierarchical projection by splitting keys on `.`.
///
/// A key that is also a prefix of other keys yields a node that is both a leaf
/// and a parent.
pub fn build(
    resources: &[LocalizationResource],
    languages: Vec<CultureApiModel>,
    options: UiOptionsApiModel,
    lengths: KeyLengths,
) -> LocalizationResourceApiTreeModel {
    let mut root = Branch::default();
    for resource in resources {
        root.insert(resource);
    }

    let mut flattener = Flattener { next_id: 0, lengths };
    let resources = root
        .children
        .iter()
        .map(|(segment, branch)| flattener.convert(segment, "", branch))
        .collect();

    LocalizationResourceApiTreeModel {
        resources,
        languages,
        options,
    }
}
