use crate::view_model::{resource_items, truncate_key, KeyLengths};
use localization_common::model::api::{
    CultureApiModel, LocalizationResourceApiModel, ResourceListItemApiModel, UiOptionsApiModel,
};
use localization_common::model::resource::LocalizationResource;

/// Builds the flat list projection, one row per resource in the given order.
pub fn build(
    resources: &[LocalizationResource],
    languages: Vec<CultureApiModel>,
    options: UiOptionsApiModel,
    lengths: KeyLengths,
) -> LocalizationResourceApiModel {
    let resources = resources
        .iter()
        .map(|resource| ResourceListItemApiModel {
            key: resource.resource_key.clone(),
            display_key: truncate_key(&resource.resource_key, lengths.display),
            title_key: truncate_key(&resource.resource_key, lengths.popup_title),
            value: resource_items(resource),
            allow_delete: !resource.from_code,
            is_hidden: resource.is_hidden,
        })
        .collect();

    LocalizationResourceApiModel {
        resources,
        languages,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localization_common::model::resource::LocalizationResourceTranslation;

    #[test]
    fn rows_carry_translations_and_flags() {
        let mut from_code = LocalizationResource::new("App.Title");
        from_code.from_code = true;
        from_code.is_hidden = true;
        from_code
            .translations
            .push(LocalizationResourceTranslation::new(1, "", "Title"));
        from_code
            .translations
            .push(LocalizationResourceTranslation::new(1, "sv", "Titel"));
        let long = LocalizationResource::new("x".repeat(100));

        let model = build(
            &[from_code, long],
            vec![CultureApiModel {
                code: "sv".to_string(),
                display: "Swedish".to_string(),
            }],
            UiOptionsApiModel {
                admin_mode: true,
                ..UiOptionsApiModel::default()
            },
            KeyLengths {
                display: 80,
                popup_title: 20,
            },
        );

        assert_eq!(model.resources.len(), 2);
        let first = &model.resources[0];
        assert!(!first.allow_delete);
        assert!(first.is_hidden);
        assert_eq!(first.value.len(), 2);
        assert_eq!(first.value[1].source_culture, "sv");
        assert_eq!(first.value[1].key, "App.Title");

        let second = &model.resources[1];
        assert!(second.allow_delete);
        assert_eq!(second.display_key.chars().count(), 83);
        assert_eq!(second.title_key.chars().count(), 23);
        assert!(model.options.admin_mode);
        assert_eq!(model.languages[0].display, "Swedish");
    }
}
