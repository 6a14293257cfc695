//! # Resource Service
//!
//! JSON endpoints used by the admin UI, mounted under `{root_url}/api/service`.
//!
//! ## Registered Routes:
//!
//! *   **`GET /`** (`get::process`): every resource with its translations as a flat
//!     list, the available languages (invariant first) and the UI options.
//! *   **`GET /tree`** (`tree::process`): the same data nested by key segment.
//! *   **`POST /Save`** (`save::process`): `{ key, language, translation }`; creates
//!     the translation or replaces its value.
//! *   **`POST /Remove`** (`remove::process`): `{ key, language }`; deletes the translation.
//! *   **`GET /export`** (`export::process`): downloadable JSON export of all resources.
//! *   **`POST /import`** (`import::process`): multipart upload of an export document,
//!     merged into the store. Admins only.
//!
//! Every route requires an admin or editor role (see `auth`).

mod export;
mod get;
mod import;
mod remove;
mod save;
mod tree;

use crate::auth::{authorize, Principal};
use crate::config::UiConfig;
use crate::provider::queries::{AvailableLanguages, GetAllResources};
use crate::provider::LocalizationProvider;
use crate::services::{run_blocking, ServiceError};
use crate::view_model::cultures;
use actix_web::web::{get, post, scope};
use actix_web::Scope;
use localization_common::model::api::{CultureApiModel, UiOptionsApiModel};
use localization_common::model::resource::LocalizationResource;

const API_PATH: &str = "/api/service";

pub fn configure_routes(root_url: &str) -> Scope {
    scope(&format!("{}{}", root_url, API_PATH))
        .route("", get().to(get::process))
        .route("/", get().to(get::process))
        .route("/tree", get().to(tree::process))
        .route("/Save", post().to(save::process))
        .route("/Remove", post().to(remove::process))
        .route("/export", get().to(export::process))
        .route("/import", post().to(import::process))
}

/// Everything both read projections are built from.
struct ResourceSnapshot {
    resources: Vec<LocalizationResource>,
    languages: Vec<CultureApiModel>,
    options: UiOptionsApiModel,
}

async fn load_snapshot(
    principal: &Principal,
    provider: &LocalizationProvider,
    ui: &UiConfig,
) -> Result<ResourceSnapshot, ServiceError> {
    let access = authorize(principal, ui)?;

    let provider = provider.clone();
    let (resources, languages) = run_blocking(move || {
        let languages = provider.query(&AvailableLanguages {
            include_invariant: true,
        })?;
        let resources = provider.query(&GetAllResources)?;
        Ok((resources, languages))
    })
    .await?;

    Ok(ResourceSnapshot {
        resources,
        languages: cultures(&languages, &ui.language_names),
        options: UiOptionsApiModel {
            admin_mode: access.is_admin,
            show_invariant_culture: ui.show_invariant_culture,
            show_hidden_resources: ui.show_hidden_resources,
        },
    })
}

#[cfg(test)]
mod tests {
    use crate::auth::{ROLES_HEADER, USER_HEADER};
    use crate::config::UiConfig;
    use crate::provider::LocalizationProvider;
    use crate::services;
    use crate::storage::repository_tests::{seed, temp_repository};
    use crate::storage::ResourceRepository;
    use actix_web::http::{header, StatusCode};
    use actix_web::test::{self, TestRequest};
    use actix_web::{web, App};
    use localization_common::model::resource::LocalizationResource;
    use localization_common::model::resource::LocalizationResourceTranslation;
    use serde_json::{json, Value};

    const ROOT: &str = "/localization-admin";

    macro_rules! test_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(LocalizationProvider::new($repo.clone())))
                    .app_data(web::Data::new(UiConfig {
                        language_names: [("sv".to_string(), "Swedish".to_string())].into(),
                        ..UiConfig::default()
                    }))
                    .configure(|cfg| services::configure(cfg, ROOT)),
            )
            .await
        };
    }

    fn as_admin(req: TestRequest) -> TestRequest {
        req.insert_header((USER_HEADER, "anna"))
            .insert_header((ROLES_HEADER, "LocalizationAdmins"))
    }

    fn as_editor(req: TestRequest) -> TestRequest {
        req.insert_header((USER_HEADER, "erik"))
            .insert_header((ROLES_HEADER, "LocalizationEditors"))
    }

    fn seeded() -> (tempfile::TempDir, ResourceRepository) {
        let (dir, repo) = temp_repository();
        seed(&repo, "App.Views.Title", &[("", "Title"), ("sv", "Titel")]);
        seed(&repo, "App.Errors.NotFound", &[("en", "Not found")]);
        (dir, repo)
    }

    fn translation_of<'a>(list: &'a Value, key: &str, language: &str) -> Option<&'a Value> {
        list["resources"]
            .as_array()?
            .iter()
            .find(|r| r["key"] == key)?["value"]
            .as_array()?
            .iter()
            .find(|t| t["sourceCulture"] == language)
            .map(|t| &t["value"])
    }

    #[actix_web::test]
    async fn list_requires_authentication() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = TestRequest::get().uri("/localization-admin/api/service").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn list_is_sorted_with_languages_and_options() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_admin(TestRequest::get().uri("/localization-admin/api/service")).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let keys: Vec<&str> = body["resources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["key"].as_str().unwrap())
            .collect();
        assert_eq!(keys, vec!["App.Errors.NotFound", "App.Views.Title"]);
        assert_eq!(body["languages"][0]["code"], "");
        assert_eq!(
            body["languages"],
            json!([
                { "code": "", "display": "Invariant Language (Invariant Country)" },
                { "code": "en", "display": "en" },
                { "code": "sv", "display": "Swedish" }
            ])
        );
        assert_eq!(body["options"]["adminMode"], true);
        assert_eq!(body["options"]["showHiddenResources"], false);
    }

    #[actix_web::test]
    async fn editors_are_not_in_admin_mode() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_editor(TestRequest::get().uri("/localization-admin/api/service/")).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["options"]["adminMode"], false);
    }

    #[actix_web::test]
    async fn save_then_fetch_returns_the_same_value() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_editor(TestRequest::post().uri("/localization-admin/api/service/Save"))
            .set_json(json!({ "key": "App.Views.Title", "language": "sv", "translation": "Rubrik" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "message": "Ok" }));

        let req = as_editor(TestRequest::get().uri("/localization-admin/api/service")).to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(translation_of(&list, "App.Views.Title", "sv"), Some(&json!("Rubrik")));
    }

    #[actix_web::test]
    async fn save_accepts_value_alias_for_new_language() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_admin(TestRequest::post().uri("/localization-admin/api/service/Save"))
            .set_json(json!({ "key": "App.Errors.NotFound", "language": "no", "value": "Ikke funnet" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = repo.get_by_key("App.Errors.NotFound").unwrap().unwrap();
        assert_eq!(stored.translation("no").unwrap().value.as_deref(), Some("Ikke funnet"));
        assert!(stored.is_modified);
    }

    #[actix_web::test]
    async fn save_rejects_invalid_language() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_admin(TestRequest::post().uri("/localization-admin/api/service/Save"))
            .set_json(json!({ "key": "App.Views.Title", "language": "xx_YY!", "translation": "?" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn save_with_differently_cased_language_updates_the_same_row() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_editor(TestRequest::post().uri("/localization-admin/api/service/Save"))
            .set_json(json!({ "key": "App.Views.Title", "language": "SV", "translation": "Rubrik" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let stored = repo.get_by_key("App.Views.Title").unwrap().unwrap();
        assert_eq!(stored.translations.len(), 2);
        assert_eq!(stored.translation("sv").unwrap().value.as_deref(), Some("Rubrik"));
        assert_eq!(repo.get_available_languages().unwrap(), vec!["", "en", "sv"]);
    }

    #[actix_web::test]
    async fn remove_then_fetch_omits_the_translation() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_editor(TestRequest::post().uri("/localization-admin/api/service/Remove"))
            .set_json(json!({ "key": "App.Views.Title", "language": "sv" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = as_editor(TestRequest::get().uri("/localization-admin/api/service")).to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(translation_of(&list, "App.Views.Title", "sv"), None);
        assert!(translation_of(&list, "App.Views.Title", "").is_some());
    }

    #[actix_web::test]
    async fn removing_code_invariant_is_a_bad_request() {
        let (_dir, repo) = temp_repository();
        let mut resource = LocalizationResource::new("App.Code");
        resource.from_code = true;
        resource
            .translations
            .push(LocalizationResourceTranslation::new(0, "", "Code text"));
        repo.insert_resource(&resource).unwrap();
        let app = test_app!(repo);

        let req = as_admin(TestRequest::post().uri("/localization-admin/api/service/Remove"))
            .set_json(json!({ "key": "App.Code", "language": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn tree_nests_keys() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_admin(TestRequest::get().uri("/localization-admin/api/service/tree")).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let app_node = &body["resources"][0];
        assert_eq!(app_node["key"], "App");
        assert_eq!(app_node["isLeaf"], false);
        assert_eq!(app_node["children"][1]["key"], "Views");
        let title = &app_node["children"][1]["children"][0];
        assert_eq!(title["path"], "App.Views.Title");
        assert_eq!(title["isLeaf"], true);
        assert_eq!(title["translations"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn export_is_an_attachment() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = as_editor(TestRequest::get().uri("/localization-admin/api/service/export")).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap();
        assert!(disposition.to_str().unwrap().starts_with("attachment"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["resources"].as_array().unwrap().len(), 2);
    }

    fn multipart_request(req: TestRequest, document: &Value) -> TestRequest {
        let boundary = "----localization-import";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"export.json\"\r\nContent-Type: application/json\r\n\r\n{doc}\r\n--{b}--\r\n",
            b = boundary,
            doc = document
        );
        req.insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        ))
        .set_payload(body)
    }

    fn import_document() -> Value {
        json!({
            "exportedAt": "2024-03-01T10:00:00Z",
            "resources": [
                { "resourceKey": "App.Imported", "translations": [ { "language": "en", "value": "Imported" } ] },
                { "resourceKey": "App.Views.Title", "translations": [ { "language": "sv", "value": "Importerad" } ] }
            ]
        })
    }

    #[actix_web::test]
    async fn import_merges_document() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = multipart_request(
            as_admin(TestRequest::post().uri("/localization-admin/api/service/import")),
            &import_document(),
        )
        .to_request();
        let summary: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(summary, json!({ "inserted": 1, "updated": 1, "unchanged": 0 }));
        let imported = repo.get_by_key("App.Imported").unwrap().unwrap();
        assert_eq!(imported.author, "anna");
        let title = repo.get_by_key("App.Views.Title").unwrap().unwrap();
        assert_eq!(title.translation("sv").unwrap().value.as_deref(), Some("Importerad"));
    }

    #[actix_web::test]
    async fn import_is_admin_only() {
        let (_dir, repo) = seeded();
        let app = test_app!(repo);

        let req = multipart_request(
            as_editor(TestRequest::post().uri("/localization-admin/api/service/import")),
            &import_document(),
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(repo.get_by_key("App.Imported").unwrap().is_none());
    }
}
