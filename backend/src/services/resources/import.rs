use crate::auth::{authorize, Principal};
use crate::config::UiConfig;
use crate::provider::commands::{ImportResources, ImportSummary};
use crate::provider::LocalizationProvider;
use crate::services::{run_blocking, ServiceError};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use futures_util::StreamExt;
use localization_common::model::export::ResourceExport;

/// Upper bound for an uploaded export document.
const MAX_IMPORT_BYTES: usize = 10 * 1024 * 1024;

/// `POST {root_url}/api/service/import`: merges an uploaded export document.
///
/// Expects `multipart/form-data` with the document in a `file` field. Admins only.
pub async fn process(
    principal: Principal,
    provider: web::Data<LocalizationProvider>,
    ui: web::Data<UiConfig>,
    payload: Multipart,
) -> impl Responder {
    match import_resources(&principal, &provider, &ui, payload).await {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(e) => e.error_response(),
    }
}

async fn import_resources(
    principal: &Principal,
    provider: &LocalizationProvider,
    ui: &UiConfig,
    payload: Multipart,
) -> Result<ImportSummary, ServiceError> {
    if !authorize(principal, ui)?.is_admin {
        return Err(ServiceError::Forbidden);
    }

    let bytes = read_file_field(payload).await?;
    let document: ResourceExport = serde_json::from_slice(&bytes)
        .map_err(|e| ServiceError::Upload(format!("not an export document: {}", e)))?;

    let command = ImportResources {
        resources: document.resources,
        author: principal
            .name
            .clone()
            .unwrap_or_else(|| "import".to_string()),
    };
    let provider = provider.clone();
    run_blocking(move || Ok(provider.send(&command)?)).await
}

/// Collects the bytes of the `file` part, ignoring any other parts.
async fn read_file_field(mut payload: Multipart) -> Result<Vec<u8>, ServiceError> {
    let mut file: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ServiceError::Upload(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        if name.as_deref() != Some("file") {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ServiceError::Upload(e.to_string()))?;
            if bytes.len() + chunk.len() > MAX_IMPORT_BYTES {
                return Err(ServiceError::Upload("file is too large".to_string()));
            }
            bytes.extend_from_slice(&chunk);
        }
        file = Some(bytes);
    }

    file.ok_or_else(|| ServiceError::Upload("missing `file` field".to_string()))
}
