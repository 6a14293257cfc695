use crate::auth::{authorize, Principal};
use crate::config::UiConfig;
use crate::provider::queries::ExportResources;
use crate::provider::LocalizationProvider;
use crate::services::{run_blocking, ServiceError};
use actix_web::http::header;
use actix_web::{web, HttpResponse, Responder, ResponseError};
use localization_common::model::export::ResourceExport;

const EXPORT_FILE_NAME: &str = "localization-resources.json";

/// `GET {root_url}/api/service/export`: all resources as a downloadable JSON document.
pub async fn process(
    principal: Principal,
    provider: web::Data<LocalizationProvider>,
    ui: web::Data<UiConfig>,
) -> impl Responder {
    match export_resources(&principal, &provider, &ui).await {
        Ok(export) => HttpResponse::Ok()
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ))
            .json(export),
        Err(e) => e.error_response(),
    }
}

async fn export_resources(
    principal: &Principal,
    provider: &LocalizationProvider,
    ui: &UiConfig,
) -> Result<ResourceExport, ServiceError> {
    authorize(principal, ui)?;

    let provider = provider.clone();
    run_blocking(move || Ok(provider.query(&ExportResources)?)).await
}
