use crate::auth::{authorize, Principal};
use crate::config::UiConfig;
use crate::provider::commands::RemoveTranslation;
use crate::provider::LocalizationProvider;
use crate::services::{run_blocking, ServiceError};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use localization_common::model::api::ServiceOperationResult;
use localization_common::requests::RemoveTranslationRequestModel;

/// `POST {root_url}/api/service/Remove`: deletes one translation.
pub async fn process(
    principal: Principal,
    provider: web::Data<LocalizationProvider>,
    ui: web::Data<UiConfig>,
    payload: web::Json<RemoveTranslationRequestModel>,
) -> impl Responder {
    match remove_translation(&principal, &provider, &ui, payload.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ServiceOperationResult::ok()),
        Err(e) => e.error_response(),
    }
}

async fn remove_translation(
    principal: &Principal,
    provider: &LocalizationProvider,
    ui: &UiConfig,
    model: RemoveTranslationRequestModel,
) -> Result<(), ServiceError> {
    authorize(principal, ui)?;

    let command = RemoveTranslation::new(model.key, model.language);
    let provider = provider.clone();
    run_blocking(move || Ok(provider.send(&command)?)).await
}
