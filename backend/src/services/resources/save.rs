use crate::auth::{authorize, Principal};
use crate::config::UiConfig;
use crate::provider::commands::CreateOrUpdateTranslation;
use crate::provider::LocalizationProvider;
use crate::services::{run_blocking, ServiceError};
use actix_web::{web, HttpResponse, Responder, ResponseError};
use localization_common::model::api::ServiceOperationResult;
use localization_common::requests::CreateOrUpdateTranslationRequestModel;

/// `POST {root_url}/api/service/Save`: creates or replaces one translation.
pub async fn process(
    principal: Principal,
    provider: web::Data<LocalizationProvider>,
    ui: web::Data<UiConfig>,
    payload: web::Json<CreateOrUpdateTranslationRequestModel>,
) -> impl Responder {
    match save_translation(&principal, &provider, &ui, payload.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(ServiceOperationResult::ok()),
        Err(e) => e.error_response(),
    }
}

async fn save_translation(
    principal: &Principal,
    provider: &LocalizationProvider,
    ui: &UiConfig,
    model: CreateOrUpdateTranslationRequestModel,
) -> Result<(), ServiceError> {
    authorize(principal, ui)?;

    let command = CreateOrUpdateTranslation::new(model.key, model.language, model.translation);
    let provider = provider.clone();
    run_blocking(move || Ok(provider.send(&command)?)).await
}
