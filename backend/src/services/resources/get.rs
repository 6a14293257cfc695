use crate::auth::Principal;
use crate::config::UiConfig;
use crate::provider::LocalizationProvider;
use crate::services::resources::load_snapshot;
use crate::view_model::{list, KeyLengths};
use actix_web::{web, HttpResponse, Responder, ResponseError};

/// `GET {root_url}/api/service`: every resource as a flat list with its translations.
pub async fn process(
    principal: Principal,
    provider: web::Data<LocalizationProvider>,
    ui: web::Data<UiConfig>,
) -> impl Responder {
    match load_snapshot(&principal, &provider, &ui).await {
        Ok(snapshot) => HttpResponse::Ok().json(list::build(
            &snapshot.resources,
            snapshot.languages,
            snapshot.options,
            KeyLengths::from(ui.get_ref()),
        )),
        Err(e) => e.error_response(),
    }
}
