//! # HTTP Services
//!
//! - `resources`: the JSON API consumed by the admin UI (`{root_url}/api/service`).
//! - `ui`: the embedded admin shell page and its static assets.

mod error;
pub mod resources;
pub mod ui;

pub use error::ServiceError;

use actix_web::web;

/// Registers every route below the configured root url.
pub fn configure(cfg: &mut web::ServiceConfig, root_url: &str) {
    cfg.service(resources::configure_routes(root_url));
    ui::configure(cfg, root_url);
}

/// Runs repository work on the blocking pool so the request workers stay free.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}
