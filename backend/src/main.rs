mod auth;
mod code_resources;
mod config;
mod provider;
mod services;
mod storage;
mod view_model;

use crate::config::{AppConfig, Args};
use crate::provider::LocalizationProvider;
use crate::storage::ResourceRepository;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let config =
        AppConfig::load(&args).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Prepare the store and register the admin UI's own captions
    let repository = ResourceRepository::new(&config.database.path);
    repository.initialize_schema().map_err(io::Error::other)?;
    code_resources::synchronize(&repository, code_resources::admin_ui_resources())
        .map_err(io::Error::other)?;

    let provider = LocalizationProvider::new(repository);
    info!("Using database {}", provider.repository().db_path().display());
    let ui = config.ui.clone();
    let host = config.server.host.clone();
    let port = config.server.port;
    let url = format!("http://{}:{}{}/", host, port, ui.root_url);

    if config.server.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Admin UI running at {}", url);

    HttpServer::new(move || {
        let root_url = ui.root_url.clone();
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(provider.clone()))
            .app_data(web::Data::new(ui.clone()))
            .configure(|cfg| services::configure(cfg, &root_url))
            .default_service(web::route().to(services::ui::serve_embedded))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
