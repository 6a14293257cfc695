//! Embedded admin shell.
//!
//! The admin pages (`{root_url}/` and `{root_url}/tree`) are a static shell that
//! fetches everything else from the resource service. Files are compiled into the
//! binary from `static/`. The shell links its assets relatively, so a bare
//! `{root_url}` is redirected to `{root_url}/`.

use crate::config::UiConfig;
use actix_web::http::header;
use actix_web::web::{get, resource};
use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static");

const INDEX: &str = "index.html";

pub fn configure(cfg: &mut web::ServiceConfig, root_url: &str) {
    cfg.service(
        resource(vec![format!("{}/", root_url), format!("{}/tree", root_url)])
            .route(get().to(index)),
    );
    if !root_url.is_empty() {
        cfg.service(resource(root_url).route(get().to(add_trailing_slash)));
    }
}

async fn add_trailing_slash(req: HttpRequest) -> HttpResponse {
    let mut location = format!("{}/", req.path());
    if !req.query_string().is_empty() {
        location.push('?');
        location.push_str(req.query_string());
    }
    HttpResponse::PermanentRedirect()
        .insert_header((header::LOCATION, location))
        .finish()
}

async fn index() -> HttpResponse {
    embedded_file(INDEX).unwrap_or_else(|| HttpResponse::NotFound().body("Not Found"))
}

fn embedded_file(file_path: &str) -> Option<HttpResponse> {
    STATIC_DIR.get_file(file_path).map(|file| {
        let mime = from_path(file_path).first_or_octet_stream();
        HttpResponse::Ok()
            .content_type(mime.as_ref())
            .body(file.contents().to_vec())
    })
}

/// Fallback for everything no route matched: static assets below the root url.
pub async fn serve_embedded(req: HttpRequest, ui: web::Data<UiConfig>) -> HttpResponse {
    let Some(relative) = req.path().strip_prefix(ui.root_url.as_str()) else {
        return HttpResponse::NotFound().body("Not Found");
    };
    let file_path = relative.trim_start_matches('/');
    let file_path = if file_path.is_empty() { INDEX } else { file_path };

    embedded_file(file_path).unwrap_or_else(|| HttpResponse::NotFound().body("Not Found"))
}
