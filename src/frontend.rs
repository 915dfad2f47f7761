use crate::error::AppError;
use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed the prebuilt frontend
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct Assets;

pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // Unknown API routes answer in JSON, never with the SPA shell
    if path == "api" || path.starts_with("api/") {
        return AppError::NotFound("Not found".to_string()).into_response();
    }

    let path = if path.is_empty() { "index.html" } else { path };

    if let Some(content) = Assets::get(path) {
        return serve_asset(path, content.data.into_owned());
    }

    // If not found, check if it's a directory index
    let index_path = format!("{}/index.html", path.trim_end_matches('/'));
    if let Some(content) = Assets::get(&index_path) {
        return serve_asset(&index_path, content.data.into_owned());
    }

    // Client-side routes fall back to the shell, missing files do not
    if !looks_like_file(path) {
        if let Some(content) = Assets::get("index.html") {
            return serve_asset("index.html", content.data.into_owned());
        }
    }

    not_found()
}

fn serve_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, cache_control_value(path).to_string()),
        ],
        data,
    )
        .into_response()
}

fn cache_control_value(path: &str) -> &'static str {
    // The shell must be revalidated so new deployments are picked up
    if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=3600"
    }
}

fn looks_like_file(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .map(|segment| segment.contains('.'))
        .unwrap_or(false)
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}
