//! Static file serving for allow-listed asset types.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use porter_core::assets::{content_type, servable_asset_name};

use crate::state::AppState;

/// Serve `<assets_dir>/<name>` for any GET whose last path segment is an
/// allow-listed asset. Everything else is a 404.
pub async fn serve_static(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let Some(name) = servable_asset_name(uri.path()).filter(|_| method == Method::GET) else {
        tracing::debug!(%method, path = uri.path(), "no route");
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read(state.assets_dir.join(name)).await {
        Ok(contents) => (
            [
                (header::CONTENT_TYPE, content_type(name)),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            contents,
        )
            .into_response(),
        Err(e) => {
            tracing::debug!(error = %e, asset = name, "asset not readable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
