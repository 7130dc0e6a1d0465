use askama::Template;
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use porter_auth::CurrentSession;
use porter_core::auth::Session;

use crate::error::AppError;

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => AppError::from(err).into_response(),
        }
    }
}

/// Home page, rendered for the browser's current session.
#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    session: Session,
}

/// Handler for the home page (GET /).
pub async fn home(CurrentSession(session): CurrentSession) -> impl IntoResponse {
    HtmlTemplate(HomeTemplate { session })
}

/// Handler for GET /index.html.
pub async fn index_redirect() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")])
}
