use askama::Template;
use axum::{
    body::Body,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{
    Error,
    error::ErrorInfo,
    models::{Pref, TemplateData},
};

use super::HTML_CONTENT_TYPE;

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageData {
    t: TemplateData,
    error: ErrorInfo,
}

pub async fn not_found_handler() -> Error {
    Error::NotFound {
        msg: String::from("The page you are looking for cannot be found."),
    }
}

/// Render a themed error page
pub fn handle_error(pref: &Pref, error: ErrorInfo) -> Response<Body> {
    let status_code = error.status_code;

    let mut t = TemplateData::new(pref);
    t.title = error.title.clone();

    let message = error.message.clone();
    let tpl = ErrorPageData { t, error };

    match tpl.render() {
        Ok(html) => (
            status_code,
            [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
            html,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to render error page: {}", e);
            (status_code, message).into_response()
        }
    }
}
