use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, get_service, post};
use axum::{Extension, Router, middleware};
use std::path::Path;
use tower::ServiceBuilder;
use tower_cookies::CookieManagerLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::ErrorInfo;
use crate::models::Pref;
use crate::run::AppState;
use crate::web::middleware::pref_middleware;
use crate::web::security_headers::add_security_headers;

use super::{
    dark_theme_handler, handle_error, health_live_handler, index_handler, light_theme_handler,
    not_found_handler, section_handler, toggle_theme_handler,
};

/// Files served from the root of the public dir
const ROOT_FILES: [&str; 5] = [
    "resume.pdf",
    "profile.webp",
    "bedtalk.png",
    "pillow.png",
    "favicon.ico",
];

pub fn all_routes(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .merge(page_routes(state))
        .merge(assets_routes(&public_dir))
        .route("/health/liveness", get(health_live_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CookieManagerLayer::new())
                .layer(middleware::from_fn(add_security_headers)),
        )
}

pub fn assets_routes(dir: &Path) -> Router {
    let mut router = Router::new();

    for name in ROOT_FILES {
        router = router.route(
            &format!("/{name}"),
            get_service(ServeFile::new(dir.join(name))),
        );
    }

    router.nest_service(
        "/assets",
        get_service(
            ServeDir::new(dir.join("assets")).not_found_service(file_not_found.into_service()),
        ),
    )
}

async fn file_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "File not found")
}

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/sections/{section_id}", get(section_handler))
        .route("/prefs/theme/toggle", post(toggle_theme_handler))
        .route("/prefs/theme/light", post(light_theme_handler))
        .route("/prefs/theme/dark", post(dark_theme_handler))
        .fallback(not_found_handler)
        .layer(middleware::map_response(response_mapper))
        .layer(middleware::from_fn(pref_middleware))
        .with_state(state)
}

async fn response_mapper(Extension(pref): Extension<Pref>, res: Response) -> Response {
    let error = res.extensions().get::<ErrorInfo>().cloned();
    if let Some(e) = error {
        if e.status_code.is_server_error() {
            error!("{}", e.message);
        }

        return handle_error(&pref, e);
    }
    res
}
