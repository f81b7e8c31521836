use askama::Template;
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
};
use folio::theme::{Theme, ThemeManager};
use snafu::ResultExt;
use tower_cookies::Cookies;
use tracing::debug;

use crate::{
    Result,
    error::{ResponseBuilderSnafu, TemplateSnafu},
    run::AppState,
};

use super::{HTML_CONTENT_TYPE, store::CookieStore};

/// Sent by the page script when it wants the toggle fragment back
pub const FRAGMENT_REQUEST_HEADER: &str = "hx-request";

#[derive(Template)]
#[template(path = "widgets/theme_toggle.html")]
struct ThemeTemplate {
    t: InnerTemplate,
}

struct InnerTemplate {
    theme: Theme,
}

pub async fn toggle_theme_handler(
    cookies: Cookies,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    let mut manager = theme_manager(&state, cookies);
    let theme = manager.toggle();

    debug!("Theme toggled to {}", theme);
    theme_response(&headers, theme, "ThemeToggledEvent")
}

pub async fn light_theme_handler(
    cookies: Cookies,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    theme_handler(state, cookies, &headers, Theme::Light, "LightThemeSetEvent")
}

pub async fn dark_theme_handler(
    cookies: Cookies,
    headers: HeaderMap,
    State(state): State<AppState>,
) -> Result<Response<Body>> {
    theme_handler(state, cookies, &headers, Theme::Dark, "DarkThemeSetEvent")
}

fn theme_handler(
    state: AppState,
    cookies: Cookies,
    headers: &HeaderMap,
    theme: Theme,
    event: &str,
) -> Result<Response<Body>> {
    let mut manager = theme_manager(&state, cookies);
    manager.set(theme);

    debug!("Theme set to {}", theme);
    theme_response(headers, theme, event)
}

fn theme_manager(state: &AppState, cookies: Cookies) -> ThemeManager<CookieStore> {
    ThemeManager::load(CookieStore::new(cookies, state.config.server.https))
}

/// Script requests get the re-rendered toggle in place. Plain form posts
/// go back to the page, which renders with the new cookie.
fn theme_response(headers: &HeaderMap, theme: Theme, event: &str) -> Result<Response<Body>> {
    if headers.get(FRAGMENT_REQUEST_HEADER).is_none() {
        return Ok(Redirect::to("/").into_response());
    }

    let tpl = ThemeTemplate {
        t: InnerTemplate { theme },
    };

    Response::builder()
        .status(200)
        .header(header::CONTENT_TYPE, HTML_CONTENT_TYPE)
        .header("HX-Trigger", event)
        .body(Body::from(tpl.render().context(TemplateSnafu)?))
        .context(ResponseBuilderSnafu)
}
