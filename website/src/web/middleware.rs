use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::CookieJar;
use folio::theme::{THEME_KEY, Theme};

use crate::models::Pref;

/// Resolves request preferences from cookies. Unknown values fall back to defaults.
pub async fn pref_middleware(cookies: CookieJar, mut req: Request, next: Next) -> Response {
    let theme = Theme::from_persisted(cookies.get(THEME_KEY).map(|c| c.value()));

    req.extensions_mut().insert(Pref::new(theme));
    next.run(req).await
}
