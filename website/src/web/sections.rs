use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use folio::navigator::Navigator;

use crate::models::SectionParams;

/// Sends the browser to a section anchor. Unknown sections answer
/// with no content so the current page stays as it is.
pub async fn section_handler(Path(params): Path<SectionParams>) -> Response {
    match Navigator::page().locate(&params.section_id) {
        Some(scroll) => Redirect::to(&scroll.href()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
