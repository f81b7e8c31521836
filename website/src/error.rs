use axum::http::{self, StatusCode};
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Config error: {}", msg))]
    Config { msg: String },

    #[snafu(display("PORT must be a valid u16: {}", source))]
    PortParse { source: std::num::ParseIntError },

    #[snafu(display("Unable to bind to {}: {}", addr, source))]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[snafu(display("Server error: {}", source))]
    Serve { source: std::io::Error },

    #[snafu(display("Failed to render template: {}", source))]
    Template { source: askama::Error },

    #[snafu(display("Response builder error: {}", source))]
    ResponseBuilder { source: http::Error },

    #[snafu(display("{}", msg))]
    NotFound { msg: String },
}

/// Allow Error to be converted to StatusCode
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Allow errors to be rendered as response
impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        let info = ErrorInfo::from(&self);

        // The response mapper renders the actual page
        let mut res = info.status_code.into_response();
        res.extensions_mut().insert(info);
        res
    }
}

#[derive(Debug, Clone)]
pub struct ErrorInfo {
    pub status_code: StatusCode,
    pub title: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(status_code: StatusCode, message: &str) -> Self {
        Self {
            status_code,
            title: status_code
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: message.to_string(),
        }
    }
}

impl From<&Error> for ErrorInfo {
    fn from(e: &Error) -> Self {
        Self::new(e.into(), &e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = Error::NotFound {
            msg: "Missing".to_string(),
        };
        assert_eq!(StatusCode::from(&err), StatusCode::NOT_FOUND);

        let err = Error::Config {
            msg: "Broken".to_string(),
        };
        assert_eq!(StatusCode::from(&err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_info() {
        let err = Error::NotFound {
            msg: "Nope".to_string(),
        };
        let info = ErrorInfo::from(&err);
        assert_eq!(info.status_code, StatusCode::NOT_FOUND);
        assert_eq!(info.title, "Not Found");
        assert_eq!(info.message, "Nope");
    }

    #[test]
    fn test_into_response_carries_info() {
        let res = Error::NotFound {
            msg: "Gone".to_string(),
        }
        .into_response();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let info = res.extensions().get::<ErrorInfo>().unwrap();
        assert_eq!(info.message, "Gone");
    }
}
