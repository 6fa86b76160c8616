//! Error types for cafes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The `Display` text of the request errors is the exact response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown city")]
    UnknownCity,

    #[error("incorrect count")]
    InvalidCount,

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl Error {
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Error::InvalidCatalog(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::UnknownCity | Error::InvalidCount => StatusCode::BAD_REQUEST,
            Error::InvalidCatalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
