use crate::custom_header::error::CustomHeaderError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error(transparent)]
    InvalidHeader(#[from] CustomHeaderError),
}

#[cfg_attr(test, mockall::automock)]
pub trait SearchClientErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}

pub fn classify<T: SearchClientErrorChecker>(err: T) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else if err.is_connect() || err.is_request() {
        Error::Network(err.error_string())
    } else {
        Error::InvalidRequest(err.error_string())
    }
}
