#[derive(Debug, thiserror::Error)]
pub enum CustomHeaderError {
    #[error("Invalid header name: {0}")]
    InvalidName(String),

    #[error("Invalid value for header {0}")]
    InvalidValue(String),
}
