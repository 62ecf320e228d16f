use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("protected data: {0}")]
    Envelope(#[from] envelope::Error),

    #[error("plain data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("resource is empty: {0}")]
    Empty(String),

    #[error("activities must be an array")]
    InvalidActivities,

    #[error("unauthorized")]
    Unauthorized,

    /// Both the protected resource and its plain fallback failed
    #[error("no data available: {protected}; fallback: {plain}")]
    Exhausted {
        protected: Box<Error>,
        plain: Box<Error>,
    },
}
