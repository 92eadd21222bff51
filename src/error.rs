use thiserror::Error;

#[derive(Error, Debug)]
pub enum OctoscoutError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt favourites data: {0}")]
    PersistenceCorrupt(String),
}

pub type Result<T> = std::result::Result<T, OctoscoutError>;

/// Failure of a remote call, as stored in session and profile state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    RateLimited {
        message: String,
        reset_at: Option<i64>,
    },

    #[error("{message}")]
    RequestFailed { message: String },
}

impl ApiError {
    pub fn request_failed(message: &str) -> Self {
        ApiError::RequestFailed {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::RateLimited { message, .. } | ApiError::RequestFailed { message } => message,
        }
    }

    pub fn reset_at(&self) -> Option<i64> {
        match self {
            ApiError::RateLimited { reset_at, .. } => *reset_at,
            ApiError::RequestFailed { .. } => None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited { .. })
    }
}
