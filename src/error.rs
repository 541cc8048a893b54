use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("transport error for `{url}`: {message}")]
    Transport { url: String, message: String },

    #[error("malformed response for indicator {indicator}: {message}")]
    MalformedResponse { indicator: String, message: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
