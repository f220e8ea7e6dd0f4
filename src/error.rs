use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadabilityError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("config file already exists: {0}")]
    ConfigExists(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid score: {0} (expected a number between 0 and 100)")]
    InvalidScore(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReadabilityError>;
