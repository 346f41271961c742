use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuthorsError>;

#[derive(Error, Debug)]
pub enum AuthorsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Git error: {0}")]
    Git(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
