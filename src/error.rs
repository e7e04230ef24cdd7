use thiserror::Error;

pub type Result<T> = std::result::Result<T, TixError>;

#[derive(Error, Debug)]
pub enum TixError {
    #[error("Invalid ticket pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Git history unavailable: {0}")]
    Source(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
