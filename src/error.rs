use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] rquest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unknown search mode: {0:?} (expected \"1\" for keyword or \"2\" for url)")]
    InvalidMode(String),

    #[error("Malformed search URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("API response has no `data` array")]
    MissingData,

    #[error("Listing {index} is missing required field `{field}`")]
    SchemaMismatch { index: usize, field: &'static str },
}
