use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocfindError {
    #[error("Failed to fetch doctors data: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch doctors data: server returned status {0}")]
    FetchStatus(u16),

    #[error("Invalid API response format: expected an array")]
    MalformedResponse,

    #[error("No valid doctor data found in the API response")]
    AllRecordsInvalid,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DocfindError>;
