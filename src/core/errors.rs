use thiserror::Error;

/// Failure modes the rest of the app can tell apart. Transport problems,
/// bad payloads, and rejected requests each get their own variant so the
/// GUI can phrase them differently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThumblabError {
    #[error("store unreachable: {0}")]
    Network(String),

    #[error("store returned HTTP {status} for {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("malformed record payload: {0}")]
    Decode(String),

    #[error("index {index} is outside the dataset range 0..={size}")]
    OutOfBounds { index: usize, size: usize },
}

impl From<reqwest::Error> for ThumblabError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return ThumblabError::Decode(error.to_string());
        }

        if let Some(status) = error.status() {
            return ThumblabError::Status {
                status: status.as_u16(),
                endpoint: error.url().map(|url| url.to_string()).unwrap_or_default(),
            };
        }

        ThumblabError::Network(error.to_string())
    }
}
