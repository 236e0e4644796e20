use reqwest::StatusCode;
use serde::Deserialize;

/// Error detail body the service attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct DetailBody {
    detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status. `detail` is the server's own message, shown to
    /// the user verbatim.
    #[error("{detail}")]
    Status { status: StatusCode, detail: String },
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Builds a `Status` error, pulling the message out of a JSON
    /// `{"detail": ...}` body when the server sent one.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let detail = match serde_json::from_str::<DetailBody>(&body) {
            Ok(parsed) => parsed.detail,
            Err(_) if !body.is_empty() => body,
            Err(_) => status.to_string(),
        };
        ApiError::Status { status, detail }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
