use thiserror::Error;

#[derive(Error, Debug)]
pub enum FreeboxError {
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid path segment '{0}'")]
    InvalidPathSegment(String),

    #[error("Freebox API error '{error_code}' (HTTP {status}): {msg}")]
    Api {
        status: u16,
        error_code: String,
        msg: String,
    },
}
