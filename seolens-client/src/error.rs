use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuditError {
    /// Message suitable for showing to the user. Connection-level failures
    /// collapse into a single generic connectivity line; everything else
    /// keeps its display form.
    pub fn user_message(&self) -> String {
        match self {
            AuditError::Http(e) if e.is_connect() || e.is_timeout() => {
                "Network error - please check your connection".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
