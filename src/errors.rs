use reqwest::StatusCode;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum WitError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-200 answer from the service. Only the reason phrase is kept, the body is dropped.
    #[error("{phrase}")]
    Remote { status: u16, phrase: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Failed to read audio file: {0}")]
    Io(#[from] std::io::Error),
}

pub type WitResult<T> = Result<T, WitError>;

impl WitError {
    pub(crate) fn remote(status: StatusCode) -> Self {
        let phrase = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        WitError::Remote {
            status: status.as_u16(),
            phrase,
        }
    }

    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            WitError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
