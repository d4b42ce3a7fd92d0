use api_types::RecordId;
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call to the record API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status. `message` is the `error`
    /// field of the body, when the body had one.
    #[error("{status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
    /// The request could not complete, or its answer could not be decoded.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}

impl ClientError {
    /// Message to show for this failure: the server text when there is one,
    /// `fallback` for a bare rejection and `network` when nothing came back.
    pub fn user_message(&self, fallback: &str, network: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Rejected { message: None, .. } => fallback.to_string(),
            Self::Transport(_) | Self::Endpoint(_) => network.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("record {0} is not in the current history")]
    UnknownRecord(RecordId),
}
