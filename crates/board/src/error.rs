/// Errors from the board client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, timeout, undecodable body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the JSON body, or the raw body.
        message: String,
    },

    /// Local input was rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The task is not on the local board.
    #[error("Task {0} is not on the board")]
    UnknownTask(kanban_core::types::DbId),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
