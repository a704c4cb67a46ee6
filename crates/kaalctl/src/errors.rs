//! Error types and exit codes for kaalctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the daemon returns something that is not a reply
pub const EXIT_INVALID_RESPONSE: i32 = 65;

/// Exit code when the daemon is unreachable
pub const EXIT_DAEMON_UNAVAILABLE: i32 = 70;

/// Failures talking to kaald
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("KAAL daemon unavailable at {url}: {reason}")]
    Unavailable { url: String, reason: String },

    #[error("Invalid response from daemon: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Rejected(String),
}

impl ClientError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Unavailable { .. } => EXIT_DAEMON_UNAVAILABLE,
            ClientError::InvalidResponse(_) => EXIT_INVALID_RESPONSE,
            ClientError::Rejected(_) => EXIT_GENERAL_ERROR,
        }
    }
}

/// Exit code for any error surfaced by a command
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<ClientError>()
        .map(ClientError::exit_code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}
