use thiserror::Error;

/// Failure of a single HTTP check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The target could not be reached at the network layer (connection
    /// refused, DNS failure, timeout) or the request could not be sent.
    #[error("service not accessible: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("expected status {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },

    /// The target was reachable but the response violated the probe's
    /// contract (missing field, wrong content-type, malformed JSON body).
    #[error("{0}")]
    Assertion(String),
}

impl CheckError {
    /// True when the failure happened below HTTP, before any response could
    /// be evaluated.
    pub fn is_transport(&self) -> bool {
        matches!(self, CheckError::Transport(_))
    }
}
