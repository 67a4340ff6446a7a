use thiserror::Error;

/// Failure taxonomy for every operation exposed by the client.
///
/// Nothing is retried or recovered internally; each variant is surfaced
/// directly to the caller. Non-2xx responses collapse to
/// [`BgmError::UnexpectedStatus`] and the remote error payload is discarded.
#[derive(Error, Debug)]
pub enum BgmError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to build request: {0}")]
    RequestBuild(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to read response body: {0}")]
    BodyRead(String),
}

// Result type alias for convenience
pub type BgmResult<T> = Result<T, BgmError>;
