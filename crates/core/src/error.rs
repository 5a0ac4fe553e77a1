//! Error taxonomy for a collection session.
//!
//! Usage and fetch errors are fatal. Prompt cancellation is not an error
//! of the session: the orchestrator turns it into
//! [`SessionOutcome::Cancelled`](crate::SessionOutcome::Cancelled).

/// The session could not start because its inputs were unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// No device identifier was given, or it was blank.
    #[error("a device identifier is required")]
    MissingDeviceId,
}

/// A status lookup against the remote service failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed (connection, TLS, non-2xx status).
    #[error("failed to fetch device state for '{device_id}': {message}")]
    Transport { device_id: String, message: String },

    /// The response arrived but did not have the expected shape.
    #[error("malformed status response for '{device_id}': {message}")]
    MalformedResponse { device_id: String, message: String },
}

/// An operator interaction did not produce an answer.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The operator aborted the prompt (interrupt or end of input).
    #[error("prompt cancelled by operator")]
    Cancelled,

    /// The terminal could not be read or written.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A fatal failure that ends the session without a report.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("terminal I/O error: {0}")]
    Terminal(std::io::Error),
}
