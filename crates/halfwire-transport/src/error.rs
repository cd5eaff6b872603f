/// Errors surfaced by transport capabilities.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The transceiver did not accept the byte.
    #[error("transceiver rejected write")]
    WriteRejected,

    /// The peer end of the link is gone.
    #[error("link closed by peer")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
