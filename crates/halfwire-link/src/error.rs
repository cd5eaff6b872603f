use halfwire_frame::FrameError;

/// Errors from a two-phase message exchange.
///
/// The phase that failed is preserved so callers can tell a dead peer
/// (announcement never arrived) from a transfer that died partway.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// The length-announcement phase failed.
    #[error("announcement exchange failed: {0}")]
    Announce(#[source] FrameError),

    /// The data phase failed.
    #[error("data exchange failed: {0}")]
    Data(#[source] FrameError),

    /// The announcement frame did not carry exactly one byte.
    #[error("announcement frame carried {len} bytes")]
    BadAnnouncement { len: usize },

    /// The message does not fit the configured bound.
    #[error("message too large ({size} bytes, max {max})")]
    MessageTooLarge { size: usize, max: usize },

    /// The data frame completed with a different length than announced.
    #[error("truncated message (announced {announced}, received {received})")]
    TruncatedMessage { announced: usize, received: usize },
}

pub type Result<T> = std::result::Result<T, LinkError>;
