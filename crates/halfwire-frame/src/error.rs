use halfwire_transport::TransportError;

/// Errors that can occur while sending or receiving frames.
///
/// Every receive failure is terminal for the call in progress; the only
/// built-in recovery is the STX-triggered restart inside a still-running
/// receive. Retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The payload exceeds what one frame can carry.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// A wire byte failed its nibble-complement self-check.
    #[error("corrupt wire byte 0x{byte:02X}")]
    BadEncoding { byte: u8 },

    /// More payload arrived than the caller's buffer can hold.
    #[error("frame overflows receive buffer ({capacity} bytes)")]
    Overflow { capacity: usize },

    /// The received checksum does not match the reassembled payload.
    #[error("checksum mismatch (expected 0x{expected:02X}, got 0x{actual:02X})")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// No complete frame arrived within the deadline.
    #[error("timed out waiting for a frame")]
    Timeout,

    /// The transport refused a byte.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
