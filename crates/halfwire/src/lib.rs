//! Self-checking frame protocol for half-duplex byte links.
//!
//! halfwire moves 0–255 byte messages over anything that can write one
//! byte, report readiness, and read one byte — RS485 serial, packet radio,
//! or an in-memory pipe in tests. Frames are delimited with STX/ETX, every
//! payload byte travels as a self-checking nibble pair, and a CRC-8 guards
//! the whole payload.
//!
//! # Crate Structure
//!
//! - [`transport`] — Injected capabilities: byte link, monotonic clock,
//!   in-memory link pair
//! - [`frame`] — STX/ETX framing, self-checking encoding, CRC-8
//! - [`link`] — Two-phase message exchange for fixed-payload packet radios
//!   (behind the `link` feature)

/// Re-export transport capabilities.
pub mod transport {
    pub use halfwire_transport::*;
}

/// Re-export framing types.
pub mod frame {
    pub use halfwire_frame::*;
}

/// Re-export the packet-link adapter (requires `link` feature).
#[cfg(feature = "link")]
pub mod link {
    pub use halfwire_link::*;
}
