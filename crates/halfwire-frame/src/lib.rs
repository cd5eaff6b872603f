//! STX/ETX framing with self-checking byte encoding and CRC-8.
//!
//! This is the core value-add layer of halfwire. Every frame on the wire is:
//! - An STX start marker for (re)synchronization
//! - Each payload byte expanded into a self-checking two-byte pair
//! - An ETX end marker
//! - The CRC-8 of the raw payload, as one more encoded pair
//!
//! One logical byte costs two wire bytes; in exchange, any single-bit
//! corruption is detectable locally, without waiting for the checksum.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod recv;
pub mod send;

pub use checksum::crc8;
pub use codec::{decode_wire_byte, encode_byte, encode_frame, wire_len, ETX, MAX_PAYLOAD, STX};
pub use error::{FrameError, Result};
pub use recv::{recv_frame, RecvSession, Step};
pub use send::send_frame;
