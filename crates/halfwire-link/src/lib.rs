//! Two-phase variable-length messaging over fixed-payload packet transports.
//!
//! A packet radio that only moves a handful of bytes per physical packet can
//! still carry arbitrary messages: a one-byte announcement frame tells the
//! peer how much data is coming, then a data frame carries the message
//! itself. The receiver echoes the announced length back between the two
//! phases as an advisory acknowledgment, and every phase boundary gets a
//! fixed settle delay for transceiver turnaround.
//!
//! Both phases are ordinary halfwire frames; this crate only sequences them.

pub mod error;
pub mod exchange;

pub use error::{LinkError, Result};
pub use exchange::{recv_message, send_message, LinkConfig};
