use std::time::Duration;

use halfwire_transport::{ByteLink, Clock};
use tracing::{debug, trace};

use crate::checksum::crc8;
use crate::codec::{decode_wire_byte, ETX, STX};
use crate::error::{FrameError, Result};

/// What feeding one wire byte did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Byte consumed; frame not finished yet.
    Progress,
    /// An STX reset the session; the driving loop should re-arm its deadline.
    Restarted,
    /// Frame complete and checksum verified; payload length attached.
    Complete(usize),
}

/// Per-call receive state machine.
///
/// One session reconstructs at most one frame into a caller-owned buffer.
/// Sessions are never shared or reused across calls; [`recv_frame`]
/// constructs a fresh one on every invocation. Until the first STX arrives
/// every byte is ignored, and any later STX resets the session no matter
/// what state it was in — that is the only built-in resynchronization.
#[derive(Debug)]
pub struct RecvSession<'b> {
    buf: &'b mut [u8],
    have_stx: bool,
    have_etx: bool,
    first_nibble: bool,
    current: u8,
    len: usize,
}

impl<'b> RecvSession<'b> {
    pub fn new(buf: &'b mut [u8]) -> Self {
        Self {
            buf,
            have_stx: false,
            have_etx: false,
            first_nibble: true,
            current: 0,
            len: 0,
        }
    }

    /// Feed one wire byte through the state machine.
    ///
    /// An `Err` is terminal for the session: the caller must abandon it and
    /// start over with a new one.
    pub fn feed(&mut self, byte: u8) -> Result<Step> {
        match byte {
            STX => {
                self.have_stx = true;
                self.have_etx = false;
                self.first_nibble = true;
                self.len = 0;
                Ok(Step::Restarted)
            }
            ETX if self.have_stx => {
                // The next pair is the checksum, not payload.
                self.have_etx = true;
                Ok(Step::Progress)
            }
            other => {
                if !self.have_stx {
                    // Noise before the frame officially starts.
                    return Ok(Step::Progress);
                }

                let nibble = decode_wire_byte(other)
                    .ok_or(FrameError::BadEncoding { byte: other })?;

                if self.first_nibble {
                    self.current = nibble;
                    self.first_nibble = false;
                    return Ok(Step::Progress);
                }
                self.first_nibble = true;
                let value = (self.current << 4) | nibble;

                if self.have_etx {
                    let expected = crc8(&self.buf[..self.len]);
                    if expected != value {
                        return Err(FrameError::ChecksumMismatch {
                            expected,
                            actual: value,
                        });
                    }
                    return Ok(Step::Complete(self.len));
                }

                if self.len < self.buf.len() {
                    self.buf[self.len] = value;
                    self.len += 1;
                    Ok(Step::Progress)
                } else {
                    Err(FrameError::Overflow {
                        capacity: self.buf.len(),
                    })
                }
            }
        }
    }
}

/// Receive one frame into `buf`, bounded by `timeout`.
///
/// The deadline is re-armed every time an STX restarts the session, so a
/// wire that keeps delivering traffic can be waited out indefinitely; only
/// silence is bounded. On success returns the payload length; the payload
/// occupies `buf[..len]`.
pub fn recv_frame<L: ByteLink, C: Clock>(
    link: &mut L,
    clock: &C,
    buf: &mut [u8],
    timeout: Duration,
) -> Result<usize> {
    let mut session = RecvSession::new(buf);
    let mut armed = clock.now();

    loop {
        if clock.now().saturating_sub(armed) >= timeout {
            return Err(FrameError::Timeout);
        }

        if link.available() == 0 {
            continue;
        }

        let byte = link.read();
        match session.feed(byte) {
            Ok(Step::Complete(len)) => {
                trace!(len, "frame received");
                return Ok(len);
            }
            Ok(Step::Restarted) => armed = clock.now(),
            Ok(Step::Progress) => {}
            Err(err) => {
                debug!(%err, "receive aborted");
                return Err(err);
            }
        }
    }
}
