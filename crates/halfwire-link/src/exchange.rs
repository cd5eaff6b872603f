use std::time::Duration;

use bytes::{Bytes, BytesMut};
use halfwire_frame::{recv_frame, send_frame, MAX_PAYLOAD};
use halfwire_transport::{ByteLink, Clock};
use tracing::{trace, warn};

use crate::error::{LinkError, Result};

/// Knobs for one announce-then-transfer exchange.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Deadline for each frame receive.
    pub frame_timeout: Duration,
    /// Pause between phases, covering transceiver turnaround.
    pub settle_delay: Duration,
    /// Largest message either side will carry. Capped at one frame (255).
    pub max_message: usize,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            frame_timeout: Duration::from_millis(1000),
            settle_delay: Duration::from_millis(2),
            max_message: MAX_PAYLOAD,
        }
    }
}

impl LinkConfig {
    fn message_limit(&self) -> usize {
        self.max_message.min(MAX_PAYLOAD)
    }
}

/// Send `payload` as an announcement frame followed by a data frame.
///
/// Between the phases the peer is expected to echo the announced length
/// back. The echo is advisory: a missing or different echo is logged and
/// the transfer proceeds anyway. Only a failed frame send aborts the
/// exchange. The settle delays around the echo window are unconditional.
pub fn send_message<L: ByteLink, C: Clock>(
    link: &mut L,
    clock: &C,
    payload: &[u8],
    config: &LinkConfig,
) -> Result<()> {
    let limit = config.message_limit();
    if payload.len() > limit {
        return Err(LinkError::MessageTooLarge {
            size: payload.len(),
            max: limit,
        });
    }
    let announced = payload.len() as u8;

    send_frame(link, &[announced]).map_err(LinkError::Announce)?;
    clock.sleep(config.settle_delay);

    let mut echo = [0u8; 1];
    match recv_frame(link, clock, &mut echo, config.frame_timeout) {
        Ok(1) if echo[0] == announced => {
            trace!(len = announced, "length echo confirmed");
        }
        Ok(_) => {
            warn!(announced, echoed = echo[0], "length echo mismatch, continuing");
        }
        Err(err) => {
            warn!(%err, "no length echo, continuing");
        }
    }
    clock.sleep(config.settle_delay);

    send_frame(link, payload).map_err(LinkError::Data)?;
    trace!(len = payload.len(), "message sent");
    Ok(())
}

/// Receive one message: length announcement, advisory echo, data frame.
///
/// If no announcement arrives within the frame timeout, the exchange is
/// abandoned before the payload phase. The data frame must complete at
/// exactly the announced length.
pub fn recv_message<L: ByteLink, C: Clock>(
    link: &mut L,
    clock: &C,
    config: &LinkConfig,
) -> Result<Bytes> {
    let mut announce = [0u8; 1];
    match recv_frame(link, clock, &mut announce, config.frame_timeout) {
        Ok(1) => {}
        Ok(len) => return Err(LinkError::BadAnnouncement { len }),
        Err(err) => return Err(LinkError::Announce(err)),
    }

    let expected = announce[0] as usize;
    let limit = config.message_limit();
    if expected > limit {
        return Err(LinkError::MessageTooLarge {
            size: expected,
            max: limit,
        });
    }

    clock.sleep(config.settle_delay);
    send_frame(link, &announce).map_err(LinkError::Announce)?;
    clock.sleep(config.settle_delay);

    let mut buf = BytesMut::zeroed(expected);
    let received =
        recv_frame(link, clock, &mut buf[..], config.frame_timeout).map_err(LinkError::Data)?;
    if received != expected {
        return Err(LinkError::TruncatedMessage {
            announced: expected,
            received,
        });
    }

    trace!(len = received, "message received");
    Ok(buf.freeze())
}
