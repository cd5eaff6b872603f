use bytes::BytesMut;
use halfwire_transport::ByteLink;
use tracing::{debug, trace};

use crate::codec::{encode_frame, wire_len};
use crate::error::Result;

/// Frame `payload` and push it onto the wire one byte at a time.
///
/// The first byte the transport refuses aborts the whole send; bytes
/// already on the wire stay there and the remote side is expected to time
/// the partial frame out. There is no retry.
pub fn send_frame<L: ByteLink>(link: &mut L, payload: &[u8]) -> Result<()> {
    let mut wire = BytesMut::with_capacity(wire_len(payload.len()));
    encode_frame(payload, &mut wire)?;

    for (offset, &byte) in wire.iter().enumerate() {
        if let Err(err) = link.write(byte) {
            debug!(offset, byte, "frame write rejected");
            return Err(err.into());
        }
    }

    trace!(len = payload.len(), "frame sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use halfwire_transport::TransportError;

    use super::*;
    use crate::error::FrameError;

    #[derive(Default)]
    struct RecordingLink {
        wrote: Vec<u8>,
    }

    impl ByteLink for RecordingLink {
        fn write(&mut self, byte: u8) -> halfwire_transport::Result<()> {
            self.wrote.push(byte);
            Ok(())
        }

        fn available(&mut self) -> usize {
            0
        }

        fn read(&mut self) -> u8 {
            0
        }
    }

    struct FailAfter {
        accepted: usize,
        limit: usize,
    }

    impl ByteLink for FailAfter {
        fn write(&mut self, _byte: u8) -> halfwire_transport::Result<()> {
            if self.accepted == self.limit {
                return Err(TransportError::WriteRejected);
            }
            self.accepted += 1;
            Ok(())
        }

        fn available(&mut self) -> usize {
            0
        }

        fn read(&mut self) -> u8 {
            0
        }
    }

    #[test]
    fn writes_full_wire_image() {
        let mut link = RecordingLink::default();
        send_frame(&mut link, &[0x41, 0x42]).unwrap();
        assert_eq!(
            link.wrote,
            vec![0x02, 0x4B, 0x1E, 0x4B, 0x2D, 0x03, 0xA5, 0x5A]
        );
    }

    #[test]
    fn empty_payload_still_frames() {
        let mut link = RecordingLink::default();
        send_frame(&mut link, &[]).unwrap();
        assert_eq!(link.wrote, vec![0x02, 0x03, 0x0F, 0x0F]);
    }

    #[test]
    fn first_rejected_write_aborts() {
        // Accept STX and one pair byte, then refuse.
        let mut link = FailAfter {
            accepted: 0,
            limit: 2,
        };
        let err = send_frame(&mut link, &[0x41, 0x42]).unwrap_err();
        assert!(matches!(
            err,
            FrameError::Transport(TransportError::WriteRejected)
        ));
        assert_eq!(link.accepted, 2);
    }

    #[test]
    fn rejected_stx_writes_nothing_more() {
        let mut link = FailAfter {
            accepted: 0,
            limit: 0,
        };
        let err = send_frame(&mut link, &[0x41]).unwrap_err();
        assert!(matches!(err, FrameError::Transport(_)));
        assert_eq!(link.accepted, 0);
    }

    #[test]
    fn oversized_payload_never_touches_the_wire() {
        let mut link = RecordingLink::default();
        let payload = vec![0u8; 256];
        let err = send_frame(&mut link, &payload).unwrap_err();
        assert!(matches!(err, FrameError::PayloadTooLarge { .. }));
        assert!(link.wrote.is_empty());
    }
}
