use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::error::{Result, TransportError};
use crate::traits::ByteLink;

/// In-memory byte pipe endpoint.
///
/// [`MemoryLink::pair`] returns two connected ends; bytes written on one
/// end become readable on the other. Both ends are `Send`, so the two sides
/// of an exchange can run on separate threads. Stands in for a hardware
/// transceiver wherever protocol code is exercised off-target.
pub struct MemoryLink {
    tx: Arc<Mutex<VecDeque<u8>>>,
    rx: Arc<Mutex<VecDeque<u8>>>,
    alive: Arc<AtomicBool>,
    peer_alive: Arc<AtomicBool>,
}

impl MemoryLink {
    /// Create a connected pair of endpoints.
    pub fn pair() -> (MemoryLink, MemoryLink) {
        let a_to_b = Arc::new(Mutex::new(VecDeque::new()));
        let b_to_a = Arc::new(Mutex::new(VecDeque::new()));
        let a_alive = Arc::new(AtomicBool::new(true));
        let b_alive = Arc::new(AtomicBool::new(true));

        let a = MemoryLink {
            tx: Arc::clone(&a_to_b),
            rx: Arc::clone(&b_to_a),
            alive: Arc::clone(&a_alive),
            peer_alive: Arc::clone(&b_alive),
        };
        let b = MemoryLink {
            tx: b_to_a,
            rx: a_to_b,
            alive: b_alive,
            peer_alive: a_alive,
        };
        (a, b)
    }

    /// Bytes queued toward the peer that it has not read yet.
    pub fn pending(&self) -> usize {
        lock(&self.tx).len()
    }
}

impl ByteLink for MemoryLink {
    fn write(&mut self, byte: u8) -> Result<()> {
        if !self.peer_alive.load(Ordering::SeqCst) {
            debug!(byte, "write on closed link");
            return Err(TransportError::Closed);
        }
        lock(&self.tx).push_back(byte);
        Ok(())
    }

    fn available(&mut self) -> usize {
        lock(&self.rx).len()
    }

    fn read(&mut self) -> u8 {
        lock(&self.rx).pop_front().unwrap_or(0)
    }
}

impl Drop for MemoryLink {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for MemoryLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLink")
            .field("pending", &self.pending())
            .field("peer_alive", &self.peer_alive.load(Ordering::SeqCst))
            .finish()
    }
}

fn lock(queue: &Mutex<VecDeque<u8>>) -> MutexGuard<'_, VecDeque<u8>> {
    queue.lock().unwrap_or_else(|e| e.into_inner())
}
