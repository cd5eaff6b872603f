//! Two threads exchanging messages over an in-memory link pair.
//!
//! Run with `cargo run --example loopback-echo`.

use std::thread;

use halfwire::link::{recv_message, send_message, LinkConfig};
use halfwire::transport::{MemoryLink, SystemClock};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (mut near, mut far) = MemoryLink::pair();
    let config = LinkConfig::default();

    let responder = {
        let config = config.clone();
        thread::spawn(move || {
            let clock = SystemClock::new();
            let message = recv_message(&mut far, &clock, &config).expect("receive failed");
            println!("responder got: {}", String::from_utf8_lossy(&message));

            let mut reply = message.to_vec();
            reply.reverse();
            send_message(&mut far, &clock, &reply, &config).expect("reply failed");
        })
    };

    let clock = SystemClock::new();
    send_message(&mut near, &clock, b"hello halfwire", &config).expect("send failed");

    let reply = recv_message(&mut near, &clock, &config).expect("reply receive failed");
    println!("initiator got: {}", String::from_utf8_lossy(&reply));

    responder.join().expect("responder panicked");
}
