//! Shared utilities

#![allow(dead_code)]

pub use thunderpush_test_server::{closed_port, serve_once, Recorded};
use thunderpush_client::{Client, ClientConfig};

/// Creates a client for a local port
pub fn client(port: u16) -> Client {
    let cfg = ClientConfig::new("key", "secret")
        .hostname("127.0.0.1")
        .port(port);
    Client::new(cfg, 3).unwrap()
}
