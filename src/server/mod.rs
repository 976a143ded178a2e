//! TCP connection manager and HTTP server facade
//!
mod config;
mod conn;
mod http;
mod tcp;

pub use self::conn::{Connection, WriteComplete};
pub use self::http::{Handler, HttpServer};
pub use self::tcp::{Dispatcher, TcpServer};

/// Fine-grained configuration of the server
#[derive(Debug, Clone)]
pub struct Config {
    listen_port: u16,
    receive_buffer_size: usize,
}
