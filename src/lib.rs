//! HTTP/1.1 server core on top of edge-triggered readiness polling
//!
//! The crate is split in two layers. `server::TcpServer` drives a `mio`
//! poll loop and hands raw byte chunks to a `server::Dispatcher`;
//! `server::HttpServer` is a dispatcher that parses those chunks into
//! `Request` values and answers them through a user-supplied
//! `server::Handler`.

mod enums;
mod error;
mod headers;
mod parser;
mod request;
mod response;
pub mod server;

pub use crate::enums::{Method, Status};
pub use crate::error::Error;
pub use crate::headers::HeaderField;
pub use crate::parser::RequestParser;
pub use crate::request::Request;
pub use crate::response::Response;
