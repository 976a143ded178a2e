//! HTTP facade over the TCP connection manager

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use log::error;
use mio::Token;

use super::conn::Connection;
use super::tcp::{Dispatcher, TcpServer};
use super::Config;
use crate::error::Error;
use crate::parser::RequestParser;
use crate::request::Request;
use crate::response::Response;

/// Application request handler.
///
/// `handle` runs synchronously on the event-loop thread and must not
/// block. It should set `Content-Length` itself; the core never adds
/// one. A panic here is a programmer error and takes the server down.
pub trait Handler {
    fn handle(&mut self, request: Request) -> Response;
}

/// The protocol glue: one streaming parser per live connection.
struct HttpDispatcher<H> {
    handler: H,
    parsers: HashMap<Token, RequestParser>,
}

impl<H: Handler> Dispatcher for HttpDispatcher<H> {
    fn data_received(&mut self, conn: &mut Connection, data: &[u8]) {
        let token = conn.token();
        let parser = self.parsers.entry(token)
            .or_insert_with(RequestParser::new);
        let handler = &mut self.handler;
        let result = parser.feed(data, &mut |request| {
            respond(handler, conn, request);
        });
        if let Err(e) = result {
            error!("HTTP request parse failed on {:?}: {}", token, e);
            self.parsers.remove(&token);
            conn.close();
        }
    }

    fn connection_closed(&mut self, token: Token) {
        self.parsers.remove(&token);
    }
}

/// Run the handler for one parsed request and submit its response.
fn respond<H: Handler>(handler: &mut H, conn: &mut Connection,
    request: Request)
{
    let response = handler.handle(request);
    match response.to_bytes() {
        Ok(bytes) => {
            if response.close() {
                // close once the response bytes are fully written
                conn.write(&bytes,
                    Some(Box::new(|conn: &mut Connection| conn.close())));
            } else {
                conn.write(&bytes, None);
            }
        }
        Err(e) => {
            error!("HTTP response serialize failed on {:?}: {}",
                conn.token(), e);
            conn.close();
        }
    }
}

/// HTTP/1.1 server: a `TcpServer` wired to parse requests and answer
/// them through a `Handler`.
pub struct HttpServer<H: Handler> {
    inner: TcpServer<HttpDispatcher<H>>,
}

impl<H: Handler> HttpServer<H> {
    /// Bind the listening socket described by `config`.
    pub fn bind(config: &Arc<Config>, handler: H)
        -> Result<HttpServer<H>, Error>
    {
        let dispatcher = HttpDispatcher {
            handler,
            parsers: HashMap::new(),
        };
        Ok(HttpServer {
            inner: TcpServer::bind(config, dispatcher)?,
        })
    }

    /// Address the listener actually bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Run the event loop; see `TcpServer::start`.
    pub fn start(&mut self) -> Result<(), Error> {
        self.inner.start()
    }
}
