//! Edge-triggered TCP connection manager
//!
//! A single thread blocks on the poll, drains every ready socket to
//! `WouldBlock` (edge-triggered readiness notifies on transitions only),
//! and defers socket close to the end of the event batch so handles
//! stay valid for every callback of the batch.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::io::{Read, Write};
use std::net::SocketAddr;
use std::sync::Arc;

use log::{debug, warn};
use mio::net::{TcpListener, TcpStream};
use mio::unix::UnixReady;
use mio::{Events, Poll, PollOpt, Ready, Token};

use super::conn::{Connection, WriteComplete, WriteTask};
use super::Config;
use crate::error::Error;

const LISTENER: Token = Token(0);
const MAX_EVENTS: usize = 64;

/// Byte-stream callbacks a protocol implementation receives from the
/// manager.
pub trait Dispatcher {
    /// One non-empty chunk read from the connection. The chunk lives in
    /// the manager's reusable receive buffer; copy whatever must
    /// survive past this call.
    fn data_received(&mut self, conn: &mut Connection, data: &[u8]);

    /// The connection was closed and removed; drop per-connection
    /// state keyed by this token.
    fn connection_closed(&mut self, token: Token);
}

struct Client {
    stream: TcpStream,
    tasks: VecDeque<WriteTask>,
}

/// Sockets, registrations and outbound queues, separated from the
/// dispatcher so a `Connection` handle can borrow it while the
/// dispatcher runs.
pub(crate) struct ServerCore {
    listener: TcpListener,
    poll: Poll,
    clients: HashMap<Token, Client>,
    close_queue: VecDeque<Token>,
    next_token: usize,
}

/// Non-blocking TCP acceptor and connection dispatcher.
pub struct TcpServer<D: Dispatcher> {
    core: ServerCore,
    dispatcher: D,
    receive_buffer: Vec<u8>,
}

fn base_interest() -> Ready {
    Ready::readable() | Ready::from(UnixReady::hup())
}

fn write_interest() -> Ready {
    base_interest() | Ready::writable()
}

/// Single non-blocking `write` with the transient outcomes folded in:
/// `WouldBlock` reads as zero progress, `Interrupted` is retried.
fn write_some(stream: &mut TcpStream, data: &[u8]) -> io::Result<usize> {
    loop {
        match stream.write(data) {
            Ok(n) => return Ok(n),
            Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
                return Ok(0);
            }
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

impl<D: Dispatcher> TcpServer<D> {
    /// Bind the listening socket on all interfaces and set up the poll.
    ///
    /// The listener is non-blocking with address reuse enabled and is
    /// registered edge-triggered.
    pub fn bind(config: &Arc<Config>, dispatcher: D)
        -> Result<TcpServer<D>, Error>
    {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
        let listener = TcpListener::bind(&addr)?;
        let poll = Poll::new()?;
        poll.register(&listener, LISTENER,
            Ready::readable() | Ready::writable(), PollOpt::edge())?;
        Ok(TcpServer {
            core: ServerCore {
                listener,
                poll,
                clients: HashMap::new(),
                close_queue: VecDeque::new(),
                next_token: 1,
            },
            dispatcher,
            receive_buffer: vec![0; config.receive_buffer_size],
        })
    }

    /// Address the listener actually bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.core.listener.local_addr()
    }

    /// Run the event loop.
    ///
    /// Blocks the calling thread indefinitely. Returns only on a fatal
    /// error of the listener or the poll itself; per-client errors
    /// close that client and keep the loop running.
    pub fn start(&mut self) -> Result<(), Error> {
        let mut events = Events::with_capacity(MAX_EVENTS);
        loop {
            self.core.poll.poll(&mut events, None)?;
            for event in &events {
                match event.token() {
                    LISTENER => self.accept_clients()?,
                    token => self.client_event(token, event.readiness()),
                }
            }
            self.consume_close_queue();
        }
    }

    /// Accept until the backlog is drained.
    fn accept_clients(&mut self) -> Result<(), Error> {
        loop {
            let (stream, peer) = match self.core.listener.accept() {
                Ok(pair) => pair,
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            let token = self.core.register_client(stream)?;
            debug!("accepted connection from {} as {:?}", peer, token);
        }
    }

    fn client_event(&mut self, token: Token, readiness: Ready) {
        if readiness.is_readable() {
            self.receive_data(token);
        }
        if readiness.is_writable() {
            self.core.continue_write(token);
        }
        if UnixReady::from(readiness).is_hup() {
            self.core.schedule_close(token);
        }
    }

    /// Read until `WouldBlock`, handing every chunk to the dispatcher.
    fn receive_data(&mut self, token: Token) {
        loop {
            let read = match self.core.clients.get_mut(&token) {
                Some(client) => client.stream.read(&mut self.receive_buffer),
                None => return,
            };
            match read {
                Ok(0) => {
                    // orderly shutdown from the peer
                    self.core.schedule_close(token);
                    return;
                }
                Ok(n) => {
                    let mut conn = Connection::new(&mut self.core, token);
                    self.dispatcher
                        .data_received(&mut conn, &self.receive_buffer[..n]);
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => return,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {
                    continue;
                }
                Err(e) => {
                    warn!("read error on {:?}: {}", token, e);
                    self.core.schedule_close(token);
                    return;
                }
            }
        }
    }

    /// Deregister, close and forget every connection scheduled during
    /// this batch. Pending write tasks are dropped with the client;
    /// their callbacks never fire.
    fn consume_close_queue(&mut self) {
        while let Some(token) = self.core.close_queue.pop_front() {
            if let Some(client) = self.core.clients.remove(&token) {
                if let Err(e) = self.core.poll.deregister(&client.stream) {
                    debug!("deregister failed on {:?}: {}", token, e);
                }
                debug!("closed connection {:?}", token);
                self.dispatcher.connection_closed(token);
            }
        }
    }
}

impl ServerCore {
    fn register_client(&mut self, stream: TcpStream) -> Result<Token, Error> {
        let token = Token(self.next_token);
        self.next_token += 1;
        self.poll.register(&stream, token, base_interest(), PollOpt::edge())?;
        self.clients.insert(token, Client {
            stream,
            tasks: VecDeque::new(),
        });
        Ok(token)
    }

    pub(crate) fn schedule_close(&mut self, token: Token) {
        self.close_queue.push_back(token);
    }

    /// Submit bytes on a connection.
    ///
    /// With an empty task queue a single `write` is attempted and the
    /// completion fires synchronously on full acceptance; any remainder
    /// becomes a write task and the registration gains write interest.
    /// With tasks already queued the bytes are queued whole behind
    /// them, keeping completion in submission order under partial
    /// sends.
    pub(crate) fn try_write(&mut self, token: Token, data: &[u8],
        done: Option<WriteComplete>)
    {
        let done = {
            let client = match self.clients.get_mut(&token) {
                Some(client) => client,
                // already closed, drop the write
                None => return,
            };
            if !client.tasks.is_empty() {
                client.tasks.push_back(WriteTask::new(data, done));
                return;
            }
            match write_some(&mut client.stream, data) {
                Ok(n) if n == data.len() => done,
                Ok(n) => {
                    client.tasks.push_back(WriteTask::new(&data[n..], done));
                    if let Err(e) = self.poll.reregister(&client.stream,
                        token, write_interest(), PollOpt::edge())
                    {
                        warn!("reregister failed on {:?}: {}", token, e);
                        self.close_queue.push_back(token);
                    }
                    return;
                }
                Err(e) => {
                    warn!("write error on {:?}: {}", token, e);
                    self.close_queue.push_back(token);
                    return;
                }
            }
        };
        if let Some(done) = done {
            done(&mut Connection::new(self, token));
        }
    }

    /// Flush queued write tasks front to back until the socket stops
    /// accepting, firing completions as tasks drain.
    pub(crate) fn continue_write(&mut self, token: Token) {
        loop {
            let done = {
                let client = match self.clients.get_mut(&token) {
                    Some(client) => client,
                    None => return,
                };
                let finished = {
                    let task = match client.tasks.front_mut() {
                        Some(task) => task,
                        None => break,
                    };
                    match write_some(&mut client.stream, &task.data[..]) {
                        Ok(n) => {
                            task.data.consume(n);
                            task.data.is_empty()
                        }
                        Err(e) => {
                            warn!("write error on {:?}: {}", token, e);
                            self.close_queue.push_back(token);
                            return;
                        }
                    }
                };
                if !finished {
                    // socket is full again, wait for the next readiness
                    break;
                }
                match client.tasks.pop_front() {
                    Some(task) => task.done,
                    None => None,
                }
            };
            if let Some(done) = done {
                done(&mut Connection::new(self, token));
            }
        }
        // queue drained: drop write interest until something queues up
        if let Some(client) = self.clients.get(&token) {
            if client.tasks.is_empty() {
                if let Err(e) = self.poll.reregister(&client.stream, token,
                    base_interest(), PollOpt::edge())
                {
                    warn!("reregister failed on {:?}: {}", token, e);
                    self.close_queue.push_back(token);
                }
            }
        }
    }
}
