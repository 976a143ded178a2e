//! Streaming HTTP/1.1 request parser
//!
//! The parser is fed raw chunks exactly as they come off the socket and
//! recognizes the `\r\n\r\n` header terminator with a five-state byte
//! machine, so a request may arrive one byte at a time or glued to the
//! next pipelined request and parse identically either way.

use std::mem;
use std::str;

use crate::enums::Method;
use crate::error::Error;
use crate::headers::HeaderField;
use crate::request::Request;

/// Position within the header-terminator sequence, or body collection.
#[derive(Debug)]
enum State {
    /// Scanning for the first CR of the terminator.
    BeforeCr1,
    Cr1,
    Lf1,
    Cr2,
    /// Headers done; collecting `content-length` bytes for this request.
    Body(Request),
}

/// Byte-incremental request parser.
///
/// One parser instance serves one connection. Bytes of a header or body
/// that straddle a `feed` boundary are kept in a carryover buffer owned
/// by the parser; the receive buffer they came from may be reused as
/// soon as `feed` returns.
#[derive(Debug)]
pub struct RequestParser {
    state: State,
    carryover: Vec<u8>,
}

impl RequestParser {
    pub fn new() -> RequestParser {
        RequestParser {
            state: State::BeforeCr1,
            carryover: Vec::new(),
        }
    }

    /// Consume one inbound chunk.
    ///
    /// Invokes `emit` once per request completed by this chunk, in
    /// arrival order, before returning. Never blocks. After an error
    /// the parser state is unspecified and the connection should be
    /// closed.
    pub fn feed<F>(&mut self, mut data: &[u8], emit: &mut F)
        -> Result<(), Error>
        where F: FnMut(Request)
    {
        while !data.is_empty() {
            if let State::Body(_) = self.state {
                data = self.feed_body(data, emit);
                continue;
            }
            let end = match self.scan_terminator(data) {
                Some(end) => end,
                None => {
                    // no terminator yet, keep the bytes for later
                    self.carryover.extend_from_slice(data);
                    return Ok(());
                }
            };
            let request = if self.carryover.is_empty() {
                // whole header inside this chunk, parse in place
                parse_header(&data[..end - 2])?
            } else {
                self.carryover.extend_from_slice(&data[..end]);
                let header_len = self.carryover.len() - 2;
                let request = parse_header(&self.carryover[..header_len])?;
                self.carryover.clear();
                request
            };
            if request.content_length() == 0 {
                emit(request);
            } else {
                self.state = State::Body(request);
            }
            data = &data[end..];
        }
        Ok(())
    }

    /// Advance the terminator machine over `data`.
    ///
    /// Returns the offset just past the LF completing `\r\n\r\n`, with
    /// the state reset for the next request; `None` when the chunk ends
    /// mid-header.
    fn scan_terminator(&mut self, data: &[u8]) -> Option<usize> {
        for (i, &byte) in data.iter().enumerate() {
            let next = match self.state {
                State::BeforeCr1 => match byte {
                    b'\r' => State::Cr1,
                    _ => State::BeforeCr1,
                },
                State::Cr1 => match byte {
                    b'\n' => State::Lf1,
                    // current byte becomes the new first-CR candidate
                    b'\r' => State::Cr1,
                    _ => State::BeforeCr1,
                },
                State::Lf1 => match byte {
                    b'\r' => State::Cr2,
                    _ => State::BeforeCr1,
                },
                State::Cr2 => match byte {
                    b'\n' => {
                        self.state = State::BeforeCr1;
                        return Some(i + 1);
                    }
                    b'\r' => State::Cr1,
                    _ => State::BeforeCr1,
                },
                State::Body(_) => unreachable!("scan while in body state"),
            };
            self.state = next;
        }
        None
    }

    /// Collect body bytes; returns the unconsumed tail of `data`.
    fn feed_body<'a, F>(&mut self, data: &'a [u8], emit: &mut F) -> &'a [u8]
        where F: FnMut(Request)
    {
        let total = match self.state {
            State::Body(ref request) => request.content_length(),
            _ => unreachable!("feed_body outside body state"),
        };
        let take = (total - self.carryover.len()).min(data.len());
        self.carryover.extend_from_slice(&data[..take]);
        if self.carryover.len() == total {
            if let State::Body(mut request) =
                mem::replace(&mut self.state, State::BeforeCr1)
            {
                request.set_body(mem::take(&mut self.carryover));
                emit(request);
            }
        }
        &data[take..]
    }
}

impl Default for RequestParser {
    fn default() -> RequestParser {
        RequestParser::new()
    }
}

/// Parse a buffered header section.
///
/// `header` covers the request line and every field line, each still
/// carrying its `\r\n` terminator; the final empty line is already
/// stripped.
fn parse_header(header: &[u8]) -> Result<Request, Error> {
    let header = str::from_utf8(header).map_err(|_| Error::HeaderEncoding)?;
    let line_end = header.find("\r\n").ok_or(Error::RequestLine)?;

    let mut tokens = header[..line_end].split(' ');
    let method = tokens.next().ok_or(Error::RequestLine)?;
    let path = tokens.next().ok_or(Error::RequestLine)?;
    let version = tokens.next().ok_or(Error::RequestLine)?;
    if tokens.next().is_some()
        || method.is_empty() || path.is_empty() || version.is_empty()
    {
        return Err(Error::RequestLine);
    }

    let method: Method = method.parse()?;
    let mut request = Request::new(method, path, version);
    for line in header[line_end + 2..].split_terminator("\r\n") {
        request.add_field(HeaderField::parse(line)?)?;
    }
    Ok(request)
}
