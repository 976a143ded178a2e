use std::io::Write;

use crate::enums::Status;
use crate::error::Error;
use crate::headers::HeaderField;

/// An HTTP response under construction.
///
/// The serializer writes exactly what was put in: header fields go out
/// in insertion order with their original casing, and no
/// `Content-Length` is added on the caller's behalf.
#[derive(Debug, Clone)]
pub struct Response {
    status: Status,
    reason: Option<String>,
    header_fields: Vec<HeaderField>,
    body: Option<Vec<u8>>,
    close: bool,
}

impl Response {
    pub fn new(status: Status) -> Response {
        Response {
            status,
            reason: None,
            header_fields: Vec::new(),
            body: None,
            close: false,
        }
    }

    pub fn set_reason<S: Into<String>>(&mut self, reason: S) {
        self.reason = Some(reason.into());
    }

    pub fn add_field(&mut self, field: HeaderField) {
        self.header_fields.push(field);
    }

    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = Some(body);
    }

    /// Ask the server to close the connection once this response has
    /// been fully written out.
    pub fn set_close(&mut self, close: bool) {
        self.close = close;
    }

    pub fn close(&self) -> bool {
        self.close
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Produce the wire bytes of the response.
    ///
    /// Emits `HTTP/1.1 <code> <reason>\r\n` (the space after the code is
    /// kept even with no reason), each field as `<name>: <value>\r\n`,
    /// a blank line, then the body verbatim. A status code outside
    /// 100..=599 can not be put on the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let code = self.status.code();
        if code < 100 || code > 599 {
            return Err(Error::StatusOutOfRange(code));
        }

        let mut buf = Vec::with_capacity(256);
        write!(buf, "HTTP/1.1 {} ", code).unwrap();
        if let Some(ref reason) = self.reason {
            buf.extend_from_slice(reason.as_bytes());
        }
        buf.extend_from_slice(b"\r\n");

        for field in &self.header_fields {
            write!(buf, "{}: {}\r\n", field.name, field.value).unwrap();
        }
        buf.extend_from_slice(b"\r\n");

        if let Some(ref body) = self.body {
            buf.extend_from_slice(body);
        }
        Ok(buf)
    }
}
