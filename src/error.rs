use std::io;

use quick_error::quick_error;

quick_error! {
    /// Any error the server core can produce.
    ///
    /// Parse and serialize kinds are recoverable per connection: the
    /// offending connection is closed and the server keeps running. `Io`
    /// on a client socket closes that client; `Io` on the listener or
    /// the poll itself terminates `start()`.
    #[derive(Debug)]
    pub enum Error {
        Io(err: io::Error) {
            description("I/O error")
            display("I/O error: {}", err)
            from()
        }
        RequestLine {
            description("malformed request line")
        }
        HeaderField {
            description("header field without a colon")
        }
        HeaderEncoding {
            description("header section is not valid utf-8")
        }
        ContentLength {
            description("content-length is not a base-10 unsigned integer")
        }
        Method {
            description("unrecognized HTTP method")
        }
        UnknownMethod {
            description("can not serialize the Unknown method")
        }
        StatusOutOfRange(code: u16) {
            description("status code outside 100..=599")
            display("status code {} outside 100..=599", code)
        }
    }
}
