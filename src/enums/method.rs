use std::str::FromStr;

use crate::error::Error;

/// Enum representing HTTP request methods.
///
/// ```rust,ignore
/// match req.method {
///     Method::Get => {},   // handle GET
///     Method::Post => {},  // handle POST requests
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
    /// Placeholder for a method that has not been parsed yet. Never
    /// produced by the parser and refused by `as_str`.
    Unknown,
}

impl Default for Method {
    fn default() -> Method {
        Method::Unknown
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Exact, case-sensitive token match. Anything else is a parse
    /// error; lowercase or mixed-case spellings are not methods.
    fn from_str(s: &str) -> Result<Method, Error> {
        match s {
            "GET"       => Ok(Method::Get),
            "HEAD"      => Ok(Method::Head),
            "POST"      => Ok(Method::Post),
            "PUT"       => Ok(Method::Put),
            "DELETE"    => Ok(Method::Delete),
            "CONNECT"   => Ok(Method::Connect),
            "OPTIONS"   => Ok(Method::Options),
            "TRACE"     => Ok(Method::Trace),
            "PATCH"     => Ok(Method::Patch),
            _ => Err(Error::Method),
        }
    }
}

impl Method {
    /// The wire spelling of the method.
    pub fn as_str(&self) -> Result<&'static str, Error> {
        match *self {
            Method::Get     => Ok("GET"),
            Method::Head    => Ok("HEAD"),
            Method::Post    => Ok("POST"),
            Method::Put     => Ok("PUT"),
            Method::Delete  => Ok("DELETE"),
            Method::Connect => Ok("CONNECT"),
            Method::Options => Ok("OPTIONS"),
            Method::Trace   => Ok("TRACE"),
            Method::Patch   => Ok("PATCH"),
            Method::Unknown => Err(Error::UnknownMethod),
        }
    }
}
