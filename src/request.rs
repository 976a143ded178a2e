use std::fmt;

use crate::enums::Method;
use crate::error::Error;
use crate::headers::HeaderField;

/// A fully received HTTP request.
///
/// Header fields keep their insertion order and duplicates. The
/// `content-length` value is cached as it is added; when the field
/// occurs more than once the last occurrence wins while every
/// occurrence stays in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub version: String,

    header_fields: Vec<HeaderField>,
    content_length: usize,
    body: Option<Vec<u8>>,

    // indices of some known headers
    host: Option<usize>,
    content_type: Option<usize>,
}

impl Request {
    pub fn new<P, V>(method: Method, path: P, version: V) -> Request
        where P: Into<String>, V: Into<String>
    {
        Request {
            method,
            path: path.into(),
            version: version.into(),
            header_fields: Vec::new(),
            content_length: 0,
            body: None,
            host: None,
            content_type: None,
        }
    }

    /// Append a header field, refreshing the cached `content-length`.
    ///
    /// A `content-length` value that is not a base-10 unsigned integer
    /// is an error.
    pub fn add_field(&mut self, field: HeaderField) -> Result<(), Error> {
        if field.name.eq_ignore_ascii_case("content-length") {
            self.content_length = field.value.parse()
                .map_err(|_| Error::ContentLength)?;
        } else if field.name.eq_ignore_ascii_case("host") {
            self.host = Some(self.header_fields.len());
        } else if field.name.eq_ignore_ascii_case("content-type") {
            self.content_type = Some(self.header_fields.len());
        }
        self.header_fields.push(field);
        Ok(())
    }

    pub fn set_body(&mut self, body: Vec<u8>) {
        self.body = Some(body);
    }

    pub fn header_fields(&self) -> &[HeaderField] {
        &self.header_fields
    }

    pub fn content_length(&self) -> usize {
        self.content_length
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Value of the Host header
    pub fn host(&self) -> Option<&str> {
        self.host.map(|index| &*self.header_fields[index].value)
    }

    /// Value of the Content-Type header
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.map(|index| &*self.header_fields[index].value)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Method: {:?}, Path: {:?}, Version: {:?}",
            self.method, self.path, self.version)?;
        writeln!(f, "Fields:")?;
        for field in &self.header_fields {
            writeln!(f, "{{{:?}, {:?}}}", field.name, field.value)?;
        }
        Ok(())
    }
}
