use crate::error::Error;

/// A single `name: value` pair.
///
/// `parse` normalizes inbound fields (lowercased name, trimmed value).
/// Fields built directly, as response headers are, keep the caller's
/// casing and spacing untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: String,
    pub value: String,
}

impl HeaderField {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V)
        -> HeaderField
    {
        HeaderField { name: name.into(), value: value.into() }
    }

    /// Parse one header line (without the trailing CRLF).
    ///
    /// The line is split at the first `:`; a line without one is an
    /// error. The name is ASCII-lowercased. The value loses leading and
    /// trailing spaces and tabs only; interior whitespace stays, and an
    /// all-whitespace value becomes the empty string.
    pub fn parse(line: &str) -> Result<HeaderField, Error> {
        let colon = match line.find(':') {
            Some(pos) => pos,
            None => return Err(Error::HeaderField),
        };
        let name = line[..colon].to_ascii_lowercase();
        let value = line[colon + 1..]
            .trim_matches(|c| c == ' ' || c == '\t')
            .to_string();
        Ok(HeaderField { name, value })
    }
}
