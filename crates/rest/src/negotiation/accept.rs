use http::HeaderMap;
use http::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderName};

/// A raw, already extracted request header that takes part in negotiation.
pub trait Negotiatable {
    fn name(&self) -> &str;

    fn value(&self) -> &str;
}

/// The `Accept` header value as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptHeader {
    value: String,
}

impl AcceptHeader {
    pub const NAME: &'static str = "Accept";

    // a request without Accept takes any representation
    const ANY: &'static str = "*/*";

    pub fn from_string(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    /// Reads the header from a request header map.
    ///
    /// A missing header counts as `*/*`; a present but empty one is kept empty
    /// and fails negotiation.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_string(header_value(headers, &ACCEPT).unwrap_or_else(|| Self::ANY.to_owned()))
    }
}

impl Negotiatable for AcceptHeader {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn value(&self) -> &str {
        &self.value
    }
}

/// The `Accept-Language` header value as sent by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptLanguageHeader {
    value: String,
}

impl AcceptLanguageHeader {
    pub const NAME: &'static str = "Accept-Language";

    pub fn from_string(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        header_value(headers, &ACCEPT_LANGUAGE).map(Self::from_string)
    }

    /// The first concrete language range, without its parameters.
    pub fn preferred(&self) -> Option<&str> {
        self.value
            .split(',')
            .map(|range| range.split(';').next().unwrap_or_default().trim())
            .find(|range| !range.is_empty() && *range != "*")
    }
}

impl Negotiatable for AcceptLanguageHeader {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn value(&self) -> &str {
        &self.value
    }
}

fn header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers.get(name).map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
