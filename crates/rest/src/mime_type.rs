//! Media type value type.

use crate::error::InvalidValue;
use crate::utils::ensure;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// An immutable media type identifier such as `application/json`.
///
/// The value is kept as given (minus surrounding whitespace), parameters
/// included, and compared by plain string equality. Matching with wildcards
/// is the job of [`ContentNegotiator`](crate::negotiation::ContentNegotiator),
/// never of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct MimeType {
    inner: String,
}

impl MimeType {
    /// Builds a mime type, failing with [`InvalidValue::InvalidMimeType`] when the
    /// trimmed input is empty or has no `/`.
    pub fn from_string<S: AsRef<str>>(value: S) -> Result<Self, InvalidValue> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        ensure!(!trimmed.is_empty() && trimmed.contains('/'), InvalidValue::mime_type(raw));
        Ok(Self { inner: trimmed.to_owned() })
    }

    /// For compile-time known, well-formed values.
    pub(crate) fn from_static(value: &'static str) -> Self {
        Self { inner: value.to_owned() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// The `type/subtype` part, without any `;` parameters.
    pub fn essence(&self) -> &str {
        self.inner.split_once(';').map_or(self.inner.as_str(), |(essence, _)| essence).trim_end()
    }

    /// A copy of this mime type with its parameters dropped.
    pub fn without_parameters(&self) -> MimeType {
        Self { inner: self.essence().to_owned() }
    }
}

impl From<&mime::Mime> for MimeType {
    fn from(mime: &mime::Mime) -> Self {
        Self { inner: mime.as_ref().to_owned() }
    }
}

impl FromStr for MimeType {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for MimeType {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl AsRef<str> for MimeType {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
