//! Serialization format labels.

use crate::error::InvalidValue;
use crate::utils::ensure;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The label of a serialization strategy, for example `json` or `xml`.
///
/// A format is decoupled from the mime strings that select it, the mapping
/// between both lives in [`FormatMapper`](crate::FormatMapper).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Format {
    inner: String,
}

impl Format {
    pub const JSON: &'static str = "json";
    pub const XML: &'static str = "xml";

    /// Builds a format label, failing with [`InvalidValue::InvalidFormat`] for an empty string.
    pub fn from_string<S: AsRef<str>>(value: S) -> Result<Self, InvalidValue> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        ensure!(!trimmed.is_empty(), InvalidValue::format(raw));
        Ok(Self { inner: trimmed.to_owned() })
    }

    pub fn json() -> Self {
        Self { inner: Self::JSON.to_owned() }
    }

    pub fn xml() -> Self {
        Self { inner: Self::XML.to_owned() }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl FromStr for Format {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<String> for Format {
    type Error = InvalidValue;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_string(value)
    }
}

impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_valid_string() {
        assert_eq!(Format::from_string("json").unwrap(), Format::json());
        assert_eq!("xml".parse::<Format>().unwrap(), Format::xml());
    }

    #[test]
    fn rejects_empty_string() {
        assert_eq!(Format::from_string(""), Err(InvalidValue::format("")));
        assert_eq!(Format::from_string("  "), Err(InvalidValue::format("  ")));
    }
}
