//! Startup configuration.
//!
//! The configuration is read once, validated while deserializing, and then
//! shared read-only by every negotiation. Its shape follows the `serialize`
//! tree of the bundle configuration:
//!
//! ```json
//! {
//!   "serialize": {
//!     "formats": { "json": ["application/json"], "xml": ["application/xml"] },
//!     "format_default": "application/json"
//!   },
//!   "server": { "default_language": "en" }
//! }
//! ```
//!
//! Every key is optional and falls back to the values shown above.

use crate::format::Format;
use crate::mime_type::MimeType;
use indexmap::IndexMap;
use serde::Deserialize;

const DEFAULT_LANGUAGE: &str = "en";
// `mime` ships no constant for it
const APPLICATION_XML: &str = "application/xml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RestConfig {
    pub serialize: NegotiationConfig,
    pub server: ServerSettings,
}

impl RestConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Configured formats, in declaration order, and the mime type used for wildcard requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    formats: IndexMap<Format, Vec<MimeType>>,
    format_default: MimeType,
}

impl NegotiationConfig {
    pub fn new(formats: IndexMap<Format, Vec<MimeType>>, format_default: MimeType) -> Self {
        Self { formats, format_default }
    }

    pub fn formats(&self) -> &IndexMap<Format, Vec<MimeType>> {
        &self.formats
    }

    pub fn format_default(&self) -> &MimeType {
        &self.format_default
    }

    /// All configured mime types across every format, flattened in declaration order.
    pub fn mime_types(&self) -> impl Iterator<Item = &MimeType> {
        self.formats.values().flatten()
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        let mut formats = IndexMap::with_capacity(2);
        formats.insert(Format::json(), vec![MimeType::from(&mime::APPLICATION_JSON)]);
        formats.insert(Format::xml(), vec![MimeType::from_static(APPLICATION_XML)]);
        Self { formats, format_default: MimeType::from(&mime::APPLICATION_JSON) }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    default_language: String,
}

impl ServerSettings {
    pub fn new(default_language: impl Into<String>) -> Self {
        Self { default_language: default_language.into() }
    }

    /// The `Content-Language` used when the request does not ask for one.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}
