//! Serialization of payloads into the negotiated representation.

use crate::config::NegotiationConfig;
use crate::error::SerializeError;
use crate::format::Format;
use crate::format_mapper::FormatMapper;
use crate::mime_type::MimeType;
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

/// Root element of XML documents.
const XML_ROOT: &str = "response";

/// Turns payloads into bytes of a given mime type and back.
pub trait Serializer {
    fn serialize<T: Serialize + ?Sized>(&self, payload: &T, mime_type: &MimeType) -> Result<Bytes, SerializeError>;

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8], mime_type: &MimeType) -> Result<T, SerializeError>;
}

/// The default [`Serializer`]: resolves the format through a [`FormatMapper`]
/// and encodes `json` with `serde_json` and `xml` with `quick-xml`.
///
/// Any other configured format label fails with
/// [`SerializeError::UnsupportedFormat`].
#[derive(Debug, Clone)]
pub struct FormatSerializer {
    mapper: FormatMapper,
}

impl FormatSerializer {
    pub fn new(mapper: FormatMapper) -> Self {
        Self { mapper }
    }

    pub fn from_config(config: &NegotiationConfig) -> Self {
        Self::new(FormatMapper::from_config(config))
    }

    fn format(&self, mime_type: &MimeType) -> Result<Format, SerializeError> {
        Ok(self.mapper.by_mime_type(mime_type)?)
    }
}

impl Serializer for FormatSerializer {
    fn serialize<T: Serialize + ?Sized>(&self, payload: &T, mime_type: &MimeType) -> Result<Bytes, SerializeError> {
        let format = self.format(mime_type)?;
        trace!(format = %format, "serializing payload");

        match format.as_str() {
            Format::JSON => Ok(Bytes::from(serde_json::to_vec(payload)?)),
            Format::XML => {
                quick_xml::se::to_string_with_root(XML_ROOT, payload).map(Bytes::from).map_err(SerializeError::xml)
            }
            other => Err(SerializeError::unsupported_format(other)),
        }
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8], mime_type: &MimeType) -> Result<T, SerializeError> {
        let format = self.format(mime_type)?;
        trace!(format = %format, len = data.len(), "deserializing payload");

        match format.as_str() {
            Format::JSON => Ok(serde_json::from_slice(data)?),
            Format::XML => {
                let xml = std::str::from_utf8(data).map_err(SerializeError::invalid_utf8)?;
                quick_xml::de::from_str(xml).map_err(SerializeError::xml)
            }
            other => Err(SerializeError::unsupported_format(other)),
        }
    }
}
