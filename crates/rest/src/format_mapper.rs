//! Lookup from a negotiated mime type to its configured format.

use crate::config::NegotiationConfig;
use crate::error::NotAcceptable;
use crate::format::Format;
use crate::mime_type::MimeType;
use indexmap::IndexMap;
use tracing::trace;

/// Maps mime types to format labels with exact string matching.
///
/// Formats are searched in configuration order and the first one listing the
/// mime type wins. No wildcard or parameter handling happens here.
#[derive(Debug, Clone)]
pub struct FormatMapper {
    formats: IndexMap<Format, Vec<MimeType>>,
}

impl FormatMapper {
    pub fn new(formats: IndexMap<Format, Vec<MimeType>>) -> Self {
        Self { formats }
    }

    pub fn from_config(config: &NegotiationConfig) -> Self {
        Self::new(config.formats().clone())
    }

    pub fn by_mime_type(&self, mime_type: &MimeType) -> Result<Format, NotAcceptable> {
        let format = self
            .formats
            .iter()
            .find(|(_, mime_types)| mime_types.contains(mime_type))
            .map(|(format, _)| format.clone())
            .ok_or_else(|| NotAcceptable::format_not_configured(mime_type))?;

        trace!(mime_type = %mime_type, format = %format, "mapped mime type");
        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(formats: &[(&str, &[&str])]) -> FormatMapper {
        let formats = formats
            .iter()
            .map(|(format, mime_types)| {
                let mime_types = mime_types.iter().map(|m| MimeType::from_string(m).unwrap()).collect();
                (Format::from_string(format).unwrap(), mime_types)
            })
            .collect();
        FormatMapper::new(formats)
    }

    fn mime(s: &str) -> MimeType {
        MimeType::from_string(s).unwrap()
    }

    #[test]
    fn maps_mime_type_to_format() {
        let json = mapper(&[("json", &["application/json"])]);
        assert_eq!(json.by_mime_type(&mime("application/json")).unwrap(), Format::json());

        let xml = mapper(&[("xml", &["application/xml", "application/atom+xml"])]);
        assert_eq!(xml.by_mime_type(&mime("application/xml")).unwrap(), Format::xml());
        assert_eq!(xml.by_mime_type(&mime("application/atom+xml")).unwrap(), Format::xml());
    }

    #[test]
    fn first_configured_format_wins() {
        let mapper = mapper(&[("custom", &["application/json"]), ("json", &["application/json"])]);

        assert_eq!(mapper.by_mime_type(&mime("application/json")).unwrap().as_str(), "custom");
    }

    #[test]
    fn every_configured_mime_type_maps_back() {
        let config = NegotiationConfig::default();
        let mapper = FormatMapper::from_config(&config);

        for (format, mime_types) in config.formats() {
            for mime_type in mime_types {
                assert_eq!(&mapper.by_mime_type(mime_type).unwrap(), format);
            }
        }
    }

    #[test]
    fn fails_when_not_configured() {
        let json = mapper(&[("json", &["application/json"])]);
        assert_eq!(
            json.by_mime_type(&mime("application/xml")),
            Err(NotAcceptable::FormatNotConfigured { mime_type: "application/xml".into() })
        );

        let empty = mapper(&[]);
        assert!(empty.by_mime_type(&mime("application/xml")).is_err());
    }

    #[test]
    fn matches_exact_strings_only() {
        let json = mapper(&[("json", &["application/json"])]);

        assert!(json.by_mime_type(&mime("application/json; charset=utf-8")).is_err());
        assert!(json.by_mime_type(&mime("application/*")).is_err());
        assert!(json.by_mime_type(&mime("Application/JSON")).is_err());
    }
}
