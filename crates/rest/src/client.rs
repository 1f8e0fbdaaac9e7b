//! The negotiated view of the client a response is written for.

use crate::config::ServerSettings;
use crate::error::NotAcceptable;
use crate::mime_type::MimeType;
use crate::negotiation::{AcceptHeader, AcceptLanguageHeader, ContentNegotiator};
use http::{HeaderMap, Request};

/// Content type and language negotiated for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClient {
    content_type: MimeType,
    language: String,
}

impl HttpClient {
    pub fn new(content_type: MimeType, language: impl Into<String>) -> Self {
        Self { content_type, language: language.into() }
    }

    pub fn from_request<B>(
        request: &Request<B>,
        negotiator: &ContentNegotiator,
        settings: &ServerSettings,
    ) -> Result<Self, NotAcceptable> {
        Self::from_headers(request.headers(), negotiator, settings)
    }

    /// Negotiates the content type from `Accept` and takes the first
    /// `Accept-Language` range, falling back to the configured language.
    pub fn from_headers(
        headers: &HeaderMap,
        negotiator: &ContentNegotiator,
        settings: &ServerSettings,
    ) -> Result<Self, NotAcceptable> {
        let content_type = negotiator.negotiate(&AcceptHeader::from_headers(headers))?;
        let language = AcceptLanguageHeader::from_headers(headers)
            .as_ref()
            .and_then(AcceptLanguageHeader::preferred)
            .unwrap_or(settings.default_language())
            .to_owned();

        Ok(Self { content_type, language })
    }

    pub fn negotiate_content_type(&self) -> &MimeType {
        &self.content_type
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NegotiationConfig;
    use http::header::{ACCEPT, ACCEPT_LANGUAGE};

    fn negotiator() -> ContentNegotiator {
        ContentNegotiator::new(&NegotiationConfig::default())
    }

    #[test]
    fn from_request() {
        let request = Request::builder()
            .header(ACCEPT, "application/pdf, application/json, application/xml")
            .header(ACCEPT_LANGUAGE, "en-GB,en;q=0.8")
            .body(())
            .unwrap();

        let client = HttpClient::from_request(&request, &negotiator(), &ServerSettings::default()).unwrap();

        assert_eq!(client.negotiate_content_type().as_str(), "application/json");
        assert_eq!(client.language(), "en-GB");
    }

    #[test]
    fn falls_back_to_defaults() {
        let request = Request::builder().body(()).unwrap();

        let client = HttpClient::from_request(&request, &negotiator(), &ServerSettings::new("fr")).unwrap();

        assert_eq!(client, HttpClient::new(MimeType::from(&mime::APPLICATION_JSON), "fr"));
    }

    #[test]
    fn not_negotiable() {
        let request = Request::builder().header(ACCEPT, "text/html").body(()).unwrap();

        let error = HttpClient::from_request(&request, &negotiator(), &ServerSettings::default()).unwrap_err();

        assert_eq!(error, NotAcceptable::not_negotiable("Accept", "text/html"));
    }
}
