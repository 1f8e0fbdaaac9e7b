use crate::builder::ResponseBuilder;
use crate::error::{HttpApiError, RestError};
use crate::negotiation::{AcceptHeader, ContentNegotiator};
use crate::serialize::Serializer;
use bytes::Bytes;
use http::{Request, Response};
use tracing::debug;

/// Renders domain errors as responses in the negotiated representation.
///
/// Negotiation and serialization failures are returned as they are, the
/// resolver never falls back to another representation.
#[derive(Debug, Clone)]
pub struct ErrorResponseResolver<S> {
    negotiator: ContentNegotiator,
    serializer: S,
}

impl<S: Serializer> ErrorResponseResolver<S> {
    pub fn new(negotiator: ContentNegotiator, serializer: S) -> Self {
        Self { negotiator, serializer }
    }

    pub fn resolve<E, B>(&self, error: &E, request: &Request<B>) -> Result<Response<Bytes>, RestError>
    where
        E: HttpApiError + ?Sized,
    {
        let accept = AcceptHeader::from_headers(request.headers());
        let preferred = self.negotiator.negotiate(&accept)?;
        let content = self.serializer.serialize(error.content(), &preferred)?;

        debug!(status = %error.status_code(), content_type = %preferred, "resolved error response");
        Ok(ResponseBuilder::new().content(content).content_type(preferred).status(error.status_code()).build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NegotiationConfig;
    use crate::error::{ApiError, NotAcceptable};
    use crate::response::test_support::BrokenSerializer;
    use crate::serialize::FormatSerializer;
    use http::StatusCode;
    use http::header::{ACCEPT, CONTENT_LANGUAGE, CONTENT_TYPE};
    use serde::Serialize;

    #[derive(Debug, Serialize)]
    struct Message {
        message: String,
    }

    fn error(status: StatusCode) -> ApiError<Message> {
        ApiError::new(status, Message { message: format!("Test {}", status.as_u16()) })
    }

    fn resolver() -> ErrorResponseResolver<FormatSerializer> {
        let config = NegotiationConfig::default();
        ErrorResponseResolver::new(ContentNegotiator::new(&config), FormatSerializer::from_config(&config))
    }

    fn request(accept: &str) -> Request<()> {
        Request::builder().header(ACCEPT, accept).body(()).unwrap()
    }

    #[test]
    fn resolves_json_problem() {
        let request = request("application/pdf, application/json, application/xml");
        let response = resolver().resolve(&error(StatusCode::BAD_REQUEST), &request).unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/problem+json");
        assert!(response.headers().get(CONTENT_LANGUAGE).is_none());
        assert_eq!(response.body().as_ref(), br#"{"message":"Test 400"}"#);
    }

    #[test]
    fn resolves_xml() {
        let response = resolver().resolve(&error(StatusCode::CONFLICT), &request("application/xml")).unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/problem+xml");
        assert_eq!(response.body().as_ref(), b"<response><message>Test 409</message></response>");
    }

    #[test]
    fn server_errors_keep_plain_content_type() {
        let response =
            resolver().resolve(&error(StatusCode::SERVICE_UNAVAILABLE), &request("application/json")).unwrap();

        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn missing_accept_uses_default() {
        let request = Request::builder().body(()).unwrap();

        let response = resolver().resolve(&error(StatusCode::NOT_FOUND), &request).unwrap();

        assert_eq!(response.headers()[CONTENT_TYPE], "application/problem+json");
    }

    #[test]
    fn negotiation_failure_propagates() {
        let result = resolver().resolve(&error(StatusCode::BAD_REQUEST), &request("text/html"));

        let Err(RestError::NotAcceptable { source: NotAcceptable::NotNegotiable { value, .. } }) = &result else {
            panic!("unexpected result {result:?}");
        };
        assert_eq!(value, "text/html");
    }

    #[test]
    fn serializer_failure_propagates() {
        let config = NegotiationConfig::default();
        let resolver = ErrorResponseResolver::new(ContentNegotiator::new(&config), BrokenSerializer);

        let result = resolver.resolve(&error(StatusCode::BAD_REQUEST), &request("application/json"));

        assert!(matches!(result, Err(RestError::Serialize { .. })));
    }
}
