use crate::builder::ResponseBuilder;
use crate::client::HttpClient;
use crate::config::ServerSettings;
use crate::error::RestError;
use crate::negotiation::ContentNegotiator;
use crate::serialize::Serializer;
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use serde::Serialize;

/// Renders successful handler results for the negotiated client.
///
/// Unlike error responses these carry the full client context, so both
/// `Content-Type` and `Content-Language` are set.
#[derive(Debug, Clone)]
pub struct ResponseTransformer<S> {
    negotiator: ContentNegotiator,
    serializer: S,
    settings: ServerSettings,
}

impl<S: Serializer> ResponseTransformer<S> {
    pub fn new(negotiator: ContentNegotiator, serializer: S, settings: ServerSettings) -> Self {
        Self { negotiator, serializer, settings }
    }

    pub fn transform<T, B>(&self, payload: &T, request: &Request<B>) -> Result<Response<Bytes>, RestError>
    where
        T: Serialize + ?Sized,
    {
        self.transform_with_status(payload, StatusCode::OK, request)
    }

    pub fn transform_with_status<T, B>(
        &self,
        payload: &T,
        status: StatusCode,
        request: &Request<B>,
    ) -> Result<Response<Bytes>, RestError>
    where
        T: Serialize + ?Sized,
    {
        let client = HttpClient::from_request(request, &self.negotiator, &self.settings)?;
        let content = self.serializer.serialize(payload, client.negotiate_content_type())?;

        Ok(ResponseBuilder::new().content(content).status(status).client(client).build()?)
    }

    /// Like [`transform`](Self::transform), but a handler that produced nothing gets no response.
    pub fn transform_optional<T, B>(
        &self,
        payload: Option<&T>,
        request: &Request<B>,
    ) -> Option<Result<Response<Bytes>, RestError>>
    where
        T: Serialize + ?Sized,
    {
        payload.map(|payload| self.transform(payload, request))
    }
}
