use crate::builder::ResponseBuilder;
use crate::error::{NotAcceptable, RestError};
use crate::response::ErrorResponseResolver;
use crate::serialize::Serializer;
use bytes::Bytes;
use http::{Request, Response};
use tracing::{debug, warn};

/// Routes errors raised while handling a request to a response.
///
/// - [`RestError::NotAcceptable`] becomes a `406` response carrying the message
/// - [`RestError::Validation`] is rendered by the [`ErrorResponseResolver`]
///
/// Every other error is handed back unchanged for the surrounding server to deal with.
#[derive(Debug, Clone)]
pub struct ErrorHandler<S> {
    resolver: ErrorResponseResolver<S>,
}

impl<S: Serializer> ErrorHandler<S> {
    pub fn new(resolver: ErrorResponseResolver<S>) -> Self {
        Self { resolver }
    }

    pub fn handle<B>(&self, error: RestError, request: &Request<B>) -> Result<Response<Bytes>, RestError> {
        match error {
            RestError::NotAcceptable { source } => {
                warn!(cause = %source, "responding not acceptable");
                Ok(not_acceptable_response(&source)?)
            }
            RestError::Validation { source } => {
                debug!(violations = source.violations().len(), "responding validation failure");
                self.resolver.resolve(&source, request)
            }
            other => Err(other),
        }
    }
}

/// A `406` response carrying the error message as its body.
///
/// No representation was agreed on with the client, so the response has no
/// client context and therefore no `Content-Type` or `Content-Language`.
pub fn not_acceptable_response(error: &NotAcceptable) -> Result<Response<Bytes>, http::Error> {
    ResponseBuilder::new().content(error.to_string()).status(error.status_code()).build()
}
