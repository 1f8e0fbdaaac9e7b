//! Reading typed, validated data out of request bodies.

use crate::error::{RequestError, RestError};
use crate::mime_type::MimeType;
use crate::serialize::Serializer;
use crate::utils::ensure;
use crate::validation::{DeriveEngine, ValidationEngine, Validator};
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Request};
use serde::de::DeserializeOwned;
use tracing::trace;

/// Deserializes a request body according to its `Content-Type` and validates the result.
///
/// Parameters of the content type, such as `charset`, are ignored when
/// looking up the format.
#[derive(Debug, Clone)]
pub struct RequestBodyResolver<S, E = DeriveEngine> {
    serializer: S,
    validator: Validator<E>,
}

impl<S: Serializer, E> RequestBodyResolver<S, E> {
    pub fn new(serializer: S, validator: Validator<E>) -> Self {
        Self { serializer, validator }
    }

    pub fn resolve<T, B>(&self, request: &Request<B>) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: AsRef<[u8]>,
        E: ValidationEngine<T>,
    {
        let data: T = self.deserialize(request)?;
        self.validator.validate(&data)?;
        Ok(data)
    }

    /// Resolves a body holding a list, validating every element before failing.
    pub fn resolve_all<T, B>(&self, request: &Request<B>) -> Result<Vec<T>, RestError>
    where
        T: DeserializeOwned,
        B: AsRef<[u8]>,
        E: ValidationEngine<T>,
    {
        let data: Vec<T> = self.deserialize(request)?;
        self.validator.validate_all(&data)?;
        Ok(data)
    }

    fn deserialize<T, B>(&self, request: &Request<B>) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: AsRef<[u8]>,
    {
        let mime_type = content_type(request.headers())?;
        let body = request.body().as_ref();
        ensure!(!body.is_empty(), RequestError::EmptyBody.into());

        trace!(content_type = %mime_type, len = body.len(), "resolving request body");
        // a payload the codec rejects is the client's fault, anything else is configuration
        self.serializer.deserialize(body, &mime_type).map_err(|e| {
            if e.is_codec_error() { RequestError::invalid_body(e).into() } else { RestError::from(e) }
        })
    }
}

fn content_type(headers: &HeaderMap) -> Result<MimeType, RestError> {
    let value = headers.get(CONTENT_TYPE).ok_or(RequestError::MissingContentType)?;
    let mime_type = MimeType::from_string(String::from_utf8_lossy(value.as_bytes()))?;
    Ok(mime_type.without_parameters())
}
