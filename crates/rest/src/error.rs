//! Error types for negotiation, serialization, validation and response building.
//!
//! Every failure in this crate is returned to the immediate caller, nothing is
//! retried or swallowed. The leaf enums each describe one concern, and
//! [`RestError`] aggregates them for the request-level entry points.
//!
//! Each leaf error knows the HTTP status it stands for, so a boundary layer can
//! turn it into a protocol response:
//!
//! - [`InvalidValue`]: `400 Bad Request`
//! - [`NotAcceptable`]: `406 Not Acceptable`
//! - [`ValidationError`]: `400 Bad Request`
//! - [`RequestError`]: `400 Bad Request` or `415 Unsupported Media Type`
//! - [`SerializeError`]: `500 Internal Server Error` unless it wraps a [`NotAcceptable`]

use crate::mime_type::MimeType;
use crate::validation::ViolationList;
use http::StatusCode;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("invalid value: {source}")]
    InvalidValue {
        #[from]
        source: InvalidValue,
    },

    #[error("not acceptable: {source}")]
    NotAcceptable {
        #[from]
        source: NotAcceptable,
    },

    #[error("serialize error: {source}")]
    Serialize { source: SerializeError },

    #[error("validation error: {source}")]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error("request error: {source}")]
    Request {
        #[from]
        source: RequestError,
    },

    #[error("http error: {source}")]
    Http {
        #[from]
        source: http::Error,
    },
}

impl RestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidValue { .. } => StatusCode::BAD_REQUEST,
            RestError::NotAcceptable { source } => source.status_code(),
            RestError::Serialize { .. } | RestError::Http { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::Validation { source } => source.status_code(),
            RestError::Request { source } => source.status_code(),
        }
    }
}

// a serializer that could not map the mime type is a negotiation failure, not a codec failure
impl From<SerializeError> for RestError {
    fn from(error: SerializeError) -> Self {
        match error {
            SerializeError::NotAcceptable(source) => RestError::NotAcceptable { source },
            source => RestError::Serialize { source },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    #[error("invalid mime type: {value:?}")]
    InvalidMimeType { value: String },

    #[error("invalid format: {value:?}")]
    InvalidFormat { value: String },
}

impl InvalidValue {
    pub fn mime_type<S: ToString>(value: S) -> Self {
        Self::InvalidMimeType { value: value.to_string() }
    }

    pub fn format<S: ToString>(value: S) -> Self {
        Self::InvalidFormat { value: value.to_string() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotAcceptable {
    #[error(
        "None of the accepted mimetypes {value} are configured for any Format. Check configuration under serialize > formats"
    )]
    NotNegotiable { name: String, value: String },

    #[error("MimeType {mime_type} was not configured for any Format. Check configuration under serialize > formats")]
    FormatNotConfigured { mime_type: String },
}

impl NotAcceptable {
    pub fn not_negotiable<N: ToString, V: ToString>(name: N, value: V) -> Self {
        Self::NotNegotiable { name: name.to_string(), value: value.to_string() }
    }

    pub fn format_not_configured(mime_type: &MimeType) -> Self {
        Self::FormatNotConfigured { mime_type: mime_type.to_string() }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::NOT_ACCEPTABLE
    }
}

#[derive(Error, Debug)]
pub enum SerializeError {
    #[error(transparent)]
    NotAcceptable(#[from] NotAcceptable),

    #[error("format {format} is not supported by the serializer")]
    UnsupportedFormat { format: String },

    #[error("json error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("xml error: {reason}")]
    Xml { reason: String },

    #[error("payload is not valid utf-8: {reason}")]
    InvalidUtf8 { reason: String },
}

impl SerializeError {
    pub fn unsupported_format<S: ToString>(format: S) -> Self {
        Self::UnsupportedFormat { format: format.to_string() }
    }

    pub fn xml<S: ToString>(reason: S) -> Self {
        Self::Xml { reason: reason.to_string() }
    }

    pub fn invalid_utf8<S: ToString>(reason: S) -> Self {
        Self::InvalidUtf8 { reason: reason.to_string() }
    }

    /// Whether the failure comes from the payload itself rather than the configuration.
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Self::Json { .. } | Self::Xml { .. } | Self::InvalidUtf8 { .. })
    }
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("validation failed with {count} violation(s)", count = .violations.len())]
    ValidationFailed { violations: ViolationList },
}

impl ValidationError {
    pub fn failed(violations: ViolationList) -> Self {
        Self::ValidationFailed { violations }
    }

    pub fn violations(&self) -> &ViolationList {
        match self {
            Self::ValidationFailed { violations } => violations,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl HttpApiError for ValidationError {
    type Content = ViolationList;

    fn status_code(&self) -> StatusCode {
        ValidationError::status_code(self)
    }

    fn content(&self) -> &Self::Content {
        self.violations()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("request has no content-type header")]
    MissingContentType,

    #[error("request body is empty")]
    EmptyBody,

    #[error("invalid request body: {reason}")]
    InvalidBody { reason: String },
}

impl RequestError {
    pub fn invalid_body<S: ToString>(reason: S) -> Self {
        Self::InvalidBody { reason: reason.to_string() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MissingContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RequestError::EmptyBody | RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// A domain error that can be rendered as an HTTP response.
///
/// The status code becomes the response status and the content is serialized
/// in whatever representation the client negotiated. Errors not implementing
/// this trait are never turned into responses by this crate.
pub trait HttpApiError: std::error::Error {
    type Content: Serialize + ?Sized;

    fn status_code(&self) -> StatusCode;

    fn content(&self) -> &Self::Content;
}

/// A ready-made [`HttpApiError`] pairing a status code with any serializable content.
#[derive(Debug, Clone)]
pub struct ApiError<T> {
    status: StatusCode,
    content: T,
}

impl<T> ApiError<T> {
    pub fn new(status: StatusCode, content: T) -> Self {
        Self { status, content }
    }

    pub fn into_content(self) -> T {
        self.content
    }
}

impl<T> fmt::Display for ApiError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http api error with status {}", self.status)
    }
}

impl<T: fmt::Debug> std::error::Error for ApiError<T> {}

impl<T: Serialize + fmt::Debug> HttpApiError for ApiError<T> {
    type Content = T;

    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn content(&self) -> &Self::Content {
        &self.content
    }
}
