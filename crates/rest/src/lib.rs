//! Content negotiation, serialization and problem responses for micro HTTP services
//!
//! This crate sits between a router and the handlers of a REST-style service. It decides
//! which representation a client gets, turns payloads into that representation and back,
//! validates incoming data and renders failures as problem responses. It does no I/O of
//! its own: everything works on [`http::Request`] and [`http::Response`] values, so it can be
//! plugged into any server built on the `http` crate.
//!
//! # Features
//!
//! - `Accept` header negotiation against a configured set of formats
//! - JSON and XML (de)serialization selected by mime type
//! - Request body resolution with derive-based validation
//! - Problem responses (`application/problem+json`, ...) for client errors
//! - A bare `406 Not Acceptable` when nothing could be negotiated
//!
//! # Example
//!
//! ```
//! use http::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_LANGUAGE, CONTENT_TYPE};
//! use http::Request;
//! use micro_rest::negotiation::ContentNegotiator;
//! use micro_rest::response::ResponseTransformer;
//! use micro_rest::{FormatSerializer, RestConfig};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Candy {
//!     name: &'static str,
//!     weight: u32,
//! }
//!
//! let config = RestConfig::default();
//! let transformer = ResponseTransformer::new(
//!     ContentNegotiator::new(&config.serialize),
//!     FormatSerializer::from_config(&config.serialize),
//!     config.server.clone(),
//! );
//!
//! let request = Request::builder()
//!     .header(ACCEPT, "application/xml;q=0.9, application/json")
//!     .header(ACCEPT_LANGUAGE, "de")
//!     .body(())
//!     .unwrap();
//!
//! let response = transformer.transform(&Candy { name: "Bonbon", weight: 100 }, &request).unwrap();
//!
//! assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
//! assert_eq!(response.headers()[CONTENT_LANGUAGE], "de");
//! assert_eq!(response.body().as_ref(), br#"{"name":"Bonbon","weight":100}"#);
//! ```
//!
//! # Architecture
//!
//! - [`negotiation`]: the `Accept` header model and the [`negotiation::ContentNegotiator`]
//! - [`response`]: rendering of payloads and errors into responses
//! - [`RequestBodyResolver`]: reading and validating request bodies
//!
//! # Core Components
//!
//! ## Configuration
//!
//! [`RestConfig`] holds the configured formats, each a label such as `json` with the
//! [`MimeType`]s it covers, and the mime type substituted for wildcard requests. It is
//! deserialized once at startup and then shared read-only.
//!
//! ## Negotiation
//!
//! The negotiator picks one configured mime type for a request, [`FormatMapper`] maps it
//! back to its [`Format`], and [`HttpClient`] carries the result together with the
//! response language.
//!
//! ## Serialization
//!
//! [`FormatSerializer`] implements [`Serializer`] for the `json` and `xml` formats. Other
//! implementations can be plugged into every component that serializes.
//!
//! ## Error Handling
//!
//! - [`RestError`]: top-level error of the request entry points
//! - [`NotAcceptable`]: nothing the client accepts is configured
//! - [`ValidationError`]: the data violated its constraints
//! - [`HttpApiError`]: any error that knows how to be rendered as a response

mod builder;
mod client;
mod config;
mod error;
mod format;
mod format_mapper;
mod mime_type;
pub mod negotiation;
mod request;
pub mod response;
mod serialize;
mod utils;
mod validation;

pub use builder::ResponseBuilder;
pub use client::HttpClient;
pub use config::{NegotiationConfig, RestConfig, ServerSettings};
pub use error::{
    ApiError, HttpApiError, InvalidValue, NotAcceptable, RequestError, RestError, SerializeError, ValidationError,
};
pub use format::Format;
pub use format_mapper::FormatMapper;
pub use mime_type::MimeType;
pub use request::RequestBodyResolver;
pub use serialize::{FormatSerializer, Serializer};
pub use validation::{DeriveEngine, ValidationEngine, Validator, Violation, ViolationList};
