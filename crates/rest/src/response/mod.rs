//! Turning handler results and errors into HTTP responses.
//!
//! - [`ErrorResponseResolver`]: renders an [`HttpApiError`](crate::HttpApiError)
//!   in the representation the client accepts
//! - [`ResponseTransformer`]: renders a successful payload the same way
//! - [`ErrorHandler`]: routes a [`RestError`](crate::RestError) to the right
//!   renderer or hands it back untouched

mod error_handler;
mod error_response_resolver;
mod response_transformer;

pub use error_handler::ErrorHandler;
pub use error_handler::not_acceptable_response;
pub use error_response_resolver::ErrorResponseResolver;
pub use response_transformer::ResponseTransformer;
