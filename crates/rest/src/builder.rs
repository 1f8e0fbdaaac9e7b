//! Rendering of the outgoing response.

use crate::client::HttpClient;
use crate::mime_type::MimeType;
use bytes::Bytes;
use http::header::{CONTENT_LANGUAGE, CONTENT_TYPE};
use http::{Response, StatusCode};

const PROBLEM: &str = "problem+";

/// Collects body, status and client context of one response, then renders it once.
///
/// The builder is owned by the request that creates it and consumed by
/// [`build`](ResponseBuilder::build).
///
/// Headers are derived at render time:
/// - `Content-Type` comes from the explicit content type if set, else from the client.
///   For `4xx` statuses the last segment gets a `problem+` prefix, so
///   `application/json` becomes `application/problem+json`.
/// - `Content-Language` comes from the client.
///
/// Without a client and without an explicit content type, neither header is set.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    content: Bytes,
    status: StatusCode,
    client: Option<HttpClient>,
    content_type: Option<MimeType>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self { content: Bytes::new(), status: StatusCode::OK, client: None, content_type: None }
    }

    pub fn content(mut self, content: impl Into<Bytes>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn client(mut self, client: HttpClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn content_type(mut self, content_type: MimeType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn build(self) -> Result<Response<Bytes>, http::Error> {
        let mut builder = Response::builder().status(self.status);

        let content_type =
            self.content_type.as_ref().or_else(|| self.client.as_ref().map(HttpClient::negotiate_content_type));

        if let Some(content_type) = content_type {
            let content_type = if self.status.is_client_error() {
                with_problem(content_type.as_str())
            } else {
                content_type.to_string()
            };
            builder = builder.header(CONTENT_TYPE, content_type);
        }

        if let Some(client) = &self.client {
            builder = builder.header(CONTENT_LANGUAGE, client.language());
        }

        builder.body(self.content)
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Inserts `problem+` in front of the last `/` separated segment.
fn with_problem(content_type: &str) -> String {
    match content_type.rsplit_once('/') {
        Some((head, last)) => format!("{head}/{PROBLEM}{last}"),
        None => format!("{PROBLEM}{content_type}"),
    }
}
