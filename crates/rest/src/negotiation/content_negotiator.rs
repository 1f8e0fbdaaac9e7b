use crate::config::NegotiationConfig;
use crate::error::NotAcceptable;
use crate::mime_type::MimeType;
use crate::negotiation::Negotiatable;
use tracing::{debug, trace, warn};

/// Wildcard keys replaced by the default mime type, longest first so that
/// `*/*` is never consumed as two single `*`.
const DEFAULT_KEYS: [&str; 3] = ["application/*", "*/*", "*"];

/// Quality key given to entries without a `;` parameter.
const DEFAULT_QUALITY: &str = "q=1.0";

/// Picks the configured mime type a client prefers.
///
/// The negotiator is built once from the configuration and is read-only
/// afterwards, so it can be shared between concurrently handled requests.
///
/// # Ranking
///
/// Entries are ranked by their raw parameter string (`q=0.9`), compared as
/// text in descending order, not as numbers. Entries sharing the same
/// parameter string collapse to the first one seen. This ordering is part of
/// the observable behaviour and must stay lexicographic: for instance `q=0.5`
/// outranks `q=.9`, and any `q=...` outranks `Q=...` or `level=1`.
#[derive(Debug, Clone)]
pub struct ContentNegotiator {
    availables: Vec<MimeType>,
    default: MimeType,
}

impl ContentNegotiator {
    pub fn new(config: &NegotiationConfig) -> Self {
        Self { availables: config.mime_types().cloned().collect(), default: config.format_default().clone() }
    }

    /// Negotiates the mime type to answer with.
    ///
    /// Fails with [`NotAcceptable::NotNegotiable`], carrying the header name and
    /// its raw value, when no entry of the header is configured.
    pub fn negotiate<H: Negotiatable + ?Sized>(&self, header: &H) -> Result<MimeType, NotAcceptable> {
        let raw = header.value();
        trace!(name = header.name(), value = raw, "negotiating content type");

        let normalized: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let substituted = self.substitute_defaults(&normalized);

        let mut candidates: Vec<(&str, &MimeType)> = Vec::new();
        for entry in substituted.split(',') {
            let mut parts = entry.split(';');
            let token = parts.next().unwrap_or_default();
            let key = parts.next().unwrap_or(DEFAULT_QUALITY);

            if candidates.iter().any(|(seen, _)| *seen == key) {
                continue;
            }
            if let Some(mime_type) = self.available(token) {
                candidates.push((key, mime_type));
            }
        }

        // lexicographic on purpose, see the type level docs
        candidates.sort_by(|(a, _), (b, _)| b.cmp(a));

        match candidates.first() {
            Some((key, mime_type)) => {
                debug!(mime_type = %mime_type, quality = key, "negotiated content type");
                Ok((*mime_type).clone())
            }
            None => {
                warn!(name = header.name(), value = raw, "no acceptable content type configured");
                Err(NotAcceptable::not_negotiable(header.name(), raw))
            }
        }
    }

    fn available(&self, token: &str) -> Option<&MimeType> {
        self.availables.iter().find(|mime_type| mime_type.as_str() == token)
    }

    /// Replaces every wildcard key in the whole value with the default mime type.
    ///
    /// This is a textual pass over the string, scanning left to right and never
    /// revisiting replaced text, so `text/*` becomes `text/` followed by the default.
    fn substitute_defaults(&self, value: &str) -> String {
        let mut substituted = String::with_capacity(value.len() + self.default.as_str().len());
        let mut rest = value;

        while let Some(c) = rest.chars().next() {
            match DEFAULT_KEYS.iter().find(|key| rest.starts_with(**key)) {
                Some(key) => {
                    substituted.push_str(self.default.as_str());
                    rest = &rest[key.len()..];
                }
                None => {
                    substituted.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        substituted
    }
}
