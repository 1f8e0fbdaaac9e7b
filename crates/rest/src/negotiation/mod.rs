//! Content negotiation.
//!
//! [`ContentNegotiator`] picks one configured mime type out of an `Accept`
//! header. The headers it reads are modelled by the [`Negotiatable`] trait so
//! the negotiator never depends on a concrete request type.

mod accept;
mod content_negotiator;

pub use accept::AcceptHeader;
pub use accept::AcceptLanguageHeader;
pub use accept::Negotiatable;
pub use content_negotiator::ContentNegotiator;
