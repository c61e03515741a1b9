//! HTTP forwarding clients for the dossier gateway.
//!
//! One client per upstream service (EPD, mail, identity provider), all
//! built on the same one-shot forwarding core in [`forward`]: single
//! request, transport failures become a fixed 502 message naming the
//! service, non-2xx statuses pass through with their body, and response
//! shapes are validated before anything reaches the route layer.

pub mod epd;
pub mod error;
pub mod forward;
pub mod header;
pub mod identity;
pub mod mail;

pub use epd::EpdClient;
pub use error::UpstreamError;
pub use forward::{Forward, UpstreamClient};
pub use header::bearer_header;
pub use identity::{IdentityClient, ProviderToken};
pub use mail::MailClient;
