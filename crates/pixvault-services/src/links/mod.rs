mod service;

pub use service::{ExpiringLinkService, LinkResolution, ResolvedImage};
