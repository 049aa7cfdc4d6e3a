//! Pixvault Services
//!
//! The four core operations an edge layer calls into (upload, list,
//! create-expiring-link, resolve-expiring-link) plus the tier access policy
//! and the background expiry sweeper.

pub mod access;
pub mod cleanup;
pub mod library;
pub mod links;
pub mod upload;

// Re-export commonly used types
pub use access::AccessPolicy;
pub use cleanup::SweeperService;
pub use library::{LibraryService, Page};
pub use links::{ExpiringLinkService, LinkResolution, ResolvedImage};
pub use upload::UploadService;
