mod service;

pub use service::{LibraryService, Page};
