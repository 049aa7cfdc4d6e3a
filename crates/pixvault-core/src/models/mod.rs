//! Data models for the application
//!
//! This module contains all data structures used throughout the application,
//! organized by domain.

mod asset;
mod catalog;
mod format;
mod link;
mod spec;
mod tier;
mod user;

// Re-export all models for convenient imports
pub use asset::*;
pub use catalog::*;
pub use format::*;
pub use link::*;
pub use spec::*;
pub use tier::*;
pub use user::*;
