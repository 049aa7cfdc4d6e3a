//! Test helpers shared across crates.

pub mod mock_repositories;

pub use mock_repositories::{
    MockAssetRepository, MockLinkRepository, MockSpecRepository, MockTierRepository,
};
