//! Shared fixtures for service integration tests.
//!
//! Everything runs against the in-memory mock repositories; expiry is
//! simulated by planting past-dated link rows rather than waiting on a clock.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use image::{DynamicImage, Rgba, RgbaImage};
use uuid::Uuid;

use pixvault_core::models::{AccountTier, ExpiringLink, ThumbnailSpec, User};
use pixvault_db::test_helpers::{
    MockAssetRepository, MockLinkRepository, MockSpecRepository, MockTierRepository,
};
use pixvault_services::{
    AccessPolicy, ExpiringLinkService, LibraryService, SweeperService, UploadService,
};

pub const BASE_URL: &str = "http://localhost:8080";

pub struct TestApp {
    pub specs: MockSpecRepository,
    pub tiers: MockTierRepository,
    pub assets: MockAssetRepository,
    pub links: MockLinkRepository,
    pub upload: UploadService,
    pub library: LibraryService,
    pub link_service: ExpiringLinkService,
    pub sweeper: Arc<SweeperService>,
}

pub fn setup_app() -> TestApp {
    let specs = MockSpecRepository::new();
    let tiers = MockTierRepository::new();
    let assets = MockAssetRepository::new();
    let links = MockLinkRepository::new();

    let policy = AccessPolicy::new(Arc::new(tiers.clone()));
    let upload = UploadService::new(
        Arc::new(specs.clone()),
        Arc::new(assets.clone()),
        25 * 1024 * 1024,
        90,
    );
    let library = LibraryService::new(
        Arc::new(assets.clone()),
        Arc::new(links.clone()),
        policy.clone(),
    );
    let link_service = ExpiringLinkService::new(
        Arc::new(assets.clone()),
        Arc::new(links.clone()),
        policy,
        BASE_URL.to_string(),
        300,
        30_000,
    );
    let sweeper = Arc::new(SweeperService::new(Arc::new(links.clone()), 86_400));

    TestApp {
        specs,
        tiers,
        assets,
        links,
        upload,
        library,
        link_service,
        sweeper,
    }
}

/// Seed the catalog with an original marker plus the given thumbnail heights.
/// Returns (original_spec_id, thumbnail_spec_ids in order).
pub fn seed_catalog(app: &TestApp, heights: &[i32]) -> (Uuid, Vec<Uuid>) {
    let original = ThumbnailSpec {
        id: Uuid::new_v4(),
        title: "original".to_string(),
        target_height_px: None,
        is_original: true,
    };
    let original_id = original.id;
    app.specs.add_spec(original);

    let mut thumb_ids = Vec::new();
    for h in heights {
        let spec = ThumbnailSpec {
            id: Uuid::new_v4(),
            title: format!("{h}px"),
            target_height_px: Some(*h),
            is_original: false,
        };
        thumb_ids.push(spec.id);
        app.specs.add_spec(spec);
    }
    (original_id, thumb_ids)
}

/// Register a tier allowing the given specs and a user on it.
pub fn seed_user(app: &TestApp, allowed_spec_ids: Vec<Uuid>, can_link: bool) -> User {
    let tier = AccountTier {
        id: Uuid::new_v4(),
        title: "test-tier".to_string(),
        allowed_spec_ids,
        can_create_expiring_link: can_link,
    };
    let tier_id = tier.id;
    app.tiers.add_tier(tier);

    User {
        id: Uuid::new_v4(),
        username: "tester".to_string(),
        tier_id: Some(tier_id),
    }
}

pub fn user_without_tier() -> User {
    User {
        id: Uuid::new_v4(),
        username: "untiered".to_string(),
        tier_id: None,
    }
}

/// A deterministic PNG with per-pixel variation, so re-encoding mistakes show
/// up in pixel comparisons.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut img = RgbaImage::new(width, height);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255]);
    }
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Replace a stored link with a copy whose expiry is in the past.
pub fn force_expire(app: &TestApp, link: &ExpiringLink) {
    let mut expired = link.clone();
    expired.expires_at = Utc::now() - Duration::seconds(1);
    app.links.add_link(expired);
}
