mod helpers;

use helpers::{force_expire, png_bytes, seed_catalog, seed_user, setup_app};
use pixvault_services::LinkResolution;

/// Full lifecycle: catalog {original, 200px}; a 400x800 upload titled "T"
/// yields the original plus a 100x200 thumbnail; a 300s link on the
/// thumbnail resolves live, expires, is reaped, and stays gone.
#[tokio::test]
async fn test_upload_link_expire_sweep_lifecycle() {
    let app = setup_app();
    let (original_id, thumb_ids) = seed_catalog(&app, &[200]);
    let user = seed_user(&app, vec![original_id, thumb_ids[0]], true);

    // Upload: exactly two assets, dimensions as specified.
    let created = app
        .upload
        .upload(user.id, "T", "t.png", png_bytes(400, 800))
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!((created[0].width_px, created[0].height_px), (400, 800));
    assert_eq!((created[1].width_px, created[1].height_px), (100, 200));

    // Both variants are visible to this tier.
    let page = app.library.list_visible(&user, 10, 0).await.unwrap();
    assert_eq!(page.total, 2);

    // Mint a link on the thumbnail: live, public URL set.
    let link = app
        .link_service
        .create_link(&user, created[1].id, 300)
        .await
        .unwrap();
    assert!(link.public_url.contains(&link.token.to_string()));
    assert!(matches!(
        app.link_service.resolve_link(link.token).await.unwrap(),
        LinkResolution::Live(_)
    ));

    // Time passes beyond the lifetime.
    force_expire(&app, &link);

    // Resolution now reports expiry and reaps the row.
    assert!(matches!(
        app.link_service.resolve_link(link.token).await.unwrap(),
        LinkResolution::Expired
    ));

    // The next sweep finds nothing left to delete.
    assert_eq!(app.sweeper.sweep_once().await.unwrap(), 0);
    assert_eq!(app.links.link_count(), 0);
}
