//! Integration tests for playlists vertical slice
//!
//! Tests playlist operations including:
//! - Creation and per-owner listing with track counts
//! - Ownership checks on every mutation
//! - Append positions and idempotent adds
//! - Visibility of private and public playlists
//! - Transactional delete

mod test_helpers;

use cadence_core::{types::*, CadenceError};
use cadence_storage::playlists;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;

    let id = playlists::create(
        pool,
        &user,
        CreatePlaylist {
            name: "My Favorites".to_string(),
            description: Some("Best songs ever".to_string()),
        },
    )
    .await
    .expect("Failed to create playlist");

    let playlist = playlists::get_by_id(pool, &id).await.unwrap().unwrap();
    assert_eq!(playlist.name, "My Favorites");
    assert_eq!(playlist.description, Some("Best songs ever".to_string()));
    assert_eq!(playlist.owner_id, user);
    assert!(!playlist.is_public);
}

#[tokio::test]
async fn test_get_user_playlists() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let track = create_test_track(pool, "Song", "Pop", 0).await;

    let older = create_test_playlist(pool, &alice, "Older").await;
    let newer = create_test_playlist(pool, &alice, "Newer").await;
    create_test_playlist(pool, &bob, "Bob's").await;

    playlists::add_track(pool, &alice, &older, &track).await.unwrap();

    let owned = playlists::get_user_playlists(pool, &alice).await.unwrap();
    assert_eq!(owned.len(), 2);
    assert_eq!(owned[0].playlist.id, newer);
    assert_eq!(owned[0].track_count, 0);
    assert_eq!(owned[1].playlist.id, older);
    assert_eq!(owned[1].track_count, 1);
}

#[tokio::test]
async fn test_add_track_positions_and_idempotency() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let playlist = create_test_playlist(pool, &user, "Mix").await;
    let a = create_test_track(pool, "A", "Pop", 0).await;
    let b = create_test_track(pool, "B", "Pop", 0).await;

    let first = playlists::add_track(pool, &user, &playlist, &a).await.unwrap();
    playlists::add_track(pool, &user, &playlist, &b).await.unwrap();
    let again = playlists::add_track(pool, &user, &playlist, &a).await.unwrap();

    assert_eq!(first, again);

    let tracks = playlists::get_tracks(pool, Some(&user), &playlist).await.unwrap();
    let ordered: Vec<(&TrackId, i64)> = tracks.iter().map(|t| (&t.track.id, t.position)).collect();
    assert_eq!(ordered, vec![(&a, 0), (&b, 1)]);
}

#[tokio::test]
async fn test_positions_are_not_renumbered_after_removal() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let playlist = create_test_playlist(pool, &user, "Mix").await;
    let a = create_test_track(pool, "A", "Pop", 0).await;
    let b = create_test_track(pool, "B", "Pop", 0).await;
    let c = create_test_track(pool, "C", "Pop", 0).await;

    playlists::add_track(pool, &user, &playlist, &a).await.unwrap();
    playlists::add_track(pool, &user, &playlist, &b).await.unwrap();
    playlists::remove_track(pool, &user, &playlist, &a).await.unwrap();
    playlists::add_track(pool, &user, &playlist, &c).await.unwrap();

    // c takes the current count as its position, leaving a gap at 0
    let tracks = playlists::get_tracks(pool, Some(&user), &playlist).await.unwrap();
    let ordered: Vec<(&TrackId, i64)> = tracks.iter().map(|t| (&t.track.id, t.position)).collect();
    assert_eq!(ordered, vec![(&b, 1), (&c, 1)]);
}

#[tokio::test]
async fn test_mutations_require_ownership() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let playlist = create_test_playlist(pool, &alice, "Alice's").await;
    let track = create_test_track(pool, "Song", "Pop", 0).await;

    let err = playlists::add_track(pool, &bob, &playlist, &track).await.unwrap_err();
    assert!(matches!(err, CadenceError::PlaylistNotFound(_)));

    playlists::add_track(pool, &alice, &playlist, &track).await.unwrap();

    let err = playlists::remove_track(pool, &bob, &playlist, &track).await.unwrap_err();
    assert!(matches!(err, CadenceError::PlaylistNotFound(_)));

    let err = playlists::delete(pool, &bob, &playlist).await.unwrap_err();
    assert!(matches!(err, CadenceError::PlaylistNotFound(_)));

    // Nothing changed
    let tracks = playlists::get_tracks(pool, Some(&alice), &playlist).await.unwrap();
    assert_eq!(tracks.len(), 1);
}

#[tokio::test]
async fn test_unknown_playlist_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let track = create_test_track(pool, "Song", "Pop", 0).await;
    let missing = PlaylistId::new("missing");

    let err = playlists::add_track(pool, &user, &missing, &track).await.unwrap_err();
    assert!(matches!(err, CadenceError::PlaylistNotFound(id) if id == missing));
}

#[tokio::test]
async fn test_private_playlist_tracks_hidden_from_others() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let alice = create_test_user(pool, "alice").await;
    let bob = create_test_user(pool, "bob").await;
    let playlist = create_test_playlist(pool, &alice, "Secret").await;
    let track = create_test_track(pool, "Song", "Pop", 0).await;

    playlists::add_track(pool, &alice, &playlist, &track).await.unwrap();

    assert!(playlists::get_tracks(pool, Some(&bob), &playlist).await.unwrap().is_empty());
    assert!(playlists::get_tracks(pool, None, &playlist).await.unwrap().is_empty());

    make_public(pool, &playlist).await;

    assert_eq!(playlists::get_tracks(pool, Some(&bob), &playlist).await.unwrap().len(), 1);
    assert_eq!(playlists::get_tracks(pool, None, &playlist).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_playlist_tracks_skip_deleted_tracks() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let playlist = create_test_playlist(pool, &user, "Mix").await;
    let kept = create_test_track(pool, "Kept", "Pop", 0).await;
    let gone = create_test_track(pool, "Gone", "Pop", 0).await;

    playlists::add_track(pool, &user, &playlist, &gone).await.unwrap();
    playlists::add_track(pool, &user, &playlist, &kept).await.unwrap();
    delete_track(pool, &gone).await;

    let tracks = playlists::get_tracks(pool, Some(&user), &playlist).await.unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].track.id, kept);
    assert_eq!(tracks[0].position, 1);

    // The membership row still counts
    let owned = playlists::get_user_playlists(pool, &user).await.unwrap();
    assert_eq!(owned[0].track_count, 2);
}

#[tokio::test]
async fn test_delete_playlist_removes_memberships() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let playlist = create_test_playlist(pool, &user, "Doomed").await;
    let track = create_test_track(pool, "Song", "Pop", 0).await;

    playlists::add_track(pool, &user, &playlist, &track).await.unwrap();
    playlists::delete(pool, &user, &playlist).await.unwrap();

    assert!(playlists::get_by_id(pool, &playlist).await.unwrap().is_none());
    assert!(playlists::get_user_playlists(pool, &user).await.unwrap().is_empty());

    let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = ?")
        .bind(playlist.as_str())
        .fetch_one(pool)
        .await
        .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_get_distinct_positions() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = create_test_user(pool, "alice").await;
    let playlist = create_test_playlist(pool, &user, "Mix").await;

    let mut handles = Vec::new();
    for name in ["A", "B", "C", "D", "E", "F"] {
        let track = create_test_track(pool, name, "Pop", 0).await;
        let pool = pool.clone();
        let user = user.clone();
        let playlist = playlist.clone();
        handles.push(tokio::spawn(async move {
            playlists::add_track(&pool, &user, &playlist, &track).await
        }));
    }

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let tracks = playlists::get_tracks(pool, Some(&user), &playlist).await.unwrap();
    let mut positions: Vec<i64> = tracks.iter().map(|t| t.position).collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
}
