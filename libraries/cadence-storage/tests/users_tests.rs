//! Integration tests for user accounts

mod test_helpers;

use cadence_core::CadenceError;
use cadence_storage::users;
use test_helpers::*;

#[tokio::test]
async fn test_create_and_lookup_user() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, "alice").await.unwrap();

    let by_id = users::get_by_id(pool, &user.id).await.unwrap().unwrap();
    assert_eq!(by_id, user);

    let by_name = users::find_by_name(pool, "alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);

    assert!(users::find_by_name(pool, "nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_name_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    users::create(pool, "alice").await.unwrap();
    let err = users::create(pool, "alice").await.unwrap_err();

    assert!(matches!(err, CadenceError::Duplicate(_)));
}

#[tokio::test]
async fn test_password_hash_round_trip() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, "alice").await.unwrap();
    assert!(users::get_password_hash(pool, &user.id).await.unwrap().is_none());

    users::set_password_hash(pool, &user.id, "hash-1").await.unwrap();
    users::set_password_hash(pool, &user.id, "hash-2").await.unwrap();

    let stored = users::get_password_hash(pool, &user.id).await.unwrap();
    assert_eq!(stored.as_deref(), Some("hash-2"));
}

#[tokio::test]
async fn test_anonymous_users_are_distinct_guests() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = users::create_anonymous(pool).await.unwrap();
    let second = users::create_anonymous(pool).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(first.name.starts_with("guest-"));
    assert!(users::get_password_hash(pool, &first.id).await.unwrap().is_none());

    let all = users::get_all(pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_yield_one_user() {
    let test_db = TestDb::new().await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let pool = test_db.pool().clone();
        handles.push(tokio::spawn(async move { users::create(&pool, "alice").await }));
    }

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(err) => assert!(matches!(err, CadenceError::Duplicate(_)), "{err:?}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(users::get_all(test_db.pool()).await.unwrap().len(), 1);
}
