use sqlx::PgPool;
use std::sync::Arc;
use shortlink_service::domain::entities::{NewShortLink, NewUser};
use shortlink_service::domain::repositories::{CreateLinkError, LinkRepository, UserRepository};
use shortlink_service::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use uuid::Uuid;

async fn create_owner(pool: &Arc<PgPool>, email: &str) -> Uuid {
    PgUserRepository::new(pool.clone())
        .create(NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap()
        .id
}

fn new_link(code: &str, original: &str, owner: Uuid) -> NewShortLink {
    NewShortLink {
        code: code.to_string(),
        original: original.to_string(),
        user_id: owner,
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_link(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = create_owner(&pool, "owner@example.com").await;
    let repo = PgLinkRepository::new(pool);

    let link = repo
        .create(new_link("abcd1234", "https://example.com", owner))
        .await
        .unwrap();

    assert_eq!(link.code, "abcd1234");
    assert_eq!(link.original, "https://example.com");
    assert_eq!(link.user_id, owner);
    assert_eq!(link.clicks, 0);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_create_classifies_conflicts(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = create_owner(&pool, "owner@example.com").await;
    let repo = PgLinkRepository::new(pool);

    repo.create(new_link("abcd1234", "https://example.com", owner))
        .await
        .unwrap();

    let same_code = repo
        .create(new_link("abcd1234", "https://other.example", owner))
        .await;
    assert!(matches!(same_code, Err(CreateLinkError::CodeTaken)));

    let same_url = repo
        .create(new_link("ffff0000", "https://example.com", owner))
        .await;
    assert!(matches!(same_url, Err(CreateLinkError::OriginalTaken)));

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_find_by_original_and_code(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = create_owner(&pool, "owner@example.com").await;
    let repo = PgLinkRepository::new(pool);

    repo.create(new_link("abcd1234", "https://example.com/a", owner))
        .await
        .unwrap();

    let by_url = repo.find_by_original("https://example.com/a").await.unwrap();
    assert_eq!(by_url.unwrap().code, "abcd1234");
    assert!(repo.find_by_original("https://example.com/b").await.unwrap().is_none());

    let by_code = repo.find_by_code("abcd1234").await.unwrap();
    assert_eq!(by_code.unwrap().original, "https://example.com/a");
    assert!(repo.find_by_code("00000000").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_list_by_user_filters_owner(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = create_owner(&pool, "owner@example.com").await;
    let other = create_owner(&pool, "other@example.com").await;
    let repo = PgLinkRepository::new(pool);

    repo.create(new_link("aaaa0001", "https://a.example", owner))
        .await
        .unwrap();
    repo.create(new_link("bbbb0001", "https://b.example", other))
        .await
        .unwrap();

    let links = repo.list_by_user(owner).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].code, "aaaa0001");
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_record_click_increments(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = create_owner(&pool, "owner@example.com").await;
    let repo = PgLinkRepository::new(pool);

    repo.create(new_link("abcd1234", "https://example.com", owner))
        .await
        .unwrap();

    for _ in 0..3 {
        let original = repo.record_click("abcd1234").await.unwrap();
        assert_eq!(original.as_deref(), Some("https://example.com"));
    }

    assert!(repo.record_click("00000000").await.unwrap().is_none());
    assert_eq!(repo.find_by_code("abcd1234").await.unwrap().unwrap().clicks, 3);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL (DATABASE_URL)"]
async fn test_concurrent_clicks_are_not_lost(pool: PgPool) {
    let pool = Arc::new(pool);
    let owner = create_owner(&pool, "owner@example.com").await;
    let repo = Arc::new(PgLinkRepository::new(pool));

    repo.create(new_link("abcd1234", "https://example.com", owner))
        .await
        .unwrap();

    let mut clicks = tokio::task::JoinSet::new();
    for _ in 0..20 {
        let repo = repo.clone();
        clicks.spawn(async move { repo.record_click("abcd1234").await.unwrap() });
    }
    while let Some(result) = clicks.join_next().await {
        assert!(result.unwrap().is_some());
    }

    assert_eq!(repo.find_by_code("abcd1234").await.unwrap().unwrap().clicks, 20);
}
