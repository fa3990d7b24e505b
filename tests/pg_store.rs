//! PostgreSQL store tests. Require a reachable database in `DATABASE_URL`; run with `--ignored`.

use book_store::{migrate_books, BookStore, NewBook, PgBookStore, StoreError};
use sqlx::postgres::PgPoolOptions;

async fn store() -> PgBookStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect");
    migrate_books(&pool).await.expect("migrate");
    // Running twice must be harmless.
    migrate_books(&pool).await.expect("migrate again");
    PgBookStore::new(pool)
}

#[tokio::test]
#[ignore]
async fn crud_round_trip() {
    let store = store().await;
    let created = store
        .create(NewBook {
            author: "A".into(),
            title: "T".into(),
            publisher: "P".into(),
        })
        .await
        .unwrap();
    assert!(created.id > 0);

    let listed = store.list_all().await.unwrap();
    assert_eq!(listed.iter().filter(|b| b.id == created.id).count(), 1);
    assert_eq!(store.find_by_id(created.id).await.unwrap(), created);

    assert!(store.delete_by_id(created.id).await.unwrap());
    assert!(matches!(
        store.find_by_id(created.id).await,
        Err(StoreError::NotFound(_))
    ));
    assert!(!store.delete_by_id(created.id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn ping_succeeds() {
    store().await.ping().await.unwrap();
}
