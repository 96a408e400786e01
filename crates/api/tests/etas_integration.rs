//! Integration tests for ETA persistence.
//!
//! The external routing lookup is not exercised here (its response handling
//! is unit-tested in the routing service); these tests cover the repository
//! the /api/update-eta handler persists through.
//!
//! Requires a running PostgreSQL instance; set TEST_DATABASE_URL to run.

mod common;

use common::{run_migrations, try_test_pool, unique_id};
use persistence::repositories::EtaRepository;

#[tokio::test]
async fn test_eta_upsert_overwrites_previous_record() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return;
    };
    run_migrations(&pool).await;

    let bus_id = unique_id("bus");
    let repo = EtaRepository::new(pool.clone());

    repo.upsert(&bus_id, "12.50", 15000.0).await.unwrap();
    let stored = repo.find_by_id(&bus_id).await.unwrap().unwrap();
    assert_eq!(stored.eta, "12.50");
    assert_eq!(stored.distance, 15000.0);

    // A second update replaces the record wholesale
    repo.upsert(&bus_id, "3.25", 2100.0).await.unwrap();
    let stored = repo.find_by_id(&bus_id).await.unwrap().unwrap();
    assert_eq!(stored.eta, "3.25");
    assert_eq!(stored.distance, 2100.0);
}

#[tokio::test]
async fn test_eta_find_missing_returns_none() {
    let Some(pool) = try_test_pool().await else {
        eprintln!("skipping: TEST_DATABASE_URL not set");
        return;
    };
    run_migrations(&pool).await;

    let repo = EtaRepository::new(pool.clone());
    let missing = repo.find_by_id(&unique_id("bus")).await.unwrap();
    assert!(missing.is_none());
}
