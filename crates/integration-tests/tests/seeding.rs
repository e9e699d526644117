//! Integration tests for bootstrap seeding idempotence.
//!
//! These tests require a migrated `PostgreSQL` database reachable through
//! the usual environment configuration (no running server needed).
//!
//! Run with: cargo test -p mindwell-integration-tests -- --ignored

use mindwell_api::config::ApiConfig;
use mindwell_api::db::create_pool;
use mindwell_api::seed;

#[tokio::test]
#[ignore = "Requires a migrated PostgreSQL database"]
async fn test_seeding_twice_keeps_one_row_per_name() {
    let config = ApiConfig::from_env().expect("config");
    let pool = create_pool(&config.database_url).await.expect("pool");

    seed::run(&pool).await.expect("first seeding run");
    seed::run(&pool).await.expect("second seeding run");

    let duplicated: Vec<String> =
        sqlx::query_scalar("SELECT name FROM counselor GROUP BY name HAVING COUNT(*) > 1")
            .fetch_all(&pool)
            .await
            .expect("duplicate name query");
    assert!(
        duplicated.is_empty(),
        "duplicated counselor names: {duplicated:?}"
    );

    let catalog_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM counselor WHERE name = $1")
        .bind("Dr. Sarah Fernando")
        .fetch_one(&pool)
        .await
        .expect("catalog row count");
    assert_eq!(catalog_rows, 1);

    let admins: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM account WHERE email = $1")
        .bind(seed::ADMIN_EMAIL)
        .fetch_one(&pool)
        .await
        .expect("admin account count");
    assert_eq!(admins, 1);
}
