//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p order-store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use order_store::{
    Fulfillment, InMemoryOrderStore, NewOrder, OrderStore, PostgresOrderStore, Size, StoreError,
};
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!("../../../migrations/001_create_orders_table.sql"))
                .execute(&temp_pool)
                .await
                .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and a cleared table
async fn get_test_store() -> PostgresOrderStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE orders")
        .execute(&pool)
        .await
        .unwrap();

    PostgresOrderStore::new(pool)
}

fn new_order(email: &str) -> NewOrder {
    NewOrder {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        method: Fulfillment::Pickup,
        size: Size::Large,
        toppings: "pepperoni, olives".to_string(),
        comment: "extra napkins".to_string(),
    }
}

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

#[tokio::test]
async fn insert_and_read_back() {
    let store = get_test_store().await;

    let inserted = store.insert(&new_order("ada@x.com"), at(100)).await.unwrap();
    assert!(inserted.id > 0);

    let orders = store.list_newest_first().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0], inserted);
    assert_eq!(orders[0].toppings, "pepperoni, olives");
    assert_eq!(orders[0].method, Fulfillment::Pickup);
    assert_eq!(orders[0].size, Size::Large);
}

#[tokio::test]
async fn ids_are_monotonically_increasing() {
    let store = get_test_store().await;

    let first = store.insert(&new_order("a@x.com"), at(1)).await.unwrap();
    let second = store.insert(&new_order("b@x.com"), at(2)).await.unwrap();
    let third = store.insert(&new_order("c@x.com"), at(3)).await.unwrap();

    assert!(first.id < second.id);
    assert!(second.id < third.id);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let store = get_test_store().await;

    store.insert(&new_order("ada@x.com"), at(1)).await.unwrap();
    let result = store.insert(&new_order("ada@x.com"), at(2)).await;

    assert!(matches!(result, Err(StoreError::DuplicateEmail(_))));

    // The failed insert must not leave a second row behind.
    let orders = store.list_newest_first().await.unwrap();
    assert_eq!(orders.len(), 1);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let store = get_test_store().await;

    store.insert(&new_order("a@x.com"), at(10)).await.unwrap();
    store.insert(&new_order("b@x.com"), at(30)).await.unwrap();
    store.insert(&new_order("c@x.com"), at(20)).await.unwrap();

    let orders = store.list_newest_first().await.unwrap();
    let emails: Vec<_> = orders.iter().map(|o| o.email.as_str()).collect();
    assert_eq!(emails, vec!["b@x.com", "c@x.com", "a@x.com"]);
}

#[tokio::test]
async fn empty_toppings_and_comment_round_trip() {
    let store = get_test_store().await;

    let mut order = new_order("plain@x.com");
    order.toppings = String::new();
    order.comment = String::new();

    store.insert(&order, at(1)).await.unwrap();

    let orders = store.list_newest_first().await.unwrap();
    assert_eq!(orders[0].toppings, "");
    assert_eq!(orders[0].comment, "");
}

#[tokio::test]
async fn matches_in_memory_store_behavior() {
    let pg = get_test_store().await;
    let mem = InMemoryOrderStore::new();

    for (email, ts) in [("a@x.com", 5), ("b@x.com", 9), ("c@x.com", 7)] {
        pg.insert(&new_order(email), at(ts)).await.unwrap();
        mem.insert(&new_order(email), at(ts)).await.unwrap();
    }

    let pg_emails: Vec<_> = pg
        .list_newest_first()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.email)
        .collect();
    let mem_emails: Vec<_> = mem
        .list_newest_first()
        .await
        .unwrap()
        .into_iter()
        .map(|o| o.email)
        .collect();

    assert_eq!(pg_emails, mem_emails);
}
