use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    Fulfillment, NewOrder, Order, Result, Size, StoreError,
    store::OrderStore,
};

/// Name of the uniqueness constraint on the email column, as created by
/// the migrations.
const EMAIL_CONSTRAINT: &str = "orders_email_key";

/// PostgreSQL-backed order store.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        let method: String = row.try_get("method")?;
        let size: String = row.try_get("size")?;

        Ok(Order {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            method: Fulfillment::from_str(&method)?,
            size: Size::from_str(&size)?,
            toppings: row.try_get("toppings")?,
            comment: row.try_get("comment")?,
            submitted_at: row.try_get::<DateTime<Utc>, _>("submitted_at")?,
        })
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    #[tracing::instrument(skip(self, order))]
    async fn insert(&self, order: &NewOrder, submitted_at: DateTime<Utc>) -> Result<Order> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (first_name, last_name, email, method, size, toppings, comment, submitted_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&order.first_name)
        .bind(&order.last_name)
        .bind(&order.email)
        .bind(order.method.as_str())
        .bind(order.size.as_str())
        .bind(&order.toppings)
        .bind(&order.comment)
        .bind(submitted_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Duplicate email surfaces as a unique constraint violation
            // from the insert attempt, never a pre-check.
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some(EMAIL_CONSTRAINT)
            {
                return StoreError::DuplicateEmail(order.email.clone());
            }
            StoreError::Database(e)
        })?;

        Ok(Order::from_new(id, order, submitted_at))
    }

    #[tracing::instrument(skip(self))]
    async fn list_newest_first(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, method, size, toppings, comment, submitted_at
            FROM orders
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }
}
