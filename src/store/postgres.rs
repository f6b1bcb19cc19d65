//! Postgres-backed implementation of the cake store.
//!
//! # What this module is
//! Implements the [`CakeStore`] trait using Postgres (via `sqlx`) as the
//! durable backing store for cake records. Each operation maps to one
//! parameterized statement against the shared connection pool.
//!
//! # Concurrency model
//! The store is shared across async handlers; `sqlx::PgPool` manages
//! concurrency. Each method acquires a pooled connection; pool sizing
//! controls throughput.
//!
//! # Operational notes
//! - Migrations are executed at startup via `sqlx::migrate!("./migrations")`
//!   so handlers can assume the schema exists before serving requests.
//! - Connection acquire timeouts are configured explicitly: failing fast
//!   beats hanging on an unavailable database.
//! - Database URLs may contain credentials; avoid logging them.
use super::{CakeStore, StoreError, StoreResult};
use crate::config::PostgresConfig;
use crate::model::{Cake, CakeDraft, CakeSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;
use std::time::Duration;

pub struct PostgresStore {
    pool: PgPool,
}

/// Row shape for the `cakes` table.
///
/// DB-facing structs stay separate from the domain types so schema details
/// (nullable columns, storage formats) never leak into the API model. The
/// optional columns collapse to ""/0.0 on read, matching the wire contract
/// where every field is always present.
#[derive(Debug, Clone, FromRow)]
struct DbCake {
    id: i64,
    title: String,
    description: Option<String>,
    rating: Option<f64>,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Row shape for the list projection.
#[derive(Debug, Clone, FromRow)]
struct DbCakeSummary {
    id: i64,
    title: String,
    rating: Option<f64>,
    image: Option<String>,
}

fn cake_from_db(row: DbCake) -> Cake {
    Cake {
        id: row.id,
        title: row.title,
        description: row.description.unwrap_or_default(),
        rating: row.rating.unwrap_or_default(),
        image: row.image.unwrap_or_default(),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

impl PostgresStore {
    /// Connect to Postgres and run embedded migrations before serving.
    ///
    /// # Errors
    /// - Connection, pool setup, or migration failures.
    pub async fn connect(pg: &PostgresConfig) -> StoreResult<Self> {
        // `max_connections` caps concurrent DB work; `acquire_timeout`
        // bounds how long a request waits for a pooled connection.
        let connect_options = PgConnectOptions::from_str(&pg.url)?;
        let pool = PgPoolOptions::new()
            .max_connections(pg.max_connections)
            .acquire_timeout(Duration::from_millis(pg.acquire_timeout_ms))
            .connect_with(connect_options)
            .await?;

        // Migrations run before serving requests. If they fail, startup
        // fails rather than serving against an unknown schema.
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    async fn refresh_counts(&self) -> StoreResult<()> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cakes")
            .fetch_one(&self.pool)
            .await?;
        metrics::gauge!("cakestore_cakes_total").set(total as f64);
        Ok(())
    }
}

#[async_trait]
impl CakeStore for PostgresStore {
    async fn list_cakes(&self) -> StoreResult<Vec<CakeSummary>> {
        let rows = sqlx::query_as::<_, DbCakeSummary>(
            "SELECT id, title, rating, image FROM cakes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| CakeSummary {
                id: row.id,
                title: row.title,
                rating: row.rating.unwrap_or_default(),
                image: row.image.unwrap_or_default(),
            })
            .collect())
    }

    async fn get_cake(&self, id: i64) -> StoreResult<Cake> {
        let row = sqlx::query_as::<_, DbCake>(
            "SELECT id, title, description, rating, image, created_at, updated_at \
             FROM cakes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(cake_from_db)
            .ok_or_else(|| StoreError::NotFound(format!("cake {id}")))
    }

    async fn create_cake(&self, draft: CakeDraft) -> StoreResult<Cake> {
        // RETURNING hands back the generated id and both timestamps in the
        // same statement, so created_at and updated_at share one NOW().
        let row = sqlx::query_as::<_, DbCake>(
            r#"INSERT INTO cakes (title, description, rating, image, created_at, updated_at)
               VALUES ($1, $2, $3, $4, NOW(), NOW())
               RETURNING id, title, description, rating, image, created_at, updated_at"#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.rating)
        .bind(&draft.image)
        .fetch_one(&self.pool)
        .await?;
        metrics::counter!("cakestore_cake_writes_total", "op" => "created").increment(1);
        self.refresh_counts().await?;
        Ok(cake_from_db(row))
    }

    async fn update_cake(&self, id: i64, draft: CakeDraft) -> StoreResult<Cake> {
        // RETURNING doubles as the affected-row check: no row back means the
        // id does not exist.
        let row = sqlx::query_as::<_, DbCake>(
            r#"UPDATE cakes
               SET title = $1, description = $2, rating = $3, image = $4, updated_at = NOW()
               WHERE id = $5
               RETURNING id, title, description, rating, image, created_at, updated_at"#,
        )
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(draft.rating)
        .bind(&draft.image)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        let row = row.ok_or_else(|| StoreError::NotFound(format!("cake {id}")))?;
        metrics::counter!("cakestore_cake_writes_total", "op" => "updated").increment(1);
        Ok(cake_from_db(row))
    }

    async fn delete_cake(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM cakes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("cake {id}")));
        }
        metrics::counter!("cakestore_cake_writes_total", "op" => "deleted").increment(1);
        self.refresh_counts().await?;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
