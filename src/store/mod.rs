use crate::model::{Cake, CakeDraft, CakeSummary};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod postgres;


#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Unexpected(err.into())
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Unexpected(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operations for the cakes table.
///
/// Implementations issue one statement (or one in-memory mutation) per
/// operation. Missing rows surface as [`StoreError::NotFound`] so the HTTP
/// layer can map them to 404 for get, update, and delete alike.
#[async_trait]
pub trait CakeStore: Send + Sync {
    async fn list_cakes(&self) -> StoreResult<Vec<CakeSummary>>;
    async fn get_cake(&self, id: i64) -> StoreResult<Cake>;
    async fn create_cake(&self, draft: CakeDraft) -> StoreResult<Cake>;
    async fn update_cake(&self, id: i64, draft: CakeDraft) -> StoreResult<Cake>;
    async fn delete_cake(&self, id: i64) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
