//! In-memory implementation of the cake store.
//!
//! # Purpose
//! Implements [`CakeStore`] entirely in memory for local development and
//! tests. Not durable: all state is lost on restart.
//!
//! # Concurrency
//! A single `tokio::sync::RwLock` guards both the id counter and the map so
//! id assignment and insertion stay atomic. Reads proceed concurrently;
//! mutations are serialized.
//!
//! # Ordering
//! Records live in a `BTreeMap` keyed by id, so list traversal yields ids in
//! ascending order without a sort. Ids are assigned monotonically and never
//! reused, even after deletes.
use super::{CakeStore, StoreError, StoreResult};
use crate::model::{Cake, CakeDraft, CakeSummary};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Inner {
    next_id: i64,
    cakes: BTreeMap<i64, Cake>,
}

pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                cakes: BTreeMap::new(),
            }),
        }
    }

    fn record_size(count: usize) {
        metrics::gauge!("cakestore_cakes_total").set(count as f64);
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CakeStore for InMemoryStore {
    async fn list_cakes(&self) -> StoreResult<Vec<CakeSummary>> {
        let inner = self.inner.read().await;
        Ok(inner
            .cakes
            .values()
            .map(|cake| CakeSummary {
                id: cake.id,
                title: cake.title.clone(),
                rating: cake.rating,
                image: cake.image.clone(),
            })
            .collect())
    }

    async fn get_cake(&self, id: i64) -> StoreResult<Cake> {
        let inner = self.inner.read().await;
        inner
            .cakes
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("cake {id}")))
    }

    async fn create_cake(&self, draft: CakeDraft) -> StoreResult<Cake> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        // Both timestamps come from the same instant so created == updated
        // at creation time.
        let now = Utc::now();
        let cake = Cake {
            id,
            title: draft.title,
            description: draft.description,
            rating: draft.rating,
            image: draft.image,
            created_at: now,
            updated_at: now,
        };
        inner.cakes.insert(id, cake.clone());
        metrics::counter!("cakestore_cake_writes_total", "op" => "created").increment(1);
        Self::record_size(inner.cakes.len());
        Ok(cake)
    }

    async fn update_cake(&self, id: i64, draft: CakeDraft) -> StoreResult<Cake> {
        let mut inner = self.inner.write().await;
        let cake = inner
            .cakes
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("cake {id}")))?;
        cake.title = draft.title;
        cake.description = draft.description;
        cake.rating = draft.rating;
        cake.image = draft.image;
        cake.updated_at = Utc::now();
        let updated = cake.clone();
        metrics::counter!("cakestore_cake_writes_total", "op" => "updated").increment(1);
        Ok(updated)
    }

    async fn delete_cake(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.cakes.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("cake {id}")));
        }
        metrics::counter!("cakestore_cake_writes_total", "op" => "deleted").increment(1);
        Self::record_size(inner.cakes.len());
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, rating: f64) -> CakeDraft {
        CakeDraft {
            title: title.to_string(),
            description: format!("{title} description"),
            rating,
            image: format!("http://example/{title}.png"),
        }
    }

    #[tokio::test]
    async fn create_assigns_monotonic_ids_and_matching_timestamps() {
        let store = InMemoryStore::new();
        let first = store.create_cake(draft("plain", 3.0)).await.expect("create");
        let second = store
            .create_cake(draft("marble", 4.0))
            .await
            .expect("create");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(first.title, "plain");
        assert_eq!(first.rating, 3.0);
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let store = InMemoryStore::new();
        let created = store.create_cake(draft("plain", 3.0)).await.expect("create");
        let fetched = store.get_cake(created.id).await.expect("get");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_returns_not_found() {
        let store = InMemoryStore::new();
        let err = store.get_cake(45).await.expect_err("missing");
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_projects_summaries_in_id_order() {
        let store = InMemoryStore::new();
        assert!(store.list_cakes().await.expect("empty list").is_empty());

        let mut created = Vec::new();
        for title in ["cheesecake", "brownie", "eclair"] {
            created.push(store.create_cake(draft(title, 4.5)).await.expect("create"));
        }

        let summaries = store.list_cakes().await.expect("list");
        assert_eq!(summaries.len(), created.len());
        for (summary, cake) in summaries.iter().zip(&created) {
            assert_eq!(summary.id, cake.id);
            assert_eq!(summary.title, cake.title);
            assert_eq!(summary.rating, cake.rating);
            assert_eq!(summary.image, cake.image);
        }
        assert!(summaries.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_refreshes_updated_at() {
        let store = InMemoryStore::new();
        let created = store.create_cake(draft("plain", 3.0)).await.expect("create");

        let updated = store
            .update_cake(created.id, draft("frosted", 4.9))
            .await
            .expect("update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "frosted");
        assert_eq!(updated.rating, 4.9);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_missing_returns_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .update_cake(45, draft("ghost", 1.0))
            .await
            .expect_err("missing");
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_record_and_reports_missing_ids() {
        let store = InMemoryStore::new();
        let created = store.create_cake(draft("plain", 3.0)).await.expect("create");

        store.delete_cake(created.id).await.expect("delete");
        let err = store.get_cake(created.id).await.expect_err("deleted");
        assert!(matches!(err, StoreError::NotFound(_)));

        let err = store.delete_cake(created.id).await.expect_err("repeat");
        assert!(matches!(err, StoreError::NotFound(_)));

        // Ids are never reused after a delete.
        let next = store.create_cake(draft("marble", 4.0)).await.expect("create");
        assert!(next.id > created.id);
    }

    #[tokio::test]
    async fn backend_health_and_identity() {
        let store = InMemoryStore::new();
        store.health_check().await.expect("health");
        assert!(!store.is_durable());
        assert_eq!(store.backend_name(), "memory");
    }
}
