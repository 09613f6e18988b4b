use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    entities::{
        project::ProjectRecord,
        record_id::RecordId,
        site_content::SiteContent,
        skill::SkillRecord,
    },
    errors::StoreError,
    repositories::data_store::{DataStore, OrderBy},
};

/// A record kind stored in its own remote collection.
pub trait Entity: DeserializeOwned + Send + Sync + 'static {
    /// Collection (table) name on the backend
    const COLLECTION: &'static str;

    /// Order used whenever the collection is listed
    const ORDER: OrderBy;
}

impl Entity for ProjectRecord {
    const COLLECTION: &'static str = "projects";
    const ORDER: OrderBy = OrderBy::desc("created_at");
}

impl Entity for SkillRecord {
    const COLLECTION: &'static str = "skills";
    const ORDER: OrderBy = OrderBy::asc("id");
}

impl Entity for SiteContent {
    const COLLECTION: &'static str = "site_content";
    const ORDER: OrderBy = OrderBy::asc("id");
}

/// Typed operation set for one entity kind over a shared [`DataStore`].
pub struct Repository<E: Entity> {
    store: Arc<dyn DataStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Repository::new(self.store.clone())
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Repository { store, _entity: PhantomData }
    }

    pub async fn list(&self) -> Result<Vec<E>, StoreError> {
        self.store
            .list(E::COLLECTION, E::ORDER)
            .await?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(StoreError::from))
            .collect()
    }

    pub async fn get_by_id(&self, id: &RecordId) -> Result<E, StoreError> {
        let row = self.store.get_by_id(E::COLLECTION, id.as_str()).await?;
        Ok(serde_json::from_value(row)?)
    }

    pub async fn insert<D: Serialize>(&self, draft: &D) -> Result<E, StoreError> {
        let row = self.store.insert(E::COLLECTION, serde_json::to_value(draft)?).await?;
        Ok(serde_json::from_value(row)?)
    }

    pub async fn update_by_id<D: Serialize>(&self, id: &RecordId, patch: &D) -> Result<E, StoreError> {
        let row = self
            .store
            .update_by_id(E::COLLECTION, id.as_str(), serde_json::to_value(patch)?)
            .await?;
        Ok(serde_json::from_value(row)?)
    }

    pub async fn delete_by_id(&self, id: &RecordId) -> Result<(), StoreError> {
        self.store.delete_by_id(E::COLLECTION, id.as_str()).await
    }

    pub async fn upsert<D: Serialize>(&self, record: &D) -> Result<(), StoreError> {
        self.store.upsert(E::COLLECTION, serde_json::to_value(record)?).await
    }
}
