use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::{
    entities::{
        record_id::RecordId,
        skill::{SkillForm, SkillRecord},
        view::{Notification, TableView},
    },
    repositories::{data_store::DataStore, repository::Repository},
};

#[derive(Debug, Clone, Serialize)]
pub struct SkillsSnapshot {
    pub notification: Option<Notification>,
    pub table: TableView<SkillRecord>,
}

/// Append/delete management of skills, listed in insertion order.
pub struct SkillsManager {
    pub repo: Repository<SkillRecord>,
    table: TableView<SkillRecord>,
}

impl SkillsManager {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        SkillsManager {
            repo: Repository::new(store),
            table: TableView::Empty,
        }
    }

    pub fn table(&self) -> &TableView<SkillRecord> {
        &self.table
    }

    pub fn snapshot(&self, notification: Option<Notification>) -> SkillsSnapshot {
        SkillsSnapshot {
            notification,
            table: self.table.clone(),
        }
    }

    pub async fn list(&mut self) -> &TableView<SkillRecord> {
        self.table = match self.repo.list().await {
            Ok(skills) => TableView::from_rows(skills),
            Err(e) => {
                error!("Error loading skills: {}", e);
                TableView::Failed(format!("Error loading skills: {}", e.message))
            }
        };
        &self.table
    }

    pub async fn add(&mut self, form: SkillForm) -> Notification {
        match self.repo.insert(&form).await {
            Ok(skill) => {
                info!(id = %skill.id, name = %skill.name, "Skill added");
                self.list().await;
                Notification::success("Skill added!")
            }
            Err(e) => {
                error!("Error saving skill: {}", e);
                Notification::error(format!("Failed to save skill: {}", e.message))
            }
        }
    }

    pub async fn delete(&mut self, id: &RecordId) -> Notification {
        match self.repo.delete_by_id(id).await {
            Ok(()) => {
                info!(%id, "Skill deleted");
                self.list().await;
                Notification::success("Skill deleted")
            }
            Err(e) => {
                error!("Error deleting skill {}: {}", id, e);
                Notification::error(format!("Failed to delete skill: {}", e.message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::StoreError, repositories::data_store::MockDataStore};
    use serde_json::json;

    #[tokio::test]
    async fn add_inserts_once_then_refreshes() {
        let mut store = MockDataStore::new();
        store
            .expect_insert()
            .withf(|collection, record| collection == "skills" && record["icon_class"] == "fab fa-rust")
            .times(1)
            .returning(|_, _| Ok(json!({"id": 3, "name": "Rust", "icon_class": "fab fa-rust"})));
        store
            .expect_list()
            .times(1)
            .returning(|_, _| Ok(vec![json!({"id": 3, "name": "Rust", "icon_class": "fab fa-rust"})]));

        let mut manager = SkillsManager::new(Arc::new(store));
        let note = manager
            .add(SkillForm {
                name: "Rust".into(),
                icon_class: "fab fa-rust".into(),
                description: None,
            })
            .await;

        assert!(note.is_success());
        assert_eq!(manager.table().rows().len(), 1);
    }

    #[tokio::test]
    async fn failed_add_keeps_table() {
        let mut store = MockDataStore::new();
        store
            .expect_insert()
            .returning(|_, _| Err(StoreError::transport("23502", "null value in column \"name\"")));
        store.expect_list().never();

        let mut manager = SkillsManager::new(Arc::new(store));
        let note = manager.add(SkillForm::default()).await;

        assert!(note.is_error());
        assert_eq!(manager.table(), &TableView::Empty);
    }

    #[tokio::test]
    async fn empty_collection_is_an_empty_state() {
        let mut store = MockDataStore::new();
        store.expect_list().returning(|_, _| Ok(vec![]));

        let mut manager = SkillsManager::new(Arc::new(store));

        assert_eq!(manager.list().await, &TableView::Empty);
    }
}
