use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::{
    entities::{
        record_id::RecordId,
        site_content::{SiteContent, SiteContentForm, SITE_CONTENT_ID},
        view::{ContentView, Notification},
    },
    repositories::{data_store::DataStore, repository::Repository},
};

#[derive(Debug, Clone, Serialize)]
pub struct ContentSnapshot {
    pub notification: Option<Notification>,
    pub view: ContentView,
    pub form: SiteContentForm,
}

/// Single-row, upsert-only management of the site content.
pub struct SiteContentManager {
    pub repo: Repository<SiteContent>,
    view: ContentView,
}

impl SiteContentManager {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        SiteContentManager {
            repo: Repository::new(store),
            view: ContentView::Empty,
        }
    }

    pub fn view(&self) -> &ContentView {
        &self.view
    }

    /// Form fields as last loaded or saved; blank when there is no row yet.
    pub fn form(&self) -> SiteContentForm {
        self.view
            .content()
            .map(SiteContentForm::from)
            .unwrap_or_default()
    }

    pub fn snapshot(&self, notification: Option<Notification>) -> ContentSnapshot {
        ContentSnapshot {
            notification,
            view: self.view.clone(),
            form: self.form(),
        }
    }

    /// Fetches the fixed row. A missing row is a normal empty state.
    pub async fn load(&mut self) -> &ContentView {
        self.view = match self.repo.get_by_id(&RecordId::from(SITE_CONTENT_ID)).await {
            Ok(content) => ContentView::Loaded(content),
            Err(e) if e.is_not_found() => ContentView::Empty,
            Err(e) => {
                error!("Error loading content: {}", e);
                ContentView::Failed(format!("Failed to load profile content: {}", e.message))
            }
        };
        &self.view
    }

    /// Upserts every field under the fixed id; last writer wins.
    pub async fn save(&mut self, form: SiteContentForm) -> Notification {
        let record = form.into_record();

        match self.repo.upsert(&record).await {
            Ok(()) => {
                info!("Site content saved");
                self.view = ContentView::Loaded(record);
                Notification::success("Profile content updated!")
            }
            Err(e) => {
                error!("Error saving content: {}", e);
                Notification::error(format!("Failed to save content: {}", e.message))
            }
        }
    }
}
