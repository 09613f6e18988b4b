use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use handlers::{component::Component, session::EditorSessions};
use repositories::data_store::DataStore;
use use_cases::{
    portfolio::PortfolioReader,
    site_content::SiteContentManager,
    skills::SkillsManager,
};

/// Shared state of the admin service.
///
/// Project editors are kept per admin session. Skills and site content have
/// no per-session state and are shared.
pub struct AppState {
    pub project_editors: EditorSessions,
    pub skills_manager: Component<SkillsManager>,
    pub content_manager: Component<SiteContentManager>,
    pub portfolio: PortfolioReader,
}

impl AppState {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        AppState {
            project_editors: EditorSessions::new(store.clone()),
            skills_manager: Component::new("skill", SkillsManager::new(store.clone())),
            content_manager: Component::new("site content", SiteContentManager::new(store.clone())),
            portfolio: PortfolioReader::new(store),
        }
    }
}
