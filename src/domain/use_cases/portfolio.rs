use std::sync::Arc;

use crate::{
    entities::{
        dashboard::DashboardStats,
        project::{ProjectCard, ProjectRecord},
        record_id::RecordId,
        site_content::{SiteContent, SITE_CONTENT_ID},
        skill::SkillRecord,
    },
    errors::StoreError,
    repositories::{data_store::DataStore, repository::Repository},
};

/// Read-only views: the public portfolio pages and the admin dashboard.
#[derive(Clone)]
pub struct PortfolioReader {
    projects: Repository<ProjectRecord>,
    skills: Repository<SkillRecord>,
    content: Repository<SiteContent>,
}

impl PortfolioReader {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        PortfolioReader {
            projects: Repository::new(store.clone()),
            skills: Repository::new(store.clone()),
            content: Repository::new(store),
        }
    }

    /// Projects newest first, with the tech list split into tags
    pub async fn projects(&self) -> Result<Vec<ProjectCard>, StoreError> {
        Ok(self
            .projects
            .list()
            .await?
            .into_iter()
            .map(ProjectCard::from)
            .collect())
    }

    /// Project count and newest `created_at`, independent of any editor
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, StoreError> {
        Ok(DashboardStats::from_projects(&self.projects.list().await?))
    }

    pub async fn skills(&self) -> Result<Vec<SkillRecord>, StoreError> {
        self.skills.list().await
    }

    /// Site content, or blank content before the admin first saves it
    pub async fn content(&self) -> Result<SiteContent, StoreError> {
        match self.content.get_by_id(&RecordId::from(SITE_CONTENT_ID)).await {
            Ok(content) => Ok(content),
            Err(e) if e.is_not_found() => Ok(SiteContent::default()),
            Err(e) => Err(e),
        }
    }
}
