use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use crate::{
    entities::{
        project::{ProjectForm, ProjectRecord},
        record_id::RecordId,
        view::{Notification, TableView},
    },
    repositories::{data_store::DataStore, repository::Repository},
    use_cases::editor_session::{EditorSession, EditorState},
};

/// What the admin projects section shows after an action.
#[derive(Debug, Clone, Serialize)]
pub struct EditorSnapshot {
    pub notification: Option<Notification>,
    pub session: EditorState,
    pub form: ProjectForm,
    pub table: TableView<ProjectRecord>,
}

/// Create / edit / delete flow for project records.
pub struct ProjectEditor {
    pub repo: Repository<ProjectRecord>,
    session: EditorSession,
    form: ProjectForm,
    table: TableView<ProjectRecord>,
}

impl ProjectEditor {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        ProjectEditor {
            repo: Repository::new(store),
            session: EditorSession::new(),
            form: ProjectForm::default(),
            table: TableView::Empty,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn table(&self) -> &TableView<ProjectRecord> {
        &self.table
    }


    pub fn snapshot(&self, notification: Option<Notification>) -> EditorSnapshot {
        EditorSnapshot {
            notification,
            session: self.session.state().clone(),
            form: self.form.clone(),
            table: self.table.clone(),
        }
    }

    /// Reloads every project, newest first, into the table view
    pub async fn list(&mut self) -> &TableView<ProjectRecord> {
        self.table = match self.repo.list().await {
            Ok(projects) => TableView::from_rows(projects),
            Err(e) => {
                error!("Error loading projects: {}", e);
                TableView::Failed(format!("Failed to load projects: {}", e.message))
            }
        };
        &self.table
    }

    /// Loads one project into the form and binds the session to it
    pub async fn begin_edit(&mut self, id: &RecordId) -> Notification {
        match self.repo.get_by_id(id).await {
            Ok(project) => {
                self.form = ProjectForm::from(&project);
                self.session.begin(project.id.clone());
                Notification::info(format!("Editing project '{}'", project.title))
            }
            Err(e) => {
                error!("Error loading project {}: {}", id, e);
                Notification::error(format!("Failed to load project data: {}", e.message))
            }
        }
    }

    /// Clears the form; the next submit inserts
    pub fn begin_create(&mut self) {
        self.form = ProjectForm::default();
        self.session.clear();
    }

    pub fn cancel(&mut self) {
        self.begin_create();
    }

    /// Writes the form: update when editing, insert otherwise
    pub async fn submit(&mut self, form: ProjectForm) -> Notification {
        self.form = form;

        let result = match self.session.editing_id() {
            Some(id) => self.repo.update_by_id(id, &self.form).await.map(|p| (p, true)),
            None => self.repo.insert(&self.form).await.map(|p| (p, false)),
        };

        match result {
            Ok((project, updated)) => {
                info!(id = %project.id, updated, "Project saved");
                self.list().await;
                self.begin_create();
                Notification::success(if updated { "Project updated!" } else { "Project added!" })
            }
            Err(e) => {
                error!("Error saving project: {}", e);
                Notification::error(format!("Failed to save project: {}", e.message))
            }
        }
    }

    /// Deletes a project the caller has already confirmed
    pub async fn delete(&mut self, id: &RecordId) -> Notification {
        match self.repo.delete_by_id(id).await {
            Ok(()) => {
                info!(%id, "Project deleted");
                self.list().await;
                self.begin_create();
                Notification::success("Project deleted successfully!")
            }
            Err(e) => {
                error!("Error deleting project {}: {}", id, e);
                Notification::error(format!("Failed to delete project: {}", e.message))
            }
        }
    }
}
