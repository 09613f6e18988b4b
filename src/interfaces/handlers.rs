use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;

pub mod component;
pub mod home;
pub mod portfolio;
pub mod projects;
pub mod session;
pub mod site_content;
pub mod skills;
pub mod system;

/// Query string of admin deletions; the UI sets `confirm=true` once the
/// user accepted the confirmation dialog.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

impl DeleteQuery {
    pub fn require_confirmation(&self) -> Result<(), AppError> {
        if self.confirm {
            Ok(())
        } else {
            warn!("Rejected unconfirmed delete");
            Err(AppError::BadRequest("Deletion must be confirmed with confirm=true".to_string()))
        }
    }
}
