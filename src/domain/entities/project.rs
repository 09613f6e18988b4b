use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::record_id::{null_as_empty, RecordId};

// ───── Stored Record ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    /// Comma-separated technology list, stored as typed by the admin.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tech: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    pub created_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Splits the `tech` column into trimmed, non-empty tags.
    pub fn tech_tags(&self) -> Vec<String> {
        self.tech
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

// ───── Form / Draft ─────────────────────────────────────────────────

/// Editable project fields. Doubles as the insert body and the update
/// patch; nothing here is validated, empty strings are written as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tech: String,
    #[serde(default)]
    pub link: String,
}

impl From<&ProjectRecord> for ProjectForm {
    fn from(record: &ProjectRecord) -> Self {
        ProjectForm {
            title: record.title.clone(),
            description: record.description.clone(),
            image: record.image.clone(),
            tech: record.tech.clone(),
            link: record.link.clone(),
        }
    }
}

// ───── Public Card ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tech_tags: Vec<String>,
    pub link: String,
}

impl From<ProjectRecord> for ProjectCard {
    fn from(record: ProjectRecord) -> Self {
        Self {
            tech_tags: record.tech_tags(),
            id: record.id,
            title: record.title,
            description: record.description,
            image: record.image,
            link: record.link,
        }
    }
}
