use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::project::ProjectRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub last_updated: Option<DateTime<Utc>>,
}

impl DashboardStats {
    pub fn from_projects(projects: &[ProjectRecord]) -> Self {
        DashboardStats {
            total_projects: projects.len(),
            last_updated: projects.iter().map(|p| p.created_at).max(),
        }
    }

    /// Human label for the newest project, relative to `now`.
    pub fn last_updated_label(&self, now: DateTime<Utc>) -> Option<String> {
        self.last_updated.map(|at| relative_day_label(at, now))
    }
}

fn relative_day_label(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = now.signed_duration_since(at).num_days();

    match days {
        i64::MIN..=0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        _ => at.format("%Y-%m-%d").to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub total_projects: usize,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_updated_label: Option<String>,
}

impl DashboardResponse {
    pub fn new(stats: &DashboardStats, now: DateTime<Utc>) -> Self {
        Self {
            total_projects: stats.total_projects,
            last_updated: stats.last_updated,
            last_updated_label: stats.last_updated_label(now),
        }
    }
}
