use serde::Serialize;

use crate::entities::site_content::SiteContent;

// ───── Notifications ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

/// Non-blocking, user-facing message produced by every admin action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }

    pub fn is_success(&self) -> bool {
        self.level == NotificationLevel::Success
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

// ───── Rendered Views ───────────────────────────────────────────────

/// What a list section currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum TableView<T> {
    Rows(Vec<T>),
    Empty,
    Failed(String),
}

impl<T> Default for TableView<T> {
    fn default() -> Self {
        TableView::Empty
    }
}

impl<T> TableView<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            TableView::Empty
        } else {
            TableView::Rows(rows)
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TableView::Failed(_))
    }
}

/// What the site content form was filled from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ContentView {
    Loaded(SiteContent),
    #[default]
    Empty,
    Failed(String),
}

impl ContentView {
    pub fn content(&self) -> Option<&SiteContent> {
        match self {
            ContentView::Loaded(content) => Some(content),
            _ => None,
        }
    }
}
