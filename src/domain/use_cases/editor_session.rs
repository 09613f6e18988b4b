use serde::Serialize;

use crate::entities::record_id::RecordId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum EditorState {
    /// The next submit creates a new record.
    #[default]
    Idle,
    /// The next submit updates this record.
    Editing(RecordId),
}

/// Which record, if any, the editor is currently bound to.
///
/// Owned by a single editor instance; two editors never share one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditorSession {
    state: EditorState,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        match &self.state {
            EditorState::Editing(id) => Some(id),
            EditorState::Idle => None,
        }
    }

    /// Binds the session to `id`, replacing any earlier target.
    pub fn begin(&mut self, id: RecordId) {
        self.state = EditorState::Editing(id);
    }

    pub fn clear(&mut self) {
        self.state = EditorState::Idle;
    }
}
