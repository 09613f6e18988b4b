use serde::{Deserialize, Serialize};

use crate::entities::record_id::{null_as_empty, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Icon font class, e.g. `fab fa-rust`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon_class: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of a skill insert. Skills are never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon_class: String,
    #[serde(default)]
    pub description: Option<String>,
}
