use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque, server-assigned record identifier.
///
/// The backend hands ids out either as integers (identity columns) or as
/// strings (uuid columns). Both are kept as text so the rest of the crate
/// never has to care which one a collection uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId(id.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s),
        })
    }
}

/// Reads a nullable text column as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_integer_and_string_ids() {
        let int_id: RecordId = serde_json::from_value(json!(42)).unwrap();
        let text_id: RecordId = serde_json::from_value(json!("9f1c")).unwrap();

        assert_eq!(int_id.as_str(), "42");
        assert_eq!(text_id.as_str(), "9f1c");
    }

    #[test]
    fn serializes_as_text() {
        assert_eq!(serde_json::to_value(RecordId::from(7)).unwrap(), json!("7"));
    }
}
