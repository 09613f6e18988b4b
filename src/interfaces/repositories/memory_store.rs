use std::{cmp::Ordering, collections::HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::{
    errors::StoreError,
    repositories::data_store::{DataStore, Direction, OrderBy},
};

#[derive(Default)]
struct Collection {
    rows: Vec<Map<String, Value>>,
    next_id: i64,
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, Collection>,
    last_created_at: Option<DateTime<Utc>>,
}

impl Inner {
    /// Hands out strictly increasing timestamps so newest-first ordering
    /// is total even when inserts land within the same clock tick.
    fn next_created_at(&mut self) -> String {
        let mut now = Utc::now();
        if let Some(last) = self.last_created_at {
            if now <= last {
                now = last + Duration::microseconds(1);
            }
        }
        self.last_created_at = Some(now);
        now.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

/// In-process [`DataStore`] with the same contract as the hosted backend.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held by a collection.
    pub fn row_count(&self, collection: &str) -> usize {
        self.inner
            .read()
            .collections
            .get(collection)
            .map_or(0, |c| c.rows.len())
    }
}

fn into_object(record: Value) -> Result<Map<String, Value>, StoreError> {
    match record {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::transport(
            "invalid_record",
            format!("Expected a JSON object, got {}", other),
        )),
    }
}

fn id_matches(row: &Map<String, Value>, id: &str) -> bool {
    match row.get("id") {
        Some(Value::Number(n)) => n.to_string() == id,
        Some(Value::String(s)) => s == id,
        _ => false,
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or_default(), y.as_f64().unwrap_or_default());
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

fn merge(row: &mut Map<String, Value>, patch: Map<String, Value>) {
    for (key, value) in patch {
        if key != "id" {
            row.insert(key, value);
        }
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn list(&self, collection: &str, order: OrderBy) -> Result<Vec<Value>, StoreError> {
        let inner = self.inner.read();
        let mut rows: Vec<Map<String, Value>> = inner
            .collections
            .get(collection)
            .map(|c| c.rows.clone())
            .unwrap_or_default();

        rows.sort_by(|a, b| {
            let ord = compare_values(a.get(order.column), b.get(order.column));
            match order.direction {
                Direction::Ascending => ord,
                Direction::Descending => ord.reverse(),
            }
        });

        Ok(rows.into_iter().map(Value::Object).collect())
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        self.inner
            .read()
            .collections
            .get(collection)
            .and_then(|c| c.rows.iter().find(|row| id_matches(row, id)))
            .map(|row| Value::Object(row.clone()))
            .ok_or_else(|| StoreError::not_found("not_found", format!("No {} row with id {}", collection, id)))
    }

    async fn insert(&self, collection: &str, record: Value) -> Result<Value, StoreError> {
        let mut row = into_object(record)?;
        let mut inner = self.inner.write();
        let created_at = inner.next_created_at();
        let table = inner.collections.entry(collection.to_string()).or_default();

        table.next_id += 1;
        row.insert("id".into(), Value::from(table.next_id));
        row.entry("created_at").or_insert(Value::String(created_at));
        table.rows.push(row.clone());

        Ok(Value::Object(row))
    }

    async fn update_by_id(&self, collection: &str, id: &str, patch: Value) -> Result<Value, StoreError> {
        let patch = into_object(patch)?;
        let mut inner = self.inner.write();
        let row = inner
            .collections
            .get_mut(collection)
            .and_then(|c| c.rows.iter_mut().find(|row| id_matches(row, id)))
            .ok_or_else(|| StoreError::not_found("not_found", format!("No {} row with id {}", collection, id)))?;

        merge(row, patch);
        Ok(Value::Object(row.clone()))
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        if let Some(table) = self.inner.write().collections.get_mut(collection) {
            table.rows.retain(|row| !id_matches(row, id));
        }
        Ok(())
    }

    async fn upsert(&self, collection: &str, record: Value) -> Result<(), StoreError> {
        let record = into_object(record)?;
        let id = record
            .get("id")
            .and_then(id_text)
            .ok_or_else(|| StoreError::transport("missing_id", "Upsert requires the record id"))?;

        let mut inner = self.inner.write();
        let created_at = inner.next_created_at();
        let table = inner.collections.entry(collection.to_string()).or_default();

        match table.rows.iter().position(|row| id_matches(row, &id)) {
            Some(index) => merge(&mut table.rows[index], record),
            None => {
                if let Ok(n) = id.parse::<i64>() {
                    table.next_id = table.next_id.max(n);
                }
                let mut row = record;
                row.entry("created_at").or_insert(Value::String(created_at));
                table.rows.push(row);
            }
        }
        Ok(())
    }
}
