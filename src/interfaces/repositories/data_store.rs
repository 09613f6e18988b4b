use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_postgrest(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub direction: Direction,
}

impl OrderBy {
    pub const fn asc(column: &'static str) -> Self {
        OrderBy { column, direction: Direction::Ascending }
    }

    pub const fn desc(column: &'static str) -> Self {
        OrderBy { column, direction: Direction::Descending }
    }
}

/// Remote, collection-oriented record storage.
///
/// Records travel as JSON objects; typing happens one layer up in
/// [`Repository`](super::repository::Repository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Lists every record of a collection in the given order
    async fn list(&self, collection: &str, order: OrderBy) -> Result<Vec<Value>, StoreError>;

    /// Fetches one record, `NotFound` when no row carries the id
    async fn get_by_id(&self, collection: &str, id: &str) -> Result<Value, StoreError>;

    /// Inserts a record without id and returns it as stored
    async fn insert(&self, collection: &str, record: Value) -> Result<Value, StoreError>;

    /// Applies a partial record to the row with the given id
    async fn update_by_id(&self, collection: &str, id: &str, patch: Value) -> Result<Value, StoreError>;

    /// Deletes by id. A missing id is not an error.
    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// Inserts or replaces the row keyed by the record's own id
    async fn upsert(&self, collection: &str, record: Value) -> Result<(), StoreError>;
}
