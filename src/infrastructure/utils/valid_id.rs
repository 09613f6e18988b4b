use crate::{entities::record_id::RecordId, errors::AppError};

/// Validates a record id taken from a request path
pub fn valid_record_id(id: &str) -> Result<RecordId, AppError> {
    let id = id.trim();
    if id.is_empty() || id.contains(|c: char| c.is_whitespace() || c == ',' || c == '&') {
        return Err(AppError::BadRequest("Invalid record id".to_string()));
    }
    Ok(RecordId::from(id))
}
