use crate::errors::{AppError, AppResult};
use crate::models::record::SessionRecord;
use std::path::Path;

/// Write the records as pretty-printed JSON.
pub fn write_json(path: &Path, records: &[SessionRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
