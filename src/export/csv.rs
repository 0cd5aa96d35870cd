use crate::errors::AppResult;
use crate::models::record::SessionRecord;
use csv::Writer;
use std::path::Path;

/// Write the records as CSV with a header row (the store itself is
/// headerless; exports are meant for spreadsheets).
pub fn write_csv(path: &Path, records: &[SessionRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "start_date",
        "start_time",
        "end_date",
        "end_time",
        "task_name",
        "comment",
        "duration_seconds",
    ])?;

    for rec in records {
        wtr.write_record(rec.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}
