use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::json::write_json;
use crate::export::notify_export_success;
use crate::store::SessionStore;
use crate::ui::messages::warning;
use crate::utils::date::period_bounds;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export session records.
    ///
    /// - `format`: csv | json
    /// - `file`: path of the output file
    /// - `period`: `None` or a filter expression:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `start:end` ranges of the above
    pub fn export(
        store: &SessionStore,
        format: ExportFormat,
        file: &str,
        period: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match period {
            None => None,
            Some(p) => Some(period_bounds(p)?),
        };

        let mut records = store.load_all()?;
        if let Some((from, to)) = bounds {
            records.retain(|r| r.start_date >= from && r.start_date <= to);
        }

        if records.is_empty() {
            warning("No sessions found for selected period.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, &records)?,
            ExportFormat::Json => write_json(path, &records)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
