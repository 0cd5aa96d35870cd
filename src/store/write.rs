use super::SessionStore;
use crate::errors::AppResult;
use crate::models::record::SessionRecord;
use csv::{ReaderBuilder, Writer, WriterBuilder};
use std::fs::{self, File, OpenOptions};

impl SessionStore {
    /// Append one finalized record as a single canonical CSV line.
    ///
    /// The write is a single line appended to the end of the file, so a
    /// failure cannot corrupt existing content. The parent directory is
    /// created on first use.
    pub fn append(&self, record: &SessionRecord) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut wtr = Writer::from_writer(file);
        wtr.write_record(record.to_row())?;
        wtr.flush()?;
        Ok(())
    }

    /// Rewrite every record whose task name equals `old` to `new`.
    ///
    /// All-or-nothing: the rewritten log goes to a sibling temp file which
    /// then replaces the store via `fs::rename`, so a crash mid-rewrite
    /// leaves the original untouched. Rows are rewritten field-for-field at
    /// their own schema width (7-field canonical, 5-field legacy); rows the
    /// reader does not recognize pass through unmodified; rename never
    /// drops data it cannot interpret.
    ///
    /// An empty `new` name is a no-op. Returns the number of rows touched.
    pub fn rename_task(&self, old: &str, new: &str) -> AppResult<usize> {
        if new.is_empty() || !self.path.exists() {
            return Ok(0);
        }

        // 1. Read every raw row, patching the task field where it matches.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(File::open(&self.path)?);

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut touched = 0usize;

        for row in reader.records() {
            let row = row?;
            let task_idx = match row.len() {
                7 => Some(4),
                5 => Some(2),
                _ => None,
            };

            let mut fields: Vec<String> = row.iter().map(str::to_string).collect();
            if let Some(idx) = task_idx
                && fields[idx] == old
            {
                fields[idx] = new.to_string();
                touched += 1;
            }
            rows.push(fields);
        }

        if touched == 0 {
            return Ok(0);
        }

        // 2. Write the full log to a temp file in the same directory, then
        //    atomically replace the original.
        let tmp = self.path.with_extension("tmp");
        {
            let mut wtr = WriterBuilder::new().flexible(true).from_path(&tmp)?;
            for row in &rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        fs::rename(&tmp, &self.path)?;

        Ok(touched)
    }
}
