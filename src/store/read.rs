use super::SessionStore;
use crate::errors::AppResult;
use crate::models::record::{self, SessionRecord};
use crate::ui::messages::warning;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::ErrorKind;

/// Result of a full store scan.
pub struct LoadOutcome {
    pub records: Vec<SessionRecord>,
    /// Rows that failed field-count or value parsing. Never fatal.
    pub skipped: usize,
}

impl LoadOutcome {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped: 0,
        }
    }
}

impl SessionStore {
    /// Scan the whole store in file order.
    ///
    /// A missing file is an empty history, not an error. Rows that do not
    /// parse are skipped and counted (lenient-read policy: old 5-field and
    /// canonical 7-field rows both load, everything else is ignored).
    pub fn load(&self) -> AppResult<LoadOutcome> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::empty()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for row in reader.records() {
            let row = row?;
            match record::parse_row(&row) {
                Some(rec) => records.push(rec),
                None => skipped += 1,
            }
        }

        Ok(LoadOutcome { records, skipped })
    }

    /// Records only, for callers that do not care about diagnostics.
    pub fn load_all(&self) -> AppResult<Vec<SessionRecord>> {
        Ok(self.load()?.records)
    }

    /// Like `load`, but degrades to an empty history when the store cannot
    /// be read, after warning the user. Query commands use this so a broken
    /// store never blocks the UI.
    pub fn load_or_empty(&self) -> LoadOutcome {
        match self.load() {
            Ok(outcome) => outcome,
            Err(e) => {
                warning(format!(
                    "Could not read store '{}': {}",
                    self.path.display(),
                    e
                ));
                LoadOutcome::empty()
            }
        }
    }
}
