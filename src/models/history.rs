use super::record::SessionRecord;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Derived, read-only view of the store: task name mapped to the ordered
/// sequence of its sessions (order = store order = chronological by append).
/// Rebuilt by scanning the store, never persisted.
pub struct TaskHistory {
    order: Vec<String>,
    by_task: HashMap<String, Vec<SessionRecord>>,
}

/// Per-task roll-up backing the recent-task suggestions.
#[derive(Debug, Clone)]
pub struct TaskActivity {
    pub task_name: String,
    pub total_seconds: u64,
    pub last_start: NaiveDateTime,
    pub last_comment: String,
}

impl TaskHistory {
    pub fn build(records: &[SessionRecord]) -> Self {
        let mut order = Vec::new();
        let mut by_task: HashMap<String, Vec<SessionRecord>> = HashMap::new();

        for rec in records {
            let sessions = by_task.entry(rec.task_name.clone()).or_default();
            if sessions.is_empty() {
                order.push(rec.task_name.clone());
            }
            sessions.push(rec.clone());
        }

        Self { order, by_task }
    }

    /// Task names in first-appearance order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Sessions of one task, in store order. Empty for unknown tasks.
    pub fn sessions(&self, task: &str) -> &[SessionRecord] {
        self.by_task.get(task).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// One `TaskActivity` per task, in first-appearance order.
    /// `last_start` is the maximum session start instant, `last_comment`
    /// the comment of the session appended last.
    pub fn activity(&self) -> Vec<TaskActivity> {
        self.order
            .iter()
            .map(|task| {
                let sessions = &self.by_task[task];
                TaskActivity {
                    task_name: task.clone(),
                    total_seconds: sessions.iter().map(|s| s.duration_seconds).sum(),
                    last_start: sessions
                        .iter()
                        .map(|s| s.start_instant())
                        .max()
                        .unwrap_or_default(),
                    last_comment: sessions
                        .last()
                        .map(|s| s.comment.clone())
                        .unwrap_or_default(),
                }
            })
            .collect()
    }
}
