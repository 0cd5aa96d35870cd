use super::SessionStore;
use crate::errors::AppResult;
use crate::models::history::{TaskActivity, TaskHistory};

impl SessionStore {
    /// Grouped task -> sessions view, rebuilt from a full scan.
    pub fn task_history(&self) -> AppResult<TaskHistory> {
        Ok(TaskHistory::build(&self.load_all()?))
    }

    /// Up to `n` tasks ordered by their most recent session start,
    /// descending; ties broken by task name ascending. Stable for repeated
    /// calls against an unchanged store.
    pub fn recent_tasks(&self, n: usize) -> AppResult<Vec<TaskActivity>> {
        let mut activity = self.task_history()?.activity();

        activity.sort_by(|a, b| {
            b.last_start
                .cmp(&a.last_start)
                .then_with(|| a.task_name.cmp(&b.task_name))
        });
        activity.truncate(n);

        Ok(activity)
    }
}
