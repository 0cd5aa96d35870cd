//! The single live timing session: an in-memory state machine with no
//! persisted identity until `finalize` hands a record to the store.

use crate::errors::{AppError, AppResult};
use crate::models::record::SessionRecord;
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Paused,
}

/// State machine for one timing session.
///
/// Transitions: `Idle --start--> Running --pause--> Paused --resume-->
/// Running`, and `Running|Paused --finalize+clear--> Idle`. The staged task
/// name and the comment stay editable in every state; only the values at
/// stop time are persisted.
///
/// On resume the start instant is re-based to `now - accumulated`, so the
/// elapsed projection stays continuous across pause boundaries and the
/// finalized record satisfies `duration == end - start`.
///
/// Stopping is two-phase: `finalize` builds the record without
/// mutating, the caller appends it to the store and only then calls
/// `clear`. A failed append thus leaves the session Running/Paused and no
/// recorded time is lost.
#[derive(Debug, Default)]
pub struct TimerSession {
    state: SessionState,
    task_name: String,
    comment: String,
    started_at: Option<NaiveDateTime>,
    accumulated_seconds: u64,
}

impl TimerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_active(&self) -> bool {
        self.state != SessionState::Idle
    }

    /// Stage a task name. Allowed in every state.
    pub fn select_task(&mut self, name: &str) {
        self.task_name = name.trim().to_string();
    }

    /// Update the session comment. Allowed in every state.
    pub fn set_comment(&mut self, text: &str) {
        self.comment = text.trim().to_string();
    }

    /// `Idle -> Running`. Requires a non-empty staged task name; a session
    /// that is already running or paused is rejected, not restarted.
    pub fn start(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if self.state != SessionState::Idle {
            return Err(AppError::InvalidOperation(
                "Timer is already running.".to_string(),
            ));
        }
        if self.task_name.is_empty() {
            return Err(AppError::InvalidOperation(
                "Please select or enter a task first.".to_string(),
            ));
        }

        self.started_at = Some(now);
        self.accumulated_seconds = 0;
        self.state = SessionState::Running;
        Ok(())
    }

    /// `Running -> Paused`. Captures the elapsed seconds so far.
    pub fn pause(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if self.state != SessionState::Running {
            return Err(AppError::InvalidOperation(
                "Timer is not running.".to_string(),
            ));
        }

        self.accumulated_seconds = self.elapsed_seconds(now);
        self.state = SessionState::Paused;
        Ok(())
    }

    /// `Paused -> Running`. Re-bases the start instant so the elapsed time
    /// continues from where `pause` left it.
    pub fn resume(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if self.state != SessionState::Paused {
            return Err(AppError::InvalidOperation(
                "Timer is not paused.".to_string(),
            ));
        }

        self.started_at = Some(now - Duration::seconds(self.accumulated_seconds as i64));
        self.state = SessionState::Running;
        Ok(())
    }

    /// Read-only elapsed projection, safe to recompute every refresh tick.
    pub fn elapsed_seconds(&self, now: NaiveDateTime) -> u64 {
        match (self.state, self.started_at) {
            (SessionState::Running, Some(started)) => {
                (now - started).num_seconds().max(0) as u64
            }
            (SessionState::Paused, _) => self.accumulated_seconds,
            _ => 0,
        }
    }

    /// Build the finalized record for the current session without touching
    /// the machine state. Duration policy: `accumulated_seconds` when
    /// Paused, `now - start_instant` when Running.
    pub fn finalize(&self, now: NaiveDateTime) -> AppResult<SessionRecord> {
        let Some(started) = self.started_at.filter(|_| self.is_active()) else {
            return Err(AppError::InvalidOperation("Timer not running.".to_string()));
        };

        Ok(SessionRecord::new(
            started,
            self.elapsed_seconds(now),
            self.task_name.clone(),
            self.comment.clone(),
        ))
    }

    /// Return to `Idle`, clearing the active task and comment. Called only
    /// after the finalized record has been appended successfully.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
