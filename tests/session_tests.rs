use chrono::{NaiveDate, NaiveDateTime};
use tasktimer::core::session::{SessionState, TimerSession};
use tasktimer::errors::AppError;
use tasktimer::store::SessionStore;
use tempfile::tempdir;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

#[test]
fn start_requires_a_staged_task() {
    let mut session = TimerSession::new();

    let err = session.start(at(9, 0, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn reentrant_start_is_rejected_not_restarted() {
    let mut session = TimerSession::new();
    session.select_task("writing");
    session.start(at(9, 0, 0)).unwrap();

    let err = session.start(at(9, 0, 10)).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));

    // the original start instant is still in effect
    assert_eq!(session.elapsed_seconds(at(9, 0, 30)), 30);
}

#[test]
fn pause_resume_preserves_cumulative_elapsed_time() {
    let mut session = TimerSession::new();
    session.select_task("writing");

    // start, wait 5s, pause, wait 10s (no accumulation), resume, wait 3s
    session.start(at(9, 0, 0)).unwrap();
    session.pause(at(9, 0, 5)).unwrap();
    assert_eq!(session.elapsed_seconds(at(9, 0, 12)), 5);
    session.resume(at(9, 0, 15)).unwrap();

    let record = session.finalize(at(9, 0, 18)).unwrap();
    assert_eq!(record.duration_seconds, 8);

    // duration == end - start holds across the pause boundary
    assert_eq!(
        (record.end_date.and_time(record.end_time) - record.start_instant()).num_seconds(),
        8
    );
}

#[test]
fn multiple_pause_resume_cycles_accumulate() {
    let mut session = TimerSession::new();
    session.select_task("writing");

    session.start(at(10, 0, 0)).unwrap();
    session.pause(at(10, 0, 4)).unwrap();
    session.resume(at(10, 0, 30)).unwrap();
    session.pause(at(10, 0, 36)).unwrap();
    session.resume(at(10, 1, 0)).unwrap();

    assert_eq!(session.elapsed_seconds(at(10, 1, 2)), 12);
}

#[test]
fn stop_while_paused_uses_accumulated_seconds() {
    let mut session = TimerSession::new();
    session.select_task("writing");

    session.start(at(9, 0, 0)).unwrap();
    session.pause(at(9, 0, 5)).unwrap();

    // long after the pause, the duration is still the accumulated 5s
    let record = session.finalize(at(9, 30, 0)).unwrap();
    assert_eq!(record.duration_seconds, 5);
}

#[test]
fn finalize_on_idle_fails_with_invalid_operation() {
    let session = TimerSession::new();
    let err = session.finalize(at(9, 0, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidOperation(_)));
}

#[test]
fn pause_when_not_running_fails() {
    let mut session = TimerSession::new();
    session.select_task("writing");

    assert!(session.pause(at(9, 0, 0)).is_err());

    session.start(at(9, 0, 0)).unwrap();
    session.pause(at(9, 0, 5)).unwrap();
    // pausing a paused timer is also a misuse
    assert!(session.pause(at(9, 0, 6)).is_err());
}

#[test]
fn zero_elapsed_stop_still_produces_a_valid_record() {
    let mut session = TimerSession::new();
    session.select_task("writing");
    session.start(at(9, 0, 0)).unwrap();

    let record = session.finalize(at(9, 0, 0)).unwrap();
    assert_eq!(record.duration_seconds, 0);
    assert_eq!(record.task_name, "writing");
}

#[test]
fn task_and_comment_stay_editable_until_stop() {
    let mut session = TimerSession::new();
    session.select_task("writing");
    session.set_comment("first idea");
    session.start(at(9, 0, 0)).unwrap();

    // editing mid-session is allowed; only the values at stop persist
    session.set_comment("second idea");
    session.select_task("editing");

    let record = session.finalize(at(9, 0, 10)).unwrap();
    assert_eq!(record.task_name, "editing");
    assert_eq!(record.comment, "second idea");
}

#[test]
fn clear_returns_to_idle_and_wipes_task_and_comment() {
    let mut session = TimerSession::new();
    session.select_task("writing");
    session.set_comment("draft");
    session.start(at(9, 0, 0)).unwrap();

    session.clear();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(session.task_name().is_empty());
    assert!(session.comment().is_empty());
    assert_eq!(session.elapsed_seconds(at(9, 5, 0)), 0);
}

#[test]
fn failed_append_leaves_the_session_running() {
    let dir = tempdir().unwrap();
    // the directory itself is not a writable store file
    let store = SessionStore::new(dir.path());

    let mut session = TimerSession::new();
    session.select_task("writing");
    session.start(at(9, 0, 0)).unwrap();

    let record = session.finalize(at(9, 0, 42)).unwrap();
    assert!(store.append(&record).is_err());

    // the caller only clears after a successful append, so nothing is lost
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.elapsed_seconds(at(9, 0, 50)), 50);
}
