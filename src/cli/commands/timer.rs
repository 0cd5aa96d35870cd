use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{SessionState, TimerSession};
use crate::errors::AppResult;
use crate::store::SessionStore;
use crate::ui::messages::{info, prompt, success, warning};
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{pad_right, secs2readable};
use crate::utils::time::{format_hms, now};
use std::io::{self, BufRead};

/// Handle the `timer` command: one interactive timing session loop.
///
/// Recent-task suggestions are printed up front, then commands run against
/// a single in-memory `TimerSession` until the user quits.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timer { task, comment } = cmd {
        let store = open_store(cfg);
        let mut session = TimerSession::new();

        if let Some(t) = task {
            session.select_task(t);
        }
        if let Some(c) = comment {
            session.set_comment(c);
        }

        print_suggestions(&store, cfg);
        if !session.task_name().is_empty() {
            info(format!("Task staged: '{}'", session.task_name()));
        }
        println!("Type 'help' for available commands.\n");

        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            prompt();
            line.clear();

            if stdin.lock().read_line(&mut line)? == 0 {
                // stdin closed mid-session: save rather than lose the time
                if session.is_active() {
                    warning("Input closed with an active timer, saving session.");
                    stop(&mut session, &store);
                }
                break;
            }

            let trimmed = line.trim();
            let (word, rest) = match trimmed.split_once(' ') {
                Some((w, r)) => (w, r.trim()),
                None => (trimmed, ""),
            };

            match word {
                "" => {}

                "task" => {
                    if rest.is_empty() {
                        warning("Usage: task <name>");
                    } else {
                        session.select_task(rest);
                        info(format!("Task: '{}'", session.task_name()));
                    }
                }

                "comment" => session.set_comment(rest),

                "start" => match session.start(now()) {
                    Ok(()) => info(format!("Timer started for '{}'.", session.task_name())),
                    Err(e) => warning(e),
                },

                "pause" => match session.pause(now()) {
                    Ok(()) => info(format!(
                        "Timer paused at {}.",
                        format_hms(session.elapsed_seconds(now()))
                    )),
                    Err(e) => warning(e),
                },

                "resume" => match session.resume(now()) {
                    Ok(()) => info("Timer resumed."),
                    Err(e) => warning(e),
                },

                "stop" => stop(&mut session, &store),

                "status" => status(&session),

                "recent" => print_suggestions(&store, cfg),

                "help" => help(),

                "quit" | "exit" => {
                    if session.is_active() {
                        // a live session must be stopped explicitly
                        warning("Please stop the timer before quitting.");
                    } else {
                        break;
                    }
                }

                other => warning(format!("Unknown command: {}", other)),
            }
        }
    }
    Ok(())
}

/// Finalize, persist, and only then reset the session. A failed append
/// keeps the session alive so the recorded time is not lost.
fn stop(session: &mut TimerSession, store: &SessionStore) {
    let record = match session.finalize(now()) {
        Ok(record) => record,
        Err(e) => {
            warning(e);
            return;
        }
    };

    match store.append(&record) {
        Ok(()) => {
            success(format!(
                "Task '{}' saved with {} sec.",
                record.task_name, record.duration_seconds
            ));
            session.clear();
        }
        Err(e) => warning(format!(
            "Could not save session: {}. Timer still active, retry 'stop'.",
            e
        )),
    }
}

fn status(session: &TimerSession) {
    match session.state() {
        SessionState::Idle => info("Timer idle."),
        SessionState::Running => println!(
            "Timer: {}  '{}'",
            format_hms(session.elapsed_seconds(now())),
            session.task_name()
        ),
        SessionState::Paused => println!(
            "Timer: {}  '{}' (paused)",
            format_hms(session.elapsed_seconds(now())),
            session.task_name()
        ),
    }
}

/// Suggestion block: recent tasks with accumulated minutes, each followed
/// by its last comment in grey.
fn print_suggestions(store: &SessionStore, cfg: &Config) {
    let recent = match store.recent_tasks(cfg.recent_tasks) {
        Ok(recent) => recent,
        Err(e) => {
            warning(format!("Could not read task history: {}", e));
            Vec::new()
        }
    };

    if recent.is_empty() {
        println!("No recorded tasks yet. Enter a new task name to begin.");
        return;
    }

    println!("Choose recent task or enter new one:");
    for activity in &recent {
        println!(
            "  {} {}",
            pad_right(&activity.task_name, 20),
            secs2readable(activity.total_seconds, cfg.show_seconds)
        );
        if !activity.last_comment.is_empty() {
            println!("    {}↪ {}{}", GREY, activity.last_comment, RESET);
        }
    }
}

fn help() {
    println!("Commands:");
    println!("  task <name>      stage the task to time");
    println!("  comment <text>   set the session comment (editable until stop)");
    println!("  start            start timing the staged task");
    println!("  pause            pause the running timer");
    println!("  resume           resume a paused timer");
    println!("  stop             finalize the session and save it");
    println!("  status           show elapsed time and state");
    println!("  recent           show recent task suggestions");
    println!("  quit             leave (only when the timer is stopped)");
}
