use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tabloapp::logging::{default_log_level, init_logging};
use tabloapp::recurrence::RepeatUnit;
use tabloapp::store::FsBackend;
use tabloapp::{Board, BoardConfig, BoardError, DuePoller, Task};

use crate::args::{Cli, Commands, NoteCommands, TaskCommands};
use crate::print;
use crate::ui::{TermNotifier, TermUi};

pub fn run(cli: Cli) -> Result<()> {
    let config = BoardConfig::load()?;
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data_dir());

    let level = if cli.verbose {
        "debug"
    } else {
        default_log_level()
    };
    if let Err(err) = init_logging(level, &data_dir.join("logs")) {
        eprintln!("Warning: logging disabled: {err}");
    }
    log::debug!("using data dir {}", data_dir.display());

    let mut board = Board::new(FsBackend::new(&data_dir));

    match cli.command {
        Some(Commands::Board { json }) => handle_board(&board, json),
        None => handle_board(&board, false),
        Some(Commands::Note { command }) => handle_note(&board, command),
        Some(Commands::Task { command }) => handle_task(&mut board, command),
        Some(Commands::Watch { once, interval_ms }) => {
            let interval = interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.poll_interval());
            handle_watch(board, once, interval)
        }
    }
}

fn handle_board(board: &Board<FsBackend>, json: bool) -> Result<()> {
    let notes = board.notes()?;
    let tasks = board.tasks()?;

    if json {
        let document = serde_json::json!({ "notes": notes, "tasks": tasks });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print::print_board(&notes, &tasks);
    }
    Ok(())
}

fn handle_note(board: &Board<FsBackend>, command: NoteCommands) -> Result<()> {
    match command {
        NoteCommands::Add { title, content } => {
            let note = board.create_note(&title, &content)?;
            print::success(&format!("Created note {}", note.id));
        }
        NoteCommands::List { json } => {
            let notes = board.notes()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else {
                print::print_notes(&notes);
            }
        }
        NoteCommands::Rm { id } => {
            if board.delete_note(id)? {
                print::success("Note deleted.");
            } else {
                bail!(BoardError::NotFound(id));
            }
        }
    }
    Ok(())
}

fn handle_task(board: &mut Board<FsBackend>, command: TaskCommands) -> Result<()> {
    match command {
        TaskCommands::Add {
            title,
            content,
            due,
            every,
        } => {
            let mut task = Task::new(&title, &content);
            if let Some(due) = &due {
                task = task.with_due_date(parse_due(due)?);
            }
            if let Some(every) = &every {
                if due.is_none() {
                    bail!("--every requires --due");
                }
                let (value, unit) = parse_every(every)?;
                task = task.with_repeat(value, &unit);
            }
            let task = board.create_task(task)?;
            print::success(&format!("Created task {}", task.id));
        }
        TaskCommands::List { json } => {
            let tasks = board.tasks()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else {
                print::print_tasks(&tasks);
            }
        }
        TaskCommands::Done { id } => {
            let mut ui = TermUi::new(true);
            match board.complete_task(id, &mut ui) {
                Ok(Some(renewed)) => {
                    print::success(&format!(
                        "Task completed; repeats as {} {}",
                        renewed.id,
                        print::format_due(&renewed)
                    ));
                }
                Ok(None) => print::success("Task completed."),
                Err(BoardError::InvalidRepeatUnit(unit)) => {
                    print::warning(&format!(
                        "Task completed, but not renewed: unknown repeat unit {unit:?}"
                    ));
                }
                Err(err) => return Err(err.into()),
            }
        }
        TaskCommands::Ack { id } => {
            let mut ui = TermUi::new(true);
            if board.acknowledge_ring(id, &mut ui) {
                print::success("Ring silenced until the next poll.");
            } else {
                print::warning("Task is not ringing.");
            }
        }
        TaskCommands::Rm { id } => {
            let mut ui = TermUi::new(true);
            if board.delete_task(id, &mut ui)? {
                print::success("Task deleted.");
            } else {
                bail!(BoardError::NotFound(id));
            }
        }
    }
    Ok(())
}

fn handle_watch(mut board: Board<FsBackend>, once: bool, interval: Duration) -> Result<()> {
    let mut ui = TermUi::new(false);
    let mut notifier = TermNotifier::default();

    if once {
        let report = board.tick(Utc::now(), &mut ui, &mut notifier)?;
        if report.ringing.is_empty() {
            println!("No tasks due.");
        }
        return Ok(());
    }

    println!(
        "Watching for due tasks every {}s. Ctrl-C to stop.",
        interval.as_secs()
    );
    let _poller = DuePoller::spawn(board, ui, notifier, interval);
    loop {
        std::thread::park();
    }
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM`, or a bare `YYYY-MM-DD` (midnight).
/// Everything is read as UTC.
fn parse_due(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Ok(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let midnight = parsed
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow!("invalid date {s:?}"))?;
        return Ok(midnight.and_utc());
    }
    bail!("cannot parse due date {s:?} (expected RFC 3339, \"YYYY-MM-DD HH:MM\" or \"YYYY-MM-DD\")")
}

/// Parses "<value> <unit>", e.g. "1 month" or "3 days". The unit is
/// normalized to its plural form.
fn parse_every(s: &str) -> Result<(u32, String)> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    let [value, unit] = parts.as_slice() else {
        bail!("cannot parse repeat rule {s:?} (expected \"<value> <unit>\", e.g. \"1 month\")");
    };

    let value: u32 = value
        .parse()
        .with_context(|| format!("invalid repeat value {value:?}"))?;
    if value == 0 {
        bail!("repeat value must be positive");
    }

    let unit: RepeatUnit = unit.parse()?;
    Ok((value, unit.to_string()))
}
