use chrono::Utc;
use console::style;
use tabloapp::model::{Note, Task};
use timeago::Formatter;

pub fn success(message: &str) {
    println!("{}", style(message).green());
}

pub fn warning(message: &str) {
    println!("{}", style(message).yellow());
}

pub fn print_board(notes: &[Note], tasks: &[Task]) {
    if notes.is_empty() && tasks.is_empty() {
        println!("The board is empty.");
        return;
    }

    if !notes.is_empty() {
        println!("{}", style("Notes").bold().underlined());
        print_notes(notes);
    }
    if !tasks.is_empty() {
        if !notes.is_empty() {
            println!();
        }
        println!("{}", style("Tasks").bold().underlined());
        print_tasks(tasks);
    }
}

pub fn print_notes(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    for note in notes {
        println!("{}  {}", style(note.id).dim(), style(&note.title).bold());
        if !note.content.is_empty() {
            println!("    {}", note.content);
        }
    }
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks.");
        return;
    }
    for task in tasks {
        let mut line = format!("{}  {}", style(task.id).dim(), style(&task.title).bold());
        if task.due_date.is_some() {
            line.push_str(&format!("  {}", format_due(task)));
        }
        if let Some(rule) = &task.repeat {
            line.push_str(&format!(
                "  {}",
                style(format!("↻ every {} {}", rule.value, rule.unit)).cyan()
            ));
        }
        println!("{line}");
        if !task.content.is_empty() {
            println!("    {}", task.content);
        }
    }
}

pub fn print_ring(task: &Task) {
    println!(
        "{} {}  {}",
        style("⚑ DUE").red().bold(),
        style(&task.title).bold(),
        style(task.id).dim()
    );
}

/// "due 3 minutes ago" for overdue tasks, an absolute timestamp otherwise.
pub fn format_due(task: &Task) -> String {
    let Some(due) = task.due_date else {
        return String::new();
    };
    let now = Utc::now();
    if due <= now {
        let elapsed = (now - due).to_std().unwrap_or_default();
        format!("due {}", Formatter::new().convert(elapsed))
    } else {
        format!("due {}", due.format("%Y-%m-%d %H:%M UTC"))
    }
}
