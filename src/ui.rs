use crate::model::Task;
use crate::tasklist::TaskList;

pub fn greeting_ui() -> String {
    "Hello! What can I track for you?".to_string()
}

pub fn list_ui(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "There is nothing in your list.".to_string();
    }
    let mut out = String::from("Here is everything in your list:");
    for (position, task) in tasks.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", position + 1, task));
    }
    out
}

pub fn add_task_ui(task: &Task, size: usize) -> String {
    format!(
        "Added this task:\n  {}\nNow you have {} in the list.",
        task,
        count(size)
    )
}

pub fn mark_ui(task: &Task) -> String {
    format!("Marked this task as done:\n  {}", task)
}

pub fn unmark_ui(task: &Task) -> String {
    format!("Marked this task as not done yet:\n  {}", task)
}

pub fn delete_ui(task: &Task, size: usize) -> String {
    format!(
        "Removed this task:\n  {}\nNow you have {} in the list.",
        task,
        count(size)
    )
}

pub fn find_ui(matches: &[&Task]) -> String {
    if matches.is_empty() {
        return "No matching tasks found.".to_string();
    }
    let mut out = String::from("Here are the matching tasks in your list:");
    for (position, task) in matches.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", position + 1, task));
    }
    out
}

pub fn save_ui() -> String {
    "Saved your list.".to_string()
}

pub fn unknown_ui() -> String {
    "Sorry, I don't recognize that command.".to_string()
}

pub fn error_ui(err: &dyn std::fmt::Display) -> String {
    format!("That didn't work: {}", err)
}

fn count(size: usize) -> String {
    if size == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", size)
    }
}
