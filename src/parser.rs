use crate::storage::Storage;
use crate::tasklist::TaskList;
use crate::ui;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    IncorrectInput(String),
    #[error("{0}")]
    TaskNotFound(String),
}

/// Interprets one line of user input against the live task list.
///
/// The first whitespace-delimited token picks the command; the rest of the
/// line is that command's argument tail. Every recognized command either
/// returns a rendered response or a [`CommandError`] describing how the
/// input was malformed. Date parse failures and save failures come back as
/// rendered error responses so the session keeps going. The list is only
/// mutated once a command's arguments have fully validated.
pub fn parse(line: &str, tasks: &mut TaskList, storage: &Storage) -> Result<String, CommandError> {
    let line = line.trim();
    let (command, tail) = match line.split_once(' ') {
        Some((command, tail)) => (command, Some(tail)),
        None => (line, None),
    };

    match command {
        "list" => {
            if tail.is_some() {
                return Err(incorrect("nothing should follow the command (e.g. \"list\")"));
            }
            Ok(ui::list_ui(tasks))
        }
        "mark" => {
            let index = parse_position(tail, "mark", tasks.len())?;
            let task = tasks.mark(index).map_err(not_found)?;
            Ok(ui::mark_ui(task))
        }
        "unmark" => {
            let index = parse_position(tail, "unmark", tasks.len())?;
            let task = tasks.unmark(index).map_err(not_found)?;
            Ok(ui::unmark_ui(task))
        }
        "todo" => {
            let description = require_tail(tail, "todo your_description")?;
            let task = tasks.add_todo(description).clone();
            Ok(ui::add_task_ui(&task, tasks.len()))
        }
        "deadline" => {
            let tail = require_tail(tail, "deadline your_description /by yyyy-mm-dd")?;
            let parts: Vec<&str> = tail.split(" /by ").collect();
            let [description, due] = parts[..] else {
                return Err(incorrect(
                    "expected one \"/by\" (e.g. \"deadline your_description /by yyyy-mm-dd\")",
                ));
            };
            match tasks.add_deadline(description, due) {
                Ok(task) => {
                    let task = task.clone();
                    Ok(ui::add_task_ui(&task, tasks.len()))
                }
                Err(err) => Ok(ui::error_ui(&err)),
            }
        }
        "event" => {
            let tail = require_tail(
                tail,
                "event your_description /from yyyy-mm-dd /to yyyy-mm-dd",
            )?;
            let Some((description, times)) = tail.split_once(" /from ") else {
                return Err(incorrect(
                    "expected \"/from\" (e.g. \"event your_description /from yyyy-mm-dd /to yyyy-mm-dd\")",
                ));
            };
            let Some((start, end)) = times.split_once(" /to ") else {
                return Err(incorrect(
                    "expected \"/to\" after \"/from\" (e.g. \"event your_description /from yyyy-mm-dd /to yyyy-mm-dd\")",
                ));
            };
            match tasks.add_event(description, start, end) {
                Ok(task) => {
                    let task = task.clone();
                    Ok(ui::add_task_ui(&task, tasks.len()))
                }
                Err(err) => Ok(ui::error_ui(&err)),
            }
        }
        "delete" => {
            let index = parse_position(tail, "delete", tasks.len())?;
            let task = tasks.delete(index).map_err(not_found)?;
            Ok(ui::delete_ui(&task, tasks.len()))
        }
        "find" => {
            let keyword = require_tail(tail, "find keyword")?;
            let matches = tasks.find(keyword);
            Ok(ui::find_ui(&matches))
        }
        "recurring" => {
            let tail = require_tail(tail, "recurring your_description /every your_frequency")?;
            let Some((description, frequency)) = tail.split_once(" /every ") else {
                return Err(incorrect(
                    "expected \"/every\" (e.g. \"recurring your_description /every your_frequency\")",
                ));
            };
            let task = tasks.add_recurring(description, frequency).clone();
            Ok(ui::add_task_ui(&task, tasks.len()))
        }
        "save" => match storage.save(tasks) {
            Ok(()) => Ok(ui::save_ui()),
            Err(err) => {
                log::warn!("save failed: {:#}", err);
                Ok(ui::error_ui(&err))
            }
        },
        _ => Ok(ui::unknown_ui()),
    }
}

fn incorrect(message: impl Into<String>) -> CommandError {
    CommandError::IncorrectInput(message.into())
}

fn not_found(err: crate::tasklist::ListError) -> CommandError {
    CommandError::TaskNotFound(err.to_string())
}

/// The tail must be a single integer token; users count from 1.
fn parse_position(tail: Option<&str>, example: &str, size: usize) -> Result<usize, CommandError> {
    let mut tokens = tail.unwrap_or("").split_whitespace();
    let (Some(token), None) = (tokens.next(), tokens.next()) else {
        return Err(incorrect(format!(
            "expected exactly one number (e.g. \"{example} 1\")"
        )));
    };
    let number: i64 = token.parse().map_err(|_| {
        incorrect(format!(
            "{token:?} is not a number (e.g. \"{example} 1\")"
        ))
    })?;
    if number < 1 || number as usize > size {
        return Err(CommandError::TaskNotFound(
            "there doesn't seem to be a task at that position".to_string(),
        ));
    }
    Ok(number as usize - 1)
}

fn require_tail<'a>(tail: Option<&'a str>, example: &str) -> Result<&'a str, CommandError> {
    match tail {
        Some(tail) if !tail.trim().is_empty() => Ok(tail),
        _ => Err(incorrect(format!(
            "expected something after the command (e.g. \"{example}\")"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn scratch_storage(name: &str) -> Storage {
        Storage::new(env::temp_dir().join(format!("taskpad-{}-{}.yml", name, process::id())))
    }

    fn run(line: &str, tasks: &mut TaskList) -> Result<String, CommandError> {
        let storage = scratch_storage("parser");
        parse(line, tasks, &storage)
    }

    #[test]
    fn todo_adds_one_task_and_announces_it() {
        let mut tasks = TaskList::default();
        let response = run("todo buy milk", &mut tasks).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(response.contains("[T][ ] buy milk"));
        assert!(response.contains("1 task in the list"));
    }

    #[test]
    fn deadline_renders_the_display_date() {
        let mut tasks = TaskList::default();
        let response = run("deadline submit report /by 2024-12-01", &mut tasks).unwrap();
        assert!(response.contains("[D][ ] submit report (by: Dec 1 2024)"));
    }

    #[test]
    fn deadline_with_bad_date_responds_without_adding() {
        let mut tasks = TaskList::default();
        let response = run("deadline submit report /by friday", &mut tasks).unwrap();
        assert!(response.contains("friday"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn deadline_needs_exactly_one_by() {
        let mut tasks = TaskList::default();
        let err = run("deadline report /by 2024-12-01 /by 2024-12-02", &mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::IncorrectInput(_)));
        assert!(tasks.is_empty());
    }

    #[test]
    fn event_parses_both_markers() {
        let mut tasks = TaskList::default();
        let response = run(
            "event offsite /from 2024-06-03 /to 2024-06-05",
            &mut tasks,
        )
        .unwrap();
        assert!(response.contains("[E][ ] offsite (from: Jun 3 2024 to: Jun 5 2024)"));
    }

    #[test]
    fn event_without_to_is_incorrect_input() {
        let mut tasks = TaskList::default();
        let err = run("event offsite /from 2024-06-03", &mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::IncorrectInput(_)));
        assert!(tasks.is_empty());
    }

    #[test]
    fn recurring_keeps_the_phrase() {
        let mut tasks = TaskList::default();
        let response = run("recurring water plants /every other tuesday", &mut tasks).unwrap();
        assert!(response.contains("[R][ ] water plants (every: other tuesday)"));
    }

    #[test]
    fn mark_then_list_shows_the_x() {
        let mut tasks = TaskList::default();
        run("todo buy milk", &mut tasks).unwrap();
        run("mark 1", &mut tasks).unwrap();
        let listing = run("list", &mut tasks).unwrap();
        assert!(listing.contains("1. [T][X] buy milk"));
    }

    #[test]
    fn delete_out_of_range_reports_task_not_found() {
        let mut tasks = TaskList::default();
        for description in ["a", "b", "c"] {
            tasks.add_todo(description);
        }
        let err = run("delete 5", &mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::TaskNotFound(_)));
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn delete_reindexes_the_rest() {
        let mut tasks = TaskList::default();
        for description in ["a", "b", "c"] {
            tasks.add_todo(description);
        }
        run("delete 2", &mut tasks).unwrap();
        run("mark 2", &mut tasks).unwrap();
        let listing = run("list", &mut tasks).unwrap();
        assert!(listing.contains("2. [T][X] c"));
    }

    #[test]
    fn mark_zero_is_out_of_range() {
        let mut tasks = TaskList::default();
        tasks.add_todo("a");
        let err = run("mark 0", &mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::TaskNotFound(_)));
        assert!(!tasks.iter().next().unwrap().done);
    }

    #[test]
    fn non_numeric_index_is_incorrect_input() {
        let mut tasks = TaskList::default();
        tasks.add_todo("a");
        let err = run("mark one", &mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::IncorrectInput(_)));
    }

    #[test]
    fn list_with_a_tail_is_incorrect_input() {
        let mut tasks = TaskList::default();
        let err = run("list everything", &mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::IncorrectInput(_)));
    }

    #[test]
    fn find_returns_matches_in_order() {
        let mut tasks = TaskList::default();
        run("todo buy milk", &mut tasks).unwrap();
        run("todo call mum", &mut tasks).unwrap();
        run("todo milk the cow", &mut tasks).unwrap();
        let response = run("find milk", &mut tasks).unwrap();
        assert!(response.contains("1. [T][ ] buy milk"));
        assert!(response.contains("2. [T][ ] milk the cow"));
        assert!(!response.contains("call mum"));
    }

    #[test]
    fn find_without_a_keyword_is_incorrect_input() {
        let mut tasks = TaskList::default();
        let err = run("find", &mut tasks).unwrap_err();
        assert!(matches!(err, CommandError::IncorrectInput(_)));
    }

    #[test]
    fn unrecognized_command_leaves_the_list_alone() {
        let mut tasks = TaskList::default();
        tasks.add_todo("a");
        let response = run("unknown", &mut tasks).unwrap();
        assert_eq!(response, ui::unknown_ui());
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn save_writes_through_the_storage_handle() {
        let storage = scratch_storage("save");
        let mut tasks = TaskList::default();
        tasks.add_todo("persist me");
        let response = parse("save", &mut tasks, &storage).unwrap();
        assert_eq!(response, ui::save_ui());
        assert_eq!(storage.load().unwrap(), tasks);
        std::fs::remove_file(storage.path()).ok();
    }
}
