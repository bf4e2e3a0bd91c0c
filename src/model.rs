use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern accepted on the command line, e.g. `2024-12-01`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
/// Pattern used when rendering, e.g. `Dec 1 2024`.
pub const DATE_DISPLAY_FORMAT: &str = "%b %-d %Y";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot read {text:?} as a date (expected yyyy-mm-dd)")]
pub struct DateFormatError {
    pub text: String,
}

pub fn parse_date(text: &str) -> Result<NaiveDate, DateFormatError> {
    NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT).map_err(|_| DateFormatError {
        text: text.to_string(),
    })
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Kind {
    Todo,
    Deadline { due: NaiveDate },
    Event { start: NaiveDate, end: NaiveDate },
    Recurring { frequency: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub done: bool,
    #[serde(flatten)]
    pub kind: Kind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Self {
        Task::with_kind(description, Kind::Todo)
    }

    pub fn deadline(description: impl Into<String>, due: &str) -> Result<Self, DateFormatError> {
        let due = parse_date(due)?;
        Ok(Task::with_kind(description, Kind::Deadline { due }))
    }

    /// No ordering between start and end is enforced.
    pub fn event(
        description: impl Into<String>,
        start: &str,
        end: &str,
    ) -> Result<Self, DateFormatError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Ok(Task::with_kind(description, Kind::Event { start, end }))
    }

    pub fn recurring(description: impl Into<String>, frequency: impl Into<String>) -> Self {
        Task::with_kind(
            description,
            Kind::Recurring {
                frequency: frequency.into(),
            },
        )
    }

    fn with_kind(description: impl Into<String>, kind: Kind) -> Self {
        Task {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status_icon(&self) -> &'static str {
        if self.done {
            "X"
        } else {
            " "
        }
    }

    pub fn tag(&self) -> &'static str {
        match self.kind {
            Kind::Todo => "T",
            Kind::Deadline { .. } => "D",
            Kind::Event { .. } => "E",
            Kind::Recurring { .. } => "R",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            Kind::Todo => Ok(()),
            Kind::Deadline { due } => {
                write!(f, " (by: {})", due.format(DATE_DISPLAY_FORMAT))
            }
            Kind::Event { start, end } => write!(
                f,
                " (from: {} to: {})",
                start.format(DATE_DISPLAY_FORMAT),
                end.format(DATE_DISPLAY_FORMAT)
            ),
            Kind::Recurring { frequency } => write!(f, " (every: {})", frequency),
        }
    }
}
