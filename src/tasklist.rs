use crate::model::{DateFormatError, Task};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("no task at position {0}")]
    IndexOutOfRange(usize),
}

/// The ordered store of tasks for one session. Positions are 0-based here;
/// the parser translates from the 1-based numbers users type.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn add_todo(&mut self, description: &str) -> &Task {
        self.push(Task::todo(description))
    }

    pub fn add_deadline(&mut self, description: &str, due: &str) -> Result<&Task, DateFormatError> {
        let task = Task::deadline(description, due)?;
        Ok(self.push(task))
    }

    pub fn add_event(
        &mut self,
        description: &str,
        start: &str,
        end: &str,
    ) -> Result<&Task, DateFormatError> {
        let task = Task::event(description, start, end)?;
        Ok(self.push(task))
    }

    pub fn add_recurring(&mut self, description: &str, frequency: &str) -> &Task {
        self.push(Task::recurring(description, frequency))
    }

    pub fn mark(&mut self, index: usize) -> Result<&Task, ListError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange(index))?;
        task.mark();
        Ok(task)
    }

    pub fn unmark(&mut self, index: usize) -> Result<&Task, ListError> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange(index))?;
        task.unmark();
        Ok(task)
    }

    /// Removes and returns the task at `index`; later tasks shift down by one.
    pub fn delete(&mut self, index: usize) -> Result<Task, ListError> {
        if index >= self.tasks.len() {
            return Err(ListError::IndexOutOfRange(index));
        }
        Ok(self.tasks.remove(index))
    }

    /// Case-sensitive substring match over descriptions, in list order.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.description().contains(keyword))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    fn push(&mut self, task: Task) -> &Task {
        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }
}
