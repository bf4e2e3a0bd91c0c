use crate::tasklist::TaskList;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Where the list lives on disk. The parser only ever touches this through
/// `save`; `load` runs once at startup.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: PathBuf) -> Self {
        Storage { path }
    }

    pub fn default_location() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "taskpad").context("locating data directory")?;
        Ok(Storage::new(dirs.data_dir().join("tasks.yml")))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Missing file means a fresh list, not an error.
    pub fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            log::debug!("no task file at {:?}, starting empty", self.path);
            return Ok(TaskList::default());
        }
        let data =
            fs::read_to_string(&self.path).with_context(|| format!("reading {:?}", self.path))?;
        let tasks: TaskList = serde_yaml::from_str(&data).context("parsing task file")?;
        log::debug!("loaded {} tasks from {:?}", tasks.len(), self.path);
        Ok(tasks)
    }

    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
        }
        let serialized = serde_yaml::to_string(tasks).context("serializing task list")?;
        fs::write(&self.path, serialized).with_context(|| format!("writing {:?}", self.path))?;
        log::debug!("saved {} tasks to {:?}", tasks.len(), self.path);
        Ok(())
    }
}
