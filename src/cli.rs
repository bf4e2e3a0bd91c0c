use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about = "Single-line command task tracker")]
pub struct Cli {
    /// Override for the task file location
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// One command to run instead of starting an interactive session
    /// (e.g. `taskpad todo buy milk`)
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}
