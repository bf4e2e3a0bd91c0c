use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use taskpad::{cli, parser, storage, tasklist, ui};

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::Cli::parse();

    let storage = match args.data_file {
        Some(path) => storage::Storage::new(path),
        None => storage::Storage::default_location()?,
    };
    let mut tasks = storage.load()?;

    if !args.command.is_empty() {
        let line = args.command.join(" ");
        println!("{}", respond(&line, &mut tasks, &storage));
        return Ok(());
    }

    log::debug!("interactive session over {:?}", storage.path());
    println!("{}", ui::greeting_ui());
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", respond(&line, &mut tasks, &storage));
        io::stdout().flush()?;
    }
    Ok(())
}

/// Command failures become responses; the session never dies on bad input.
fn respond(line: &str, tasks: &mut tasklist::TaskList, storage: &storage::Storage) -> String {
    match parser::parse(line, tasks, storage) {
        Ok(response) => response,
        Err(err) => ui::error_ui(&err),
    }
}
