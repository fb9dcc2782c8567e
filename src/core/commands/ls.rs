use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs;
use std::path::Path;

#[derive(Clone, Default)]
pub struct LsCommand;

impl LsCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Names in `dir`, dotfiles skipped, sorted for stable output.
fn list_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

impl Command for LsCommand {
    fn execute(&self, _args: &[String], session: &mut SessionState) -> Result<(), CommandError> {
        let names = list_entries(session.current_dir())
            .map_err(|e| CommandError::ExecutionError(format!("ls: {}", e)))?;
        for name in names {
            println!("{}", name);
        }
        Ok(())
    }
}
