use super::{Command, CommandError};
use crate::core::state::SessionState;
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], session: &mut SessionState) -> Result<(), CommandError> {
        let path_str = args.first().map(|s| s.as_str()).unwrap_or("~");
        let expanded_path = self
            .path_expander
            .expand(path_str)
            .map_err(|e| CommandError::ExecutionError(e.to_string()))?;

        env::set_current_dir(&expanded_path)
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}: {}", path_str, e)))?;

        // The cache is refreshed right after the chdir lands, never lazily.
        session
            .refresh_current_dir()
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))
    }
}
