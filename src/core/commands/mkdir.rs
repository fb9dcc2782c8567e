use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;

#[derive(Clone, Default)]
pub struct MkdirCommand;

impl MkdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let path = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("usage: mkdir <directory>".to_string())
        })?;

        DirBuilder::new()
            .mode(0o755)
            .create(path)
            .map_err(|e| CommandError::ExecutionError(format!("mkdir: {}: {}", path, e)))
    }
}
