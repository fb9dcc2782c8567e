use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs::File;
use std::io::{self, Write};

#[derive(Clone, Default)]
pub struct ReadCommand;

impl ReadCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ReadCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let path = args
            .first()
            .ok_or_else(|| CommandError::InvalidArguments("usage: read <file>".to_string()))?;

        let mut file = File::open(path)
            .map_err(|e| CommandError::ExecutionError(format!("read: {}: {}", path, e)))?;

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        io::copy(&mut file, &mut handle)
            .and_then(|_| handle.flush())
            .map_err(|e| CommandError::ExecutionError(format!("read: {}", e)))?;
        Ok(())
    }
}
