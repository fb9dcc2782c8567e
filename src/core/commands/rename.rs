use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs;

/// The `move` builtin. Lives in `rename.rs` because `move` is a keyword;
/// the registry key is still "move".
#[derive(Clone, Default)]
pub struct MoveCommand;

impl MoveCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for MoveCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let (src, dst) = match args {
            [src, dst, ..] => (src, dst),
            _ => {
                return Err(CommandError::InvalidArguments(
                    "usage: move <source> <destination>".to_string(),
                ))
            }
        };

        fs::rename(src, dst)
            .map_err(|e| CommandError::ExecutionError(format!("move: {}: {}", src, e)))
    }
}
