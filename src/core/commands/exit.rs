use super::{Command, CommandError};
use crate::core::state::SessionState;

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        std::process::exit(0);
    }
}
