use super::{Command, CommandError};
use crate::core::state::SessionState;

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], session: &mut SessionState) -> Result<(), CommandError> {
        println!("{}", session.current_dir().display());
        Ok(())
    }
}
