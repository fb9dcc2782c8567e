use super::{Command, CommandError};
use crate::core::state::SessionState;
use chrono::Local;

#[derive(Clone, Default)]
pub struct DateCommand;

impl DateCommand {
    pub fn new() -> Self {
        Self
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Command for DateCommand {
    fn execute(&self, _args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        println!("{}", Local::now().format(DATE_FORMAT));
        Ok(())
    }
}
