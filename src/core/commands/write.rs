use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Appends one line of interactively supplied text to a file.
#[derive(Clone, Default)]
pub struct WriteCommand;

impl WriteCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Reads a single line from `input` and appends it to `path`, creating the
/// file if needed. The file is opened before any input is consumed, so an
/// unopenable path fails without prompting. Factored off the trait impl so
/// tests can supply the line without a terminal.
fn append_line(path: &Path, input: &mut dyn BufRead) -> io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.strip_suffix('\n').unwrap_or(&line);

    writeln!(file, "{}", line)
}

impl Command for WriteCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let path = args
            .first()
            .ok_or_else(|| CommandError::InvalidArguments("usage: write <file>".to_string()))?;

        let stdin = io::stdin();
        append_line(Path::new(path), &mut stdin.lock())
            .map_err(|e| CommandError::ExecutionError(format!("write: {}: {}", path, e)))
    }
}
