use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs::OpenOptions;

#[derive(Clone, Default)]
pub struct CreateCommand;

impl CreateCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CreateCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let path = args
            .first()
            .ok_or_else(|| CommandError::InvalidArguments("usage: create <file>".to_string()))?;

        // Open-or-create in append mode: a missing file appears empty, an
        // existing file keeps its content.
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map(|_| ())
            .map_err(|e| CommandError::ExecutionError(format!("create: {}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_create_makes_empty_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("new.txt");

        let cmd = CreateCommand::new();
        let mut session = SessionState::new().unwrap();
        cmd.execute(&[target.to_string_lossy().into_owned()], &mut session)
            .unwrap();

        assert!(target.is_file());
        assert_eq!(fs::metadata(&target).unwrap().len(), 0);
    }

    #[test]
    fn test_create_leaves_existing_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("kept.txt");
        fs::write(&target, "do not clobber").unwrap();

        let cmd = CreateCommand::new();
        let mut session = SessionState::new().unwrap();
        cmd.execute(&[target.to_string_lossy().into_owned()], &mut session)
            .unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "do not clobber");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let cmd = CreateCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(&["/nonexistent/dir/file.txt".to_string()], &mut session);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }
}
