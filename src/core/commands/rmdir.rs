use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs;

#[derive(Clone, Default)]
pub struct RmdirCommand;

impl RmdirCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmdirCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let path = args.first().ok_or_else(|| {
            CommandError::InvalidArguments("usage: rmdir <directory>".to_string())
        })?;

        fs::remove_dir(path)
            .map_err(|e| CommandError::ExecutionError(format!("rmdir: {}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_rmdir_removes_empty_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("empty");
        fs::create_dir(&target).unwrap();

        let cmd = RmdirCommand::new();
        let mut session = SessionState::new().unwrap();
        cmd.execute(&[target.to_string_lossy().into_owned()], &mut session)
            .unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_rmdir_nonempty_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("full");
        fs::create_dir(&target).unwrap();
        File::create(target.join("occupant")).unwrap();

        let cmd = RmdirCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(&[target.to_string_lossy().into_owned()], &mut session);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
        assert!(target.exists());
    }

    #[test]
    fn test_rmdir_missing_reports_error() {
        let cmd = RmdirCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(&["/nonexistent/dir".to_string()], &mut session);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }
}
