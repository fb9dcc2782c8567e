use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs;

#[derive(Clone, Default)]
pub struct RmCommand;

impl RmCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RmCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let path = args
            .first()
            .ok_or_else(|| CommandError::InvalidArguments("usage: rm <file>".to_string()))?;

        fs::remove_file(path)
            .map_err(|e| CommandError::ExecutionError(format!("rm: {}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_rm_removes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let target = temp_dir.path().join("doomed.txt");
        File::create(&target).unwrap();

        let cmd = RmCommand::new();
        let mut session = SessionState::new().unwrap();
        cmd.execute(&[target.to_string_lossy().into_owned()], &mut session)
            .unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_rm_missing_reports_error() {
        let cmd = RmCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(&["/nonexistent/file.txt".to_string()], &mut session);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }

    #[test]
    fn test_rm_requires_argument() {
        let cmd = RmCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(&[], &mut session);
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }
}
