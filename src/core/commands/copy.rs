use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs::File;
use std::io;

#[derive(Clone, Default)]
pub struct CopyCommand;

impl CopyCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CopyCommand {
    fn execute(&self, args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let (src, dst) = match args {
            [src, dst, ..] => (src, dst),
            _ => {
                return Err(CommandError::InvalidArguments(
                    "usage: copy <source> <destination>".to_string(),
                ))
            }
        };

        let mut reader = File::open(src)
            .map_err(|e| CommandError::ExecutionError(format!("copy: {}: {}", src, e)))?;
        // Destination is created or truncated; a failure mid-copy can
        // leave a partial file behind.
        let mut writer = File::create(dst)
            .map_err(|e| CommandError::ExecutionError(format!("copy: {}: {}", dst, e)))?;

        io::copy(&mut reader, &mut writer)
            .map_err(|e| CommandError::ExecutionError(format!("copy: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_copy_round_trips_bytes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let src = temp_dir.path().join("a.bin");
        let dst = temp_dir.path().join("b.bin");
        let payload: Vec<u8> = (0u16..300).map(|b| (b % 256) as u8).collect();
        fs::write(&src, &payload).unwrap();

        let cmd = CopyCommand::new();
        let mut session = SessionState::new().unwrap();
        cmd.execute(
            &[
                src.to_string_lossy().into_owned(),
                dst.to_string_lossy().into_owned(),
            ],
            &mut session,
        )
        .unwrap();

        assert_eq!(fs::read(&dst).unwrap(), payload);
    }

    #[test]
    fn test_copy_truncates_existing_destination() {
        let temp_dir = tempfile::tempdir().unwrap();
        let src = temp_dir.path().join("short.txt");
        let dst = temp_dir.path().join("long.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dst, "previous longer content").unwrap();

        let cmd = CopyCommand::new();
        let mut session = SessionState::new().unwrap();
        cmd.execute(
            &[
                src.to_string_lossy().into_owned(),
                dst.to_string_lossy().into_owned(),
            ],
            &mut session,
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn test_copy_missing_source_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cmd = CopyCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(
            &[
                "/nonexistent/src".to_string(),
                temp_dir.path().join("dst").to_string_lossy().into_owned(),
            ],
            &mut session,
        );
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }

    #[test]
    fn test_copy_requires_two_arguments() {
        let cmd = CopyCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(&["only-one".to_string()], &mut session);
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }
}
