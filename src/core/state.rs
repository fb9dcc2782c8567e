use crate::error::ShellError;
use std::env;
use std::path::{Path, PathBuf};

/// Per-session state owned by the dispatch loop and lent to builtin
/// handlers. Holds the cached working directory: written only after a
/// successful directory change, read by `pwd` and `ls`.
pub struct SessionState {
    current_dir: PathBuf,
}

impl SessionState {
    /// Resolves the initial working directory. Failure here is fatal to
    /// startup: the shell cannot present a reliable prompt without it.
    pub fn new() -> Result<Self, ShellError> {
        let current_dir = env::current_dir().map_err(ShellError::WorkingDirUnavailable)?;
        Ok(SessionState { current_dir })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Re-resolves the working directory from the OS. Called synchronously
    /// right after a successful chdir; on failure the cache keeps its
    /// previous value.
    pub fn refresh_current_dir(&mut self) -> std::io::Result<()> {
        self.current_dir = env::current_dir()?;
        Ok(())
    }
}
