use crate::error::ShellError;
use std::path::{Path, PathBuf};

#[derive(Clone, Default)]
pub struct PathExpander;

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expands a leading `~` or `~/sub` against the home directory.
    /// `~user` forms are passed through untouched.
    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        match path.strip_prefix('~') {
            None => Ok(Path::new(path).to_path_buf()),
            Some("") => dirs::home_dir().ok_or(ShellError::HomeDirNotFound),
            Some(rest) => {
                if let Some(stripped) = rest.strip_prefix('/') {
                    let mut expanded = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                    for part in stripped.split('/').filter(|p| !p.is_empty()) {
                        expanded.push(part);
                    }
                    Ok(expanded)
                } else {
                    Ok(Path::new(path).to_path_buf())
                }
            }
        }
    }
}
