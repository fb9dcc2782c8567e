mod file_ops;

use std::collections::VecDeque;
use std::path::PathBuf;

use self::file_ops::FileOps;

#[derive(Debug)]
pub enum HistoryError {
    Io(std::io::Error),
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        HistoryError::Io(err)
    }
}

impl std::fmt::Display for HistoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryError::Io(e) => write!(f, "history IO error: {}", e),
        }
    }
}

/// Bounded session history backed by a plain-text file, one line per
/// command. Oldest entries are evicted past the cap.
pub struct History {
    entries: VecDeque<String>,
    file_ops: FileOps,
    max_entries: usize,
}

impl History {
    pub fn new(history_file: PathBuf, max_entries: usize) -> Result<Self, HistoryError> {
        let file_ops = FileOps::new(history_file);
        let mut entries = file_ops.load_entries()?;

        // Keep the newest entries if the file outgrew the cap.
        while entries.len() > max_entries {
            entries.pop_front();
        }

        Ok(History {
            entries,
            file_ops,
            max_entries,
        })
    }

    pub fn add(&mut self, entry: &str) -> Result<(), HistoryError> {
        if entry.trim().is_empty() {
            return Ok(());
        }

        self.entries.push_back(entry.to_owned());
        if self.entries.len() > self.max_entries {
            self.entries.pop_front();
            // Eviction invalidates the file tail; rewrite compacted.
            self.file_ops.rewrite(self.entries.iter())?;
        } else {
            self.file_ops.append_entry(entry)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_in(dir: &std::path::Path, cap: usize) -> History {
        History::new(dir.join("history"), cap).unwrap()
    }

    #[test]
    fn test_starts_empty_without_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let history = history_in(temp_dir.path(), 16);
        assert!(history.is_empty());
    }

    #[test]
    fn test_add_and_reload() {
        let temp_dir = tempfile::tempdir().unwrap();
        {
            let mut history = history_in(temp_dir.path(), 16);
            history.add("ls").unwrap();
            history.add("pwd").unwrap();
        }

        let reloaded = history_in(temp_dir.path(), 16);
        let entries: Vec<&str> = reloaded.entries().collect();
        assert_eq!(entries, vec!["ls", "pwd"]);
    }

    #[test]
    fn test_blank_entries_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut history = history_in(temp_dir.path(), 16);
        history.add("   ").unwrap();
        history.add("").unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_eviction_drops_oldest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut history = history_in(temp_dir.path(), 3);
        for entry in ["one", "two", "three", "four"] {
            history.add(entry).unwrap();
        }

        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(entries, vec!["two", "three", "four"]);

        // Eviction is reflected on disk as well.
        let reloaded = history_in(temp_dir.path(), 3);
        let entries: Vec<&str> = reloaded.entries().collect();
        assert_eq!(entries, vec!["two", "three", "four"]);
    }

    #[test]
    fn test_oversized_file_trimmed_on_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        {
            let mut history = history_in(temp_dir.path(), 16);
            for i in 0..10 {
                history.add(&format!("cmd{}", i)).unwrap();
            }
        }

        let trimmed = history_in(temp_dir.path(), 4);
        let entries: Vec<&str> = trimmed.entries().collect();
        assert_eq!(entries, vec!["cmd6", "cmd7", "cmd8", "cmd9"]);
    }
}
