use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

#[derive(Clone, Default)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_to_search, file_prefix) = self.parse_path_input(incomplete);
        self.get_path_matches(&dir_to_search, &file_prefix)
    }

    fn parse_path_input(&self, incomplete: &str) -> (PathBuf, String) {
        let path = Path::new(incomplete);

        if incomplete.is_empty() {
            (PathBuf::from("."), String::new())
        } else if incomplete.ends_with('/') {
            (PathBuf::from(incomplete), String::new())
        } else if let Some(parent) = path.parent() {
            let dir = if parent.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                parent.to_path_buf()
            };
            let prefix = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();
            (dir, prefix)
        } else {
            (PathBuf::from("."), incomplete.to_string())
        }
    }

    fn get_path_matches(&self, dir_to_search: &Path, file_prefix: &str) -> Vec<Pair> {
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if name.starts_with(file_prefix) {
                        matches.push(self.completion_pair(name, &entry.path(), dir_to_search));
                    }
                }
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    fn completion_pair(&self, name: &str, path: &Path, dir_to_search: &Path) -> Pair {
        let relative = if dir_to_search == Path::new(".") {
            name.to_string()
        } else {
            dir_to_search.join(name).to_string_lossy().into_owned()
        };

        if path.is_dir() {
            let display = format!("{}/", relative);
            Pair {
                replacement: display.clone(),
                display,
            }
        } else {
            Pair {
                display: relative.clone(),
                replacement: format!("{} ", relative),
            }
        }
    }
}
