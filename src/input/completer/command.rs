use std::{borrow::Cow, collections::BTreeSet, env, fs};

use rustyline::completion::Pair;

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<Cow<'static, str>>,
}

impl CommandCompleter {
    pub fn new(builtins: &[&'static str]) -> Self {
        let mut completer = Self {
            commands: BTreeSet::new(),
        };
        for name in builtins {
            completer.commands.insert(Cow::Borrowed(*name));
        }
        completer.add_path_commands();
        completer
    }

    fn add_path_commands(&mut self) {
        if let Some(path_var) = env::var_os("PATH") {
            for path in env::split_paths(&path_var) {
                if let Ok(entries) = fs::read_dir(path) {
                    for entry in entries.filter_map(Result::ok) {
                        if let Ok(file_type) = entry.file_type() {
                            if file_type.is_file() || file_type.is_symlink() {
                                if let Some(name) = entry.file_name().to_str() {
                                    self.commands.insert(Cow::Owned(name.to_string()));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn complete_command(&self, line: &str) -> Vec<Pair> {
        let input = line.trim();
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}
