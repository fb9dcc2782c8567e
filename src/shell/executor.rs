use crate::error::ShellError;
use crate::tokenizer;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<(), ShellError> {
        // The argument vector borrows from `line` and is dropped with it
        // at the end of this iteration.
        let tokens = tokenizer::tokenize(line);
        let Some((&command_name, rest)) = tokens.split_first() else {
            // Blank line: no dispatch, no history entry.
            return Ok(());
        };

        if self.flags.is_set("debug") {
            eprintln!("minnow: {} token(s)", tokens.len());
        }

        let command_args: Vec<String> = rest.iter().map(|&s| s.to_string()).collect();
        let result = self
            .executor
            .execute(command_name, &command_args, &mut self.session);

        // The raw line is recorded after either dispatch path; a history
        // append that fails is ignored.
        let _ = self.editor.add_history_entry(line);
        let _ = self.history.add(line);

        result.map_err(ShellError::CommandError)
    }
}
