use rustyline::{history::FileHistory, Editor};

mod executor;

use crate::{
    core::{commands::CommandExecutor, state::SessionState},
    error::ShellError,
    flags::Flags,
    input::{History, ShellCompleter},
};

use executor::CommandHandler;

const PROMPT: &str = "$ ";
const HISTORY_CAPACITY: usize = 1024;

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) session: SessionState,
    pub(crate) history: History,
    pub(crate) flags: Flags,
    pub(crate) executor: CommandExecutor,
}

impl Shell {
    /// Builds the shell. Failure to resolve the initial working directory
    /// or to set up history is fatal here; everything after startup only
    /// ever fails per-command.
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let session = SessionState::new()?;
        let executor = CommandExecutor::new(&flags);

        let completer = ShellCompleter::new(&executor.builtin_names());
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));

        let history_file = dirs::home_dir()
            .ok_or(ShellError::HomeDirNotFound)?
            .join(".minnow_history");
        let history = History::new(history_file, HISTORY_CAPACITY)?;

        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to exit the shell");
        })?;

        Ok(Shell {
            editor,
            session,
            history,
            flags,
            executor,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if let Err(e) = self.execute_command(&line) {
                        if !self.flags.is_set("quiet") {
                            eprintln!("{}", e);
                        }
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("^C");
                    }
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    // End of input: the session is over, exit status 0.
                    break;
                }
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }
        Ok(())
    }
}
