use std::collections::BTreeMap;

mod cd;
mod copy;
mod create;
mod date;
mod exit;
mod ls;
mod mkdir;
mod pwd;
mod read;
mod rename;
mod rm;
mod rmdir;
mod uptime;
mod whoami;
mod write;

pub use cd::CdCommand;
pub use copy::CopyCommand;
pub use create::CreateCommand;
pub use date::DateCommand;
pub use exit::ExitCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use pwd::PwdCommand;
pub use read::ReadCommand;
pub use rename::MoveCommand;
pub use rm::RmCommand;
pub use rmdir::RmdirCommand;
pub use uptime::UptimeCommand;
pub use whoami::WhoamiCommand;
pub use write::WriteCommand;

use crate::core::state::SessionState;
use crate::flags::Flags;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// A builtin command. Handlers receive the arguments with the command name
/// already stripped, plus the session state the dispatch loop owns.
pub trait Command {
    fn execute(&self, args: &[String], session: &mut SessionState) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Pwd(PwdCommand),
    Ls(LsCommand),
    Rm(RmCommand),
    Mkdir(MkdirCommand),
    Rmdir(RmdirCommand),
    Whoami(WhoamiCommand),
    Date(DateCommand),
    Uptime(UptimeCommand),
    Exit(ExitCommand),
    Copy(CopyCommand),
    Move(MoveCommand),
    Create(CreateCommand),
    Read(ReadCommand),
    Write(WriteCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], session: &mut SessionState) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, session),
            CommandType::Pwd(cmd) => cmd.execute(args, session),
            CommandType::Ls(cmd) => cmd.execute(args, session),
            CommandType::Rm(cmd) => cmd.execute(args, session),
            CommandType::Mkdir(cmd) => cmd.execute(args, session),
            CommandType::Rmdir(cmd) => cmd.execute(args, session),
            CommandType::Whoami(cmd) => cmd.execute(args, session),
            CommandType::Date(cmd) => cmd.execute(args, session),
            CommandType::Uptime(cmd) => cmd.execute(args, session),
            CommandType::Exit(cmd) => cmd.execute(args, session),
            CommandType::Copy(cmd) => cmd.execute(args, session),
            CommandType::Move(cmd) => cmd.execute(args, session),
            CommandType::Create(cmd) => cmd.execute(args, session),
            CommandType::Read(cmd) => cmd.execute(args, session),
            CommandType::Write(cmd) => cmd.execute(args, session),
        }
    }
}

/// Builtin registry plus the external-command fallthrough. The table is
/// built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
    quiet_mode: bool,
}

impl CommandExecutor {
    pub fn new(flags: &Flags) -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));
        commands.insert("ls", CommandType::Ls(LsCommand::new()));
        commands.insert("rm", CommandType::Rm(RmCommand::new()));
        commands.insert("mkdir", CommandType::Mkdir(MkdirCommand::new()));
        commands.insert("rmdir", CommandType::Rmdir(RmdirCommand::new()));
        commands.insert("whoami", CommandType::Whoami(WhoamiCommand::new()));
        commands.insert("date", CommandType::Date(DateCommand::new()));
        commands.insert("uptime", CommandType::Uptime(UptimeCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("copy", CommandType::Copy(CopyCommand::new()));
        commands.insert("move", CommandType::Move(MoveCommand::new()));
        commands.insert("create", CommandType::Create(CreateCommand::new()));
        commands.insert("read", CommandType::Read(ReadCommand::new()));
        commands.insert("write", CommandType::Write(WriteCommand::new()));

        CommandExecutor {
            commands,
            process_executor: ProcessExecutor::new(flags),
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Dispatches one command: a registry hit runs the builtin in-process,
    /// a miss falls through to the process launcher. A nonzero external
    /// exit status is reported but is not an error for the loop.
    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        session: &mut SessionState,
    ) -> Result<(), CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            cmd.execute(args, session)
        } else {
            let mut full_args = vec![command];
            full_args.extend(args.iter().map(|s| s.as_str()));
            let status = self.process_executor.spawn_process(&full_args)?;
            if status != 0 && !self.quiet_mode {
                eprintln!("minnow: {} exited with status {}", command, status);
            }
            Ok(())
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }
}
