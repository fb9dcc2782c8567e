use std::process::{Command, Stdio};

use super::{signal, ProcessError};
use crate::flags::Flags;
use crate::path::PathExpander;

/// Spawns external programs resolved through `PATH` and waits for them in
/// the foreground. One attempt per invocation, no timeout.
#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
    path_expander: PathExpander,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Self {
        ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
            path_expander: PathExpander::new(),
        }
    }

    /// Launches `args[0]` with the remaining arguments, inheriting the
    /// shell's standard streams and environment, and blocks until the
    /// child exits. Returns the child's exit code.
    ///
    /// A spawn failure never leaves a second shell loop running: the child
    /// image either starts the requested program or never exists.
    pub fn spawn_process(&self, args: &[&str]) -> Result<i32, ProcessError> {
        let expanded_args: Vec<String> = args
            .iter()
            .map(|&arg| {
                if arg.starts_with('~') {
                    self.path_expander
                        .expand(arg)
                        .map(|p| p.to_string_lossy().into_owned())
                        .unwrap_or_else(|_| arg.to_owned())
                } else {
                    arg.to_owned()
                }
            })
            .collect();

        let mut command = Command::new(&expanded_args[0]);
        command
            .args(&expanded_args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(args[0].to_string()));
            }
            Err(e) => return Err(ProcessError::Spawn(e.to_string())),
        };

        // Keep Ctrl-C out of the shell while the child owns the terminal.
        signal::setup_signal_handlers()?;

        match child.wait() {
            Ok(status) => {
                let code = status.code().unwrap_or_else(|| {
                    if !self.quiet_mode {
                        eprintln!("minnow: {} terminated by signal", args[0]);
                    }
                    -1
                });
                Ok(code)
            }
            Err(e) => Err(ProcessError::Wait(e.to_string())),
        }
    }
}
