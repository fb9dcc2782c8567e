use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    Spawn(String),
    Wait(String),
    SignalError(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::Spawn(msg) => write!(f, "failed to launch: {}", msg),
            ProcessError::Wait(msg) => write!(f, "failed to wait for child: {}", msg),
            ProcessError::SignalError(msg) => write!(f, "signal error: {}", msg),
        }
    }
}
