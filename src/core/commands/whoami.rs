use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::env;

#[derive(Clone, Default)]
pub struct WhoamiCommand;

impl WhoamiCommand {
    pub fn new() -> Self {
        Self
    }
}

fn user_from_env() -> Option<String> {
    env::var("USER").or_else(|_| env::var("LOGNAME")).ok()
}

impl Command for WhoamiCommand {
    fn execute(&self, _args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        match user_from_env() {
            Some(user) => {
                println!("{}", user);
                Ok(())
            }
            None => Err(CommandError::ExecutionError(
                "whoami: neither USER nor LOGNAME is set".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn test_user_from_env_prefers_user() {
        env::set_var("USER", "alice");
        env::set_var("LOGNAME", "bob");
        assert_eq!(user_from_env().as_deref(), Some("alice"));
    }

    #[test]
    #[serial(env)]
    fn test_user_from_env_falls_back_to_logname() {
        env::remove_var("USER");
        env::set_var("LOGNAME", "bob");
        assert_eq!(user_from_env().as_deref(), Some("bob"));
        env::set_var("USER", "restored");
    }

    #[test]
    #[serial(env)]
    fn test_whoami_errors_without_either_var() {
        let saved_user = env::var("USER").ok();
        let saved_logname = env::var("LOGNAME").ok();
        env::remove_var("USER");
        env::remove_var("LOGNAME");

        let cmd = WhoamiCommand::new();
        let mut session = SessionState::new().unwrap();
        let result = cmd.execute(&[], &mut session);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));

        if let Some(v) = saved_user {
            env::set_var("USER", v);
        }
        if let Some(v) = saved_logname {
            env::set_var("LOGNAME", v);
        }
    }
}
