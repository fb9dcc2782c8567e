use super::{Command, CommandError};
use crate::core::state::SessionState;
use std::fs;
use std::path::Path;

const UPTIME_SOURCE: &str = "/proc/uptime";

#[derive(Clone, Default)]
pub struct UptimeCommand;

impl UptimeCommand {
    pub fn new() -> Self {
        Self
    }
}

/// First field of the uptime source: elapsed seconds since boot.
fn read_uptime_secs(source: &Path) -> Result<u64, String> {
    let raw = fs::read_to_string(source).map_err(|e| e.to_string())?;
    raw.split_whitespace()
        .next()
        .and_then(|field| field.parse::<f64>().ok())
        .map(|secs| secs as u64)
        .ok_or_else(|| format!("malformed uptime data in {}", source.display()))
}

fn format_uptime(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    format!("up {} days, {} hours, {} minutes", days, hours, minutes)
}

impl Command for UptimeCommand {
    fn execute(&self, _args: &[String], _session: &mut SessionState) -> Result<(), CommandError> {
        let secs = read_uptime_secs(Path::new(UPTIME_SOURCE))
            .map_err(|e| CommandError::ExecutionError(format!("uptime: {}", e)))?;
        println!("{}", format_uptime(secs));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_uptime(0), "up 0 days, 0 hours, 0 minutes");
    }

    #[test]
    fn test_format_rollover() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let secs = 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5;
        assert_eq!(format_uptime(secs), "up 2 days, 3 hours, 4 minutes");
    }

    #[test]
    fn test_read_uptime_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("uptime");
        fs::write(&source, "12345.67 54321.00\n").unwrap();
        assert_eq!(read_uptime_secs(&source).unwrap(), 12345);
    }

    #[test]
    fn test_read_uptime_missing_source() {
        assert!(read_uptime_secs(Path::new("/nonexistent/uptime")).is_err());
    }

    #[test]
    fn test_read_uptime_malformed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = temp_dir.path().join("uptime");
        fs::write(&source, "not-a-number\n").unwrap();
        assert!(read_uptime_secs(&source).is_err());
    }
}
