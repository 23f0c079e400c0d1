//! The command hand-off file.
//!
//! blast never runs a command itself. The shell wrapper sources the hand-off
//! file once the process exits, so it is emptied at startup and only filled
//! when a bookmark is committed.

use log::debug;

use crate::error::Result;
use crate::store::write_atomically;

/// Empties the hand-off file so a stale command cannot run.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn clear_command(path: &str) -> Result<()> {
    write_atomically("command", path, "")
}

/// Hands `command` off to the invoking shell.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_command(path: &str, command: &str) -> Result<()> {
    debug!("Handing off command to `{path}`");
    write_atomically("command", path, command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_clear() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("command.sh");
        let path = path.to_str().unwrap();

        write_command(path, "kubectl apply -f prod.yaml").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "kubectl apply -f prod.yaml");

        clear_command(path).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_clear_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blast/command.sh");
        let path = path.to_str().unwrap();

        clear_command(path).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }
}
