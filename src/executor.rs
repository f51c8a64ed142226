//! Maps a (command, shell) pair to one blocking child-process invocation.
//!
//! The child inherits the caller's standard streams so interactive programs
//! invoked by the command work normally. No timeout: a hung child hangs the
//! tool, which is the accepted tradeoff for unbounded interactive commands.

use std::process::Command;

use log::debug;

use crate::error::AppError;
use crate::shell_resolver::{self, ShellKind};

/// Run `command` under the resolved shell and return the child's exit code
/// verbatim. A missing or unspawnable executable is a dispatch error, never
/// a silent zero.
pub fn run_command(command: &str, shell: ShellKind) -> Result<i32, AppError> {
    // The resolver runs before dispatch; re-resolve defensively if an `Auto`
    // slips through.
    let shell = match shell {
        ShellKind::Auto => shell_resolver::resolve(shell),
        other => other,
    };

    match shell {
        ShellKind::Powershell | ShellKind::Auto => spawn_blocking(
            &locate(&["pwsh", "powershell"]),
            &["-NoProfile", "-ExecutionPolicy", "Bypass", "-Command"],
            command,
        ),
        ShellKind::Cmd => spawn_blocking(&locate(&["cmd"]), &["/C"], command),
        ShellKind::Bash => spawn_blocking(&locate(&["bash"]), &["-lc"], command),
        ShellKind::Zsh => spawn_blocking(&locate(&["zsh"]), &["-lc"], command),
        ShellKind::Sh => spawn_blocking(&locate(&["sh"]), &["-lc"], command),
    }
}

/// Find the first candidate on the search path. Falls back to the bare last
/// name so the OS itself reports the spawn failure.
fn locate(candidates: &[&str]) -> String {
    for name in candidates {
        if let Ok(path) = which::which(name) {
            return path.to_string_lossy().into_owned();
        }
    }
    candidates.last().map(|s| s.to_string()).unwrap_or_default()
}

fn spawn_blocking(program: &str, args: &[&str], command: &str) -> Result<i32, AppError> {
    debug!("dispatching via {}: {}", program, command);

    let status = Command::new(program)
        .args(args)
        .arg(command)
        .status()
        .map_err(|e| AppError::Dispatch(format!("failed to launch {}: {}", program, e)))?;

    Ok(status.code().unwrap_or(-1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_is_returned_verbatim() {
        assert_eq!(run_command("exit 0", ShellKind::Sh).unwrap(), 0);
        assert_eq!(run_command("exit 3", ShellKind::Sh).unwrap(), 3);
    }

    #[test]
    fn test_missing_executable_is_a_dispatch_error() {
        let err = spawn_blocking("nlsh-test-missing-shell", &["-lc"], "echo hi").unwrap_err();
        match err {
            AppError::Dispatch(msg) => assert!(msg.contains("nlsh-test-missing-shell")),
            other => panic!("expected dispatch error, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_falls_back_to_bare_name() {
        assert_eq!(locate(&["nlsh-test-missing-shell"]), "nlsh-test-missing-shell");
    }

    #[test]
    fn test_locate_finds_sh_on_posix() {
        if cfg!(unix) {
            assert!(locate(&["sh"]).ends_with("sh"));
        }
    }
}
