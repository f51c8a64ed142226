use clap::ValueEnum;

/// Target shell for generation and dispatch. `Auto` is a request, never a
/// final value: it must be resolved to a concrete shell before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShellKind {
    Auto,
    Powershell,
    Cmd,
    Bash,
    Zsh,
    Sh,
}

impl ShellKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShellKind::Auto => "auto",
            ShellKind::Powershell => "powershell",
            ShellKind::Cmd => "cmd",
            ShellKind::Bash => "bash",
            ShellKind::Zsh => "zsh",
            ShellKind::Sh => "sh",
        }
    }
}

/// Resolve the target shell for this host. An explicit preference always
/// wins, even if the executable turns out to be missing (that surfaces at
/// dispatch, not here).
pub fn resolve(preferred: ShellKind) -> ShellKind {
    resolve_with(preferred, cfg!(windows), |exe| which::which(exe).is_ok())
}

fn resolve_with(preferred: ShellKind, windows: bool, probe: impl Fn(&str) -> bool) -> ShellKind {
    if preferred != ShellKind::Auto {
        return preferred;
    }
    if windows {
        return ShellKind::Powershell;
    }
    if probe("bash") {
        ShellKind::Bash
    } else if probe("zsh") {
        ShellKind::Zsh
    } else {
        // POSIX baseline, assumed always present.
        ShellKind::Sh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preference_always_wins() {
        for shell in [
            ShellKind::Powershell,
            ShellKind::Cmd,
            ShellKind::Bash,
            ShellKind::Zsh,
            ShellKind::Sh,
        ] {
            // Platform and availability are ignored entirely.
            assert_eq!(resolve_with(shell, true, |_| false), shell);
            assert_eq!(resolve_with(shell, false, |_| true), shell);
        }
    }

    #[test]
    fn test_auto_on_windows_is_powershell() {
        assert_eq!(
            resolve_with(ShellKind::Auto, true, |_| false),
            ShellKind::Powershell
        );
    }

    #[test]
    fn test_auto_prefers_bash_then_zsh() {
        assert_eq!(
            resolve_with(ShellKind::Auto, false, |exe| exe == "bash"),
            ShellKind::Bash
        );
        assert_eq!(
            resolve_with(ShellKind::Auto, false, |exe| exe == "zsh"),
            ShellKind::Zsh
        );
    }

    #[test]
    fn test_auto_falls_back_to_sh() {
        // Only `sh` on the search path.
        assert_eq!(
            resolve_with(ShellKind::Auto, false, |exe| exe == "sh"),
            ShellKind::Sh
        );
        // Nothing on the search path at all: still `sh`.
        assert_eq!(
            resolve_with(ShellKind::Auto, false, |_| false),
            ShellKind::Sh
        );
    }
}
