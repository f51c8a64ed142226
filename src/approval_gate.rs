//! Confirmation workflow for generated commands.
//!
//! An explicit state machine: DangerCheck -> CompoundCheck -> DryRunGate ->
//! FinalConfirm -> Executed/Aborted. Each gate takes the relevant verdict
//! plus the global "always yes" override, so every abort path is
//! independently testable and carries its own exit code.

use std::io::{self, Write};

use crate::error::AppError;
use crate::executor;
use crate::security::CommandClassifier;
use crate::shell_analysis;
use crate::shell_resolver::ShellKind;

/// Which gate rejected the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortStage {
    Danger,
    Compound,
    Final,
}

#[derive(Debug)]
pub enum GateOutcome {
    /// Dispatched; carries the child's exit code verbatim.
    Executed(i32),
    /// Dry-run requested: the command was shown but never dispatched.
    DryRun,
    Aborted(AbortStage),
}

#[derive(Debug, Clone, Copy)]
pub struct GateOptions {
    pub assume_yes: bool,
    pub dry_run: bool,
}

enum GateState {
    Generated,
    DangerCheck,
    CompoundCheck,
    DryRunGate,
    FinalConfirm,
}

/// Walk the command through every gate. `confirm` is injected so the prompt
/// can be driven by tests; the CLI passes [`prompt_confirm`].
pub fn run_gate(
    command: &str,
    shell: ShellKind,
    opts: GateOptions,
    mut confirm: impl FnMut(&str) -> bool,
) -> Result<GateOutcome, AppError> {
    let mut state = GateState::Generated;

    loop {
        state = match state {
            GateState::Generated => GateState::DangerCheck,
            GateState::DangerCheck => {
                let verdict = CommandClassifier::classify(command);
                if verdict.dangerous {
                    println!(
                        "WARNING: potentially destructive command (matched pattern: {}).",
                        verdict.matched.unwrap_or("?")
                    );
                    if !opts.assume_yes && !confirm("Run it anyway? [Y/n]: ") {
                        return Ok(GateOutcome::Aborted(AbortStage::Danger));
                    }
                }
                GateState::CompoundCheck
            }
            GateState::CompoundCheck => {
                let analysis = shell_analysis::analyze(command);
                if analysis.is_compound()
                    && !opts.assume_yes
                    && !confirm("Compound command detected (&&, ; or multiple lines). Run? [Y/n]: ")
                {
                    return Ok(GateOutcome::Aborted(AbortStage::Compound));
                }
                GateState::DryRunGate
            }
            GateState::DryRunGate => {
                if opts.dry_run {
                    return Ok(GateOutcome::DryRun);
                }
                GateState::FinalConfirm
            }
            GateState::FinalConfirm => {
                if !opts.assume_yes && !confirm("Run the command? [Y/n]: ") {
                    return Ok(GateOutcome::Aborted(AbortStage::Final));
                }
                let code = executor::run_command(command, shell)?;
                return Ok(GateOutcome::Executed(code));
            }
        };
    }
}

/// Parse a confirmation answer. Empty input means yes (prompts are opt-out);
/// recognized yes/no tokens are accepted in English and Russian; anything
/// else is a no.
pub fn parse_answer(answer: &str) -> bool {
    let ans = answer.trim().to_lowercase();
    if ans.is_empty() {
        return true;
    }
    matches!(ans.as_str(), "y" | "yes" | "д" | "да")
}

/// Interactive prompt on stdin. EOF or a read error counts as a refusal.
pub fn prompt_confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(0) => false,
        Ok(_) => parse_answer(&answer),
        Err(_) => false,
    }
}
