//! Lexical inspection of a candidate command for chained operations.
//!
//! Purely textual, no quoting or escaping awareness: a `;` inside a string
//! literal still counts. Over-approximating here biases the pipeline toward
//! asking for confirmation instead of silently running compound commands.

#[derive(Debug, Clone, Copy)]
pub struct ShellCommandAnalysis {
    pub has_newline: bool,
    pub has_and_chain: bool,
    pub has_or_chain: bool,
    pub has_separator: bool,
}

impl ShellCommandAnalysis {
    /// True when the command contains more than one chained operation.
    pub fn is_compound(&self) -> bool {
        self.has_newline || self.has_and_chain || self.has_or_chain || self.has_separator
    }
}

pub fn analyze(command: &str) -> ShellCommandAnalysis {
    ShellCommandAnalysis {
        has_newline: command.contains('\n'),
        has_and_chain: command.contains("&&"),
        has_or_chain: command.contains("||"),
        has_separator: command.contains(';'),
    }
}
