//! Prompt templates for command synthesis.

pub const COMMAND_SYNTHESIS_PROMPT: &str = r#"You are a shell command synthesis engine.
Given a request in any natural language, generate exactly ONE single-line command for the stated OS and shell.
Output strictly the command alone: no explanations, no surrounding quotes, no backticks, no code formatting.
Use PowerShell syntax on Windows and bash syntax on Linux/macOS.
Avoid destructive actions; never suggest disk formatting or similar operations.
If the request is ambiguous, pick the most likely safe interpretation."#;

pub fn build_user_prompt(request: &str, os_name: &str, shell: &str, cwd: &str) -> String {
    format!(
        "OS: {os_name}\nShell: {shell}\nCurrent directory: {cwd}\nRequest: {request}\n\nOutput exactly one command."
    )
}
