use clap::{Parser, Subcommand};

use crate::shell_resolver::ShellKind;

/// Turn a natural-language request into a shell command, confirm it, run it.
#[derive(Parser)]
#[command(name = "nlsh", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Execute immediately, without asking for confirmation.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Only show the generated command, do not execute it.
    #[arg(long)]
    pub dry_run: bool,

    /// Target shell. Detected automatically by default.
    #[arg(long, value_enum, default_value_t = ShellKind::Auto)]
    pub shell: ShellKind,

    /// OpenAI model override (also settable via NLSH_MODEL or the config file).
    #[arg(long)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// The request, in natural language.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub prompt: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the OpenAI API key in the config file.
    Token {
        /// The OpenAI token (sk-...).
        value: String,
    },
    /// Store the default model name in the config file.
    Model {
        /// Model name, e.g. gpt-4.1.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_request_is_collected() {
        let cli = Cli::parse_from(["nlsh", "show", "all", "open", "ports"]);
        assert_eq!(cli.prompt.join(" "), "show all open ports");
        assert!(cli.command.is_none());
        assert!(!cli.yes);
    }

    #[test]
    fn test_flags_before_request() {
        let cli = Cli::parse_from(["nlsh", "-y", "--dry-run", "--shell", "zsh", "list files"]);
        assert!(cli.yes);
        assert!(cli.dry_run);
        assert_eq!(cli.shell, ShellKind::Zsh);
        assert_eq!(cli.prompt.join(" "), "list files");
    }

    #[test]
    fn test_token_subcommand() {
        let cli = Cli::parse_from(["nlsh", "token", "sk-test"]);
        match cli.command {
            Some(Commands::Token { value }) => assert_eq!(value, "sk-test"),
            _ => panic!("expected token subcommand"),
        }
    }

    #[test]
    fn test_model_subcommand() {
        let cli = Cli::parse_from(["nlsh", "model", "gpt-4.1"]);
        match cli.command {
            Some(Commands::Model { name }) => assert_eq!(name, "gpt-4.1"),
            _ => panic!("expected model subcommand"),
        }
    }

    #[test]
    fn test_shell_defaults_to_auto() {
        let cli = Cli::parse_from(["nlsh", "anything"]);
        assert_eq!(cli.shell, ShellKind::Auto);
    }
}
