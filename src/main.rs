mod approval_gate;
mod cli;
mod config_manager;
mod error;
mod executor;
mod llm_gateway;
mod prompts;
mod sanitizer;
mod security;
mod shell_analysis;
mod shell_resolver;

use clap::{CommandFactory, Parser};
use log::debug;

use crate::approval_gate::{AbortStage, GateOptions, GateOutcome};
use crate::cli::{Cli, Commands};
use crate::config_manager::ConfigManager;
use crate::llm_gateway::OpenAiClient;

const EXIT_OK: i32 = 0;
const EXIT_NO_PROMPT: i32 = 1;
const EXIT_NO_API_KEY: i32 = 2;
const EXIT_GENERATION_FAILED: i32 = 3;
const EXIT_DANGER_ABORT: i32 = 4;
const EXIT_COMPOUND_ABORT: i32 = 5;
const EXIT_FINAL_ABORT: i32 = 6;
const EXIT_DISPATCH_FAILED: i32 = 127;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    match cli.command {
        Some(Commands::Token { value }) => {
            if let Err(e) = ConfigManager::set_api_key(&value) {
                eprintln!("Failed to store the token: {}", e);
                return EXIT_NO_API_KEY;
            }
            println!("Token saved.");
            return EXIT_OK;
        }
        Some(Commands::Model { name }) => {
            if let Err(e) = ConfigManager::set_model(&name) {
                eprintln!("Failed to store the model name: {}", e);
                return EXIT_NO_API_KEY;
            }
            println!("Model saved.");
            return EXIT_OK;
        }
        None => {}
    }

    let request = cli.prompt.join(" ").trim().to_string();
    if request.is_empty() {
        let _ = Cli::command().print_help();
        return EXIT_NO_PROMPT;
    }

    let Some(api_key) = ConfigManager::api_key() else {
        eprintln!(
            "Error: no OpenAI API key configured. Store one with:\n  nlsh token <YOUR_OPENAI_TOKEN>"
        );
        return EXIT_NO_API_KEY;
    };

    let shell = shell_resolver::resolve(cli.shell);
    let model = cli.model.unwrap_or_else(ConfigManager::model);
    debug!("resolved shell={} model={}", shell.name(), model);

    let provider = match OpenAiClient::new(api_key, model) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("Command generation failed: {}", e);
            return EXIT_GENERATION_FAILED;
        }
    };

    let command = match llm_gateway::generate_command(&provider, &request, shell).await {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Command generation failed: {}", e);
            return EXIT_GENERATION_FAILED;
        }
    };

    // Always shown before any confirmation or execution step.
    println!("Command: {}", command);

    let opts = GateOptions {
        assume_yes: cli.yes,
        dry_run: cli.dry_run,
    };
    match approval_gate::run_gate(&command, shell, opts, approval_gate::prompt_confirm) {
        Ok(GateOutcome::Executed(code)) => code,
        Ok(GateOutcome::DryRun) => EXIT_OK,
        Ok(GateOutcome::Aborted(AbortStage::Danger)) => EXIT_DANGER_ABORT,
        Ok(GateOutcome::Aborted(AbortStage::Compound)) => EXIT_COMPOUND_ABORT,
        Ok(GateOutcome::Aborted(AbortStage::Final)) => EXIT_FINAL_ABORT,
        Err(e) => {
            eprintln!("Execution failed: {}", e);
            EXIT_DISPATCH_FAILED
        }
    }
}
