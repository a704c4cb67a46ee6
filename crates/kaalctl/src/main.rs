//! KAAL Control - CLI client for the KAAL responder

use clap::Parser;
use kaalctl::cli::{join_words, Cli, Commands};
use kaalctl::commands;
use kaalctl::errors::exit_code_for;
use owo_colors::OwoColorize;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Ask { text } => commands::ask(&cli.server, &join_words(text), cli.json).await,
        Commands::Local { text, language } => {
            commands::local(&join_words(text), language, cli.json).await
        }
        Commands::Health => commands::health(&cli.server, cli.json).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(exit_code_for(&e));
    }
}
