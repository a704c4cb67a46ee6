//! Command-line definition for kaalctl

use crate::client::DEFAULT_SERVER;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kaalctl")]
#[command(about = "KAAL Assistant - talk to the KAAL responder", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Daemon base URL
    #[arg(long, global = true, env = "KAAL_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Print the raw reply JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send a command to the running daemon
    Ask {
        /// What to say, e.g. "open github"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Answer a command in-process, without the daemon
    Local {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Wikipedia language edition
        #[arg(long, default_value = "en")]
        language: String,
    },

    /// Show daemon health
    Health,
}

/// Join command words back into one utterance
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
