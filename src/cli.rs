//! Command-line argument parsing for bitmind-agent

use clap::Parser;
use std::path::PathBuf;

/// bitmind-agent - run BitMind analysis actions against a chat message
#[derive(Parser, Debug)]
#[command(name = "bitmind-agent")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Message text; words are joined with spaces
    #[arg(value_name = "MESSAGE", required = true)]
    pub message: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Action to run, by name or simile (defaults to the first that accepts the message)
    #[arg(short, long, value_name = "ACTION")]
    pub action: Option<String>,

    /// Conversation id (defaults to a fresh id)
    #[arg(long, value_name = "ID")]
    pub conversation: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Message text as a single string
    pub fn message_text(&self) -> String {
        self.message.join(" ")
    }
}
