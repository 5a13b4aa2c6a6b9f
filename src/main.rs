//! bitmind-agent - a minimal host for the BitMind actions
//!
//! Loads configuration, picks an action for the message and prints its reply.

use anyhow::{bail, Context, Result};
use bitmind_actions::logging::init_logging;
use bitmind_actions::{BitmindClient, Config, ConversationState, Message, PluginRegistry};
use clap::Parser;
use tracing::{error, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.debug, false);

    info!("Starting bitmind-agent v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let client = BitmindClient::new(config.endpoints.clone())?;
    let registry = PluginRegistry::with_bitmind(client);

    let message = Message::text("user", &args.message_text());
    let conversation_id = args
        .conversation
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let state = ConversationState::new(&conversation_id);

    let action_name = match &args.action {
        Some(name) => name.clone(),
        None => match registry.select(&config, &message).await {
            Some(action) => action.name().to_string(),
            None => bail!("No action accepts this message (is there a URL and a configured token?)"),
        },
    };

    info!("Running {} for conversation {}", action_name, conversation_id);

    let json = args.json;
    let outcome = registry
        .dispatch(&action_name, &config, &message, &state, |result| {
            if json {
                match serde_json::to_string_pretty(result) {
                    Ok(out) => println!("{}", out),
                    Err(e) => error!("Failed to serialize result: {}", e),
                }
            } else {
                println!("{}", result.text);
            }
        })
        .await;

    match outcome {
        Ok(Some(_)) => Ok(()),
        Ok(None) => bail!("{} produced no result for this message", action_name),
        Err(e) => {
            error!("Action failed: {}", e);
            Err(e.into())
        }
    }
}
