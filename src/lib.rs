//! bitmind-actions - agent actions for BitMind content analysis
//!
//! Two plugins for a conversational agent host: `bitmind` detects
//! AI-generated images and `matrix` scores URLs for AI influence. Each
//! action pulls the first link out of a chat message, posts it to the
//! matching BitMind endpoint and turns the reply into a sentence.

pub mod action;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod guard;
pub mod host;
pub mod logging;
pub mod plugins;

pub use action::{Action, ActionExample, ActionResult};
pub use client::{BitmindClient, Endpoints, ImageDetection, InfluenceScore};
pub use config::Config;
pub use error::{ActionError, ApiError, ConfigError};
pub use host::{ConversationState, Message, Settings};
pub use plugins::{bitmind_plugin, matrix_plugin, Plugin, PluginRegistry};
