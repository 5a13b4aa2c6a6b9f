//! Host-facing types
//!
//! Narrow, read-only views of what the agent runtime hands to an action:
//! the incoming message, the secret store and the conversation state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Secret key holding the BitMind bearer token
pub const BITMIND_SECRET: &str = "bitmind";

/// Body of a chat message
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Free text of the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Action named by an agent reply (used in examples)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Ask the image detector to stand down for this message
    #[serde(default, rename = "skipBitMindAction")]
    pub skip_bitmind_action: bool,
}

/// A chat message as seen by an action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    /// Speaker of the message
    #[serde(default)]
    pub user: String,
    pub content: Content,
}

impl Message {
    /// Create a message with only text set
    pub fn text(user: &str, text: &str) -> Self {
        Self {
            user: user.to_string(),
            content: Content {
                text: Some(text.to_string()),
                ..Default::default()
            },
        }
    }

    /// Agent reply naming the action it triggered
    pub fn reply(user: &str, text: &str, action: &str) -> Self {
        Self {
            user: user.to_string(),
            content: Content {
                text: Some(text.to_string()),
                action: Some(action.to_string()),
                ..Default::default()
            },
        }
    }

    /// Message text, if present
    pub fn text_content(&self) -> Option<&str> {
        self.content.text.as_deref()
    }
}

/// Read access to the host's secret store
pub trait Settings: Send + Sync {
    /// Look up a secret by key
    fn secret(&self, key: &str) -> Option<&str>;

    /// The BitMind token, treating an empty string as absent
    fn bitmind_token(&self) -> Option<&str> {
        self.secret(BITMIND_SECRET).filter(|s| !s.is_empty())
    }
}

impl Settings for HashMap<String, String> {
    fn secret(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Per-conversation state shared across action invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    pub conversation_id: String,
}

impl ConversationState {
    pub fn new(conversation_id: &str) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
        }
    }
}
