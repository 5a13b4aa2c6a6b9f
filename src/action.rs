//! Action contract
//!
//! An action is a named unit the host can invoke: a cheap `validate` gate
//! followed by a `handle` call that does the actual work.

use crate::error::Result;
use crate::host::{ConversationState, Message, Settings};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of a successful action invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    /// Human-readable reply
    pub text: String,
    /// Image verdict
    #[serde(default, rename = "isAI", skip_serializing_if = "Option::is_none")]
    pub is_ai: Option<bool>,
    /// Confidence of AI generation, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// URL influence score, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ActionResult {
    pub fn image(text: String, is_ai: bool, confidence: f64) -> Self {
        Self {
            text,
            is_ai: Some(is_ai),
            confidence: Some(confidence),
            score: None,
        }
    }

    pub fn influence(text: String, score: f64) -> Self {
        Self {
            text,
            is_ai: None,
            confidence: None,
            score: Some(score),
        }
    }
}

/// One few-shot example: what a user says and how the agent answers
pub type ActionExample = Vec<Message>;

/// A host-invocable action
#[async_trait]
pub trait Action: Send + Sync {
    /// Stable identifier, e.g. `DETECT_IMAGE`
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Alternate names for intent matching
    fn similes(&self) -> &[&'static str];

    /// Few-shot guidance for the host; never executed here
    fn examples(&self) -> Vec<ActionExample>;

    /// Whether the handler should run for this message. Never performs I/O.
    async fn validate(&self, settings: &dyn Settings, message: &Message) -> bool;

    /// Run the action.
    ///
    /// `Ok(None)` means the action chose not to produce a reply.
    async fn handle(
        &self,
        settings: &dyn Settings,
        message: &Message,
        state: &ConversationState,
    ) -> Result<Option<ActionResult>>;

    /// Whether `name` refers to this action, by name or simile
    fn answers_to(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
            || self.similes().iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}
