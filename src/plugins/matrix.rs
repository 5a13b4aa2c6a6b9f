//! Trinity Matrix URL scoring
//!
//! `DETECT_MATRIX` scores the first link in a message for AI influence.
//! Only one analysis runs per conversation at a time.

use super::Plugin;
use crate::action::{Action, ActionExample, ActionResult};
use crate::client::BitmindClient;
use crate::error::{ActionError, Result};
use crate::extract::first_link_in;
use crate::format;
use crate::guard::InFlightRegistry;
use crate::host::{ConversationState, Message, Settings};
use crate::logging::redact_secrets;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

pub const DETECT_MATRIX: &str = "DETECT_MATRIX";

const SIMILES: &[&str] = &["ANALYZE_URL", "CHECK_AI_SCORE", "MATRIX_SCAN", "TRINITY_CHECK"];

/// URL influence scoring action
pub struct DetectMatrix {
    client: BitmindClient,
    in_flight: InFlightRegistry,
}

impl DetectMatrix {
    pub fn new(client: BitmindClient) -> Self {
        Self {
            client,
            in_flight: InFlightRegistry::new(),
        }
    }

    /// Conversations currently being analyzed
    pub fn in_flight(&self) -> &InFlightRegistry {
        &self.in_flight
    }
}

#[async_trait]
impl Action for DetectMatrix {
    fn name(&self) -> &str {
        DETECT_MATRIX
    }

    fn description(&self) -> &str {
        "Analyze URL for AI influence using BitMind's Trinity Matrix"
    }

    fn similes(&self) -> &[&'static str] {
        SIMILES
    }

    fn examples(&self) -> Vec<ActionExample> {
        vec![
            vec![
                Message::text("{{user1}}", "check this site: https://example.com"),
                Message::reply("{{agentName}}", "Calling BitMind's Trinity Matrix...", DETECT_MATRIX),
            ],
            vec![
                Message::text(
                    "{{user1}}",
                    "what's the AI score for this URL? https://example.com",
                ),
                Message::reply("{{agentName}}", "Calling BitMind's Trinity Matrix...", DETECT_MATRIX),
            ],
        ]
    }

    async fn validate(&self, settings: &dyn Settings, message: &Message) -> bool {
        info!("Trinity Matrix: Validating URL input...");

        if first_link_in(message.text_content()).is_none() {
            error!("Trinity Matrix: No URL found in message");
            return false;
        }

        if settings.bitmind_token().is_none() {
            error!("Trinity Matrix: API token not configured");
            return false;
        }

        info!("Trinity Matrix: URL and token found");
        true
    }

    async fn handle(
        &self,
        settings: &dyn Settings,
        message: &Message,
        state: &ConversationState,
    ) -> Result<Option<ActionResult>> {
        let Some(_slot) = self.in_flight.try_acquire(&state.conversation_id) else {
            debug!("Trinity Matrix: Analysis already running, skipping");
            return Ok(None);
        };

        info!("Trinity Matrix: Starting analysis...");

        let token = settings.bitmind_token().ok_or(ActionError::MissingCredential)?;
        let url = first_link_in(message.text_content()).ok_or(ActionError::NoLink)?;

        info!("Trinity Matrix: Analyzing URL: {}", url);

        let result = self.client.ai_score(token, url).await.map_err(|e| {
            error!("Trinity Matrix: Analysis error: {}", redact_secrets(&e.to_string()));
            ActionError::UrlAnalysis(e)
        })?;

        info!(score = result.score, "Trinity Matrix: Analysis complete");

        Ok(Some(ActionResult::influence(
            format::influence_report(result.score),
            result.score,
        )))
    }
}

/// Plugin descriptor for Trinity Matrix influence detection
pub fn matrix_plugin(client: BitmindClient) -> Plugin {
    Plugin {
        name: "matrix".to_string(),
        description: "BitMind Trinity Matrix integration for AI influence detection".to_string(),
        actions: vec![Arc::new(DetectMatrix::new(client))],
        evaluators: vec![],
        providers: vec![],
    }
}
