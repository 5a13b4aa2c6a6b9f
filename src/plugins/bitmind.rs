//! BitMind deepfake detection
//!
//! `DETECT_IMAGE` sends the first link in a message to the detection
//! subnet and reports whether the image looks AI-generated.

use super::Plugin;
use crate::action::{Action, ActionExample, ActionResult};
use crate::client::BitmindClient;
use crate::error::{ActionError, Result};
use crate::extract::first_link_in;
use crate::format;
use crate::host::{ConversationState, Message, Settings};
use crate::logging::redact_secrets;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info};

pub const DETECT_IMAGE: &str = "DETECT_IMAGE";

const SIMILES: &[&str] = &[
    "ANALYZE_IMAGE",
    "BITMIND_DETECTION",
    "AI_DETECTION",
    "REAL_OR_FAKE",
];

/// Image detection action
pub struct DetectImage {
    client: BitmindClient,
}

impl DetectImage {
    pub fn new(client: BitmindClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Action for DetectImage {
    fn name(&self) -> &str {
        DETECT_IMAGE
    }

    fn description(&self) -> &str {
        "Detect if an image is AI-generated using BitMind API"
    }

    fn similes(&self) -> &[&'static str] {
        SIMILES
    }

    fn examples(&self) -> Vec<ActionExample> {
        vec![
            vec![
                Message::text("{{user1}}", "analyze this image: https://example.com/image.jpg"),
                Message::reply("{{agentName}}", "I'll analyze that image for you...", DETECT_IMAGE),
            ],
            vec![
                Message::text("{{user1}}", "is this image AI generated?"),
                Message::reply(
                    "{{agentName}}",
                    "Let me check if that image is AI generated...",
                    DETECT_IMAGE,
                ),
            ],
        ]
    }

    async fn validate(&self, settings: &dyn Settings, message: &Message) -> bool {
        info!("BitMind: Validating image input...");

        if first_link_in(message.text_content()).is_none() {
            error!("BitMind: No image URL found in message");
            return false;
        }

        if settings.bitmind_token().is_none() {
            error!("BitMind: API token not configured");
            return false;
        }

        info!("BitMind: Image URL and token found");
        true
    }

    async fn handle(
        &self,
        settings: &dyn Settings,
        message: &Message,
        _state: &ConversationState,
    ) -> Result<Option<ActionResult>> {
        if message.content.skip_bitmind_action {
            debug!("BitMind: Message asked to skip detection");
            return Ok(None);
        }

        info!("BitMind: Starting image detection...");

        let token = settings.bitmind_token().ok_or(ActionError::MissingCredential)?;
        let image_url = first_link_in(message.text_content()).ok_or(ActionError::NoLink)?;

        info!("BitMind: Analyzing image: {}", image_url);

        let detection = self
            .client
            .detect_image(token, image_url)
            .await
            .map_err(|e| {
                error!("BitMind: Detection error: {}", redact_secrets(&e.to_string()));
                ActionError::ImageDetection(e)
            })?;

        info!(
            is_ai = detection.is_ai,
            confidence = detection.confidence,
            "BitMind: Detection complete"
        );

        let text = format::image_verdict(detection.is_ai, detection.confidence);
        Ok(Some(ActionResult::image(
            text,
            detection.is_ai,
            detection.confidence,
        )))
    }
}

/// Plugin descriptor for BitMind synthetic content detection
pub fn bitmind_plugin(client: BitmindClient) -> Plugin {
    Plugin {
        name: "bitmind".to_string(),
        description: "BitMind API integration for synthetic content detection".to_string(),
        actions: vec![Arc::new(DetectImage::new(client))],
        evaluators: vec![],
        providers: vec![],
    }
}
