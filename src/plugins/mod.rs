//! Plugins
//!
//! A plugin is a static bundle of actions the host loads. The registry
//! finds actions by name or simile and runs the validate → handle cycle,
//! delivering results through a host callback.

mod bitmind;
mod matrix;

pub use bitmind::{bitmind_plugin, DetectImage, DETECT_IMAGE};
pub use matrix::{matrix_plugin, DetectMatrix, DETECT_MATRIX};

use crate::action::{Action, ActionResult};
use crate::client::BitmindClient;
use crate::error::{ActionError, Result};
use crate::host::{ConversationState, Message, Settings};
use std::sync::Arc;
use tracing::debug;

/// Plugin descriptor
pub struct Plugin {
    pub name: String,
    pub description: String,
    pub actions: Vec<Arc<dyn Action>>,
    /// Unused evaluator slot
    pub evaluators: Vec<String>,
    /// Unused provider slot
    pub providers: Vec<String>,
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .field(
                "actions",
                &self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Loaded plugins
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
}

impl PluginRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with both BitMind plugins sharing one client
    pub fn with_bitmind(client: BitmindClient) -> Self {
        let mut registry = Self::new();
        registry.register(bitmind_plugin(client.clone()));
        registry.register(matrix_plugin(client));
        registry
    }

    /// Register a plugin
    pub fn register(&mut self, plugin: Plugin) {
        debug!(
            "Registered plugin '{}' with {} action(s)",
            plugin.name,
            plugin.actions.len()
        );
        self.plugins.push(plugin);
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// All actions, in registration order
    pub fn actions(&self) -> impl Iterator<Item = &Arc<dyn Action>> {
        self.plugins.iter().flat_map(|p| p.actions.iter())
    }

    /// Find an action by name or simile
    pub fn find_action(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions().find(|a| a.answers_to(name)).cloned()
    }

    /// First action whose validation gate accepts the message
    pub async fn select(
        &self,
        settings: &dyn Settings,
        message: &Message,
    ) -> Option<Arc<dyn Action>> {
        for action in self.actions() {
            if action.validate(settings, message).await {
                return Some(Arc::clone(action));
            }
        }
        None
    }

    /// Run an action by name: validate, handle, then hand a result to `callback`.
    ///
    /// A rejected message yields `Ok(None)` without calling the handler. The
    /// callback only ever sees successful results.
    pub async fn dispatch<F>(
        &self,
        name: &str,
        settings: &dyn Settings,
        message: &Message,
        state: &ConversationState,
        callback: F,
    ) -> Result<Option<ActionResult>>
    where
        F: FnOnce(&ActionResult),
    {
        let action = self
            .find_action(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;

        if !action.validate(settings, message).await {
            debug!("Action {} rejected the message", action.name());
            return Ok(None);
        }

        let result = action.handle(settings, message, state).await?;
        if let Some(ref result) = result {
            callback(result);
        }
        Ok(result)
    }
}
