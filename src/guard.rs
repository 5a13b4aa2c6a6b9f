//! Per-conversation single-flight guard
//!
//! An action holding an [`InFlight`] token for a conversation blocks other
//! invocations in that conversation until the token is dropped.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Registry of conversations with an invocation in flight
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    active: Arc<Mutex<HashSet<String>>>,
}

/// Owned slot for one conversation, released on drop
#[derive(Debug)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<String>>>,
    conversation_id: String,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `conversation_id`; `None` if already taken
    pub fn try_acquire(&self, conversation_id: &str) -> Option<InFlight> {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if !active.insert(conversation_id.to_string()) {
            debug!("Conversation {} already has an analysis in flight", conversation_id);
            return None;
        }

        Some(InFlight {
            active: Arc::clone(&self.active),
            conversation_id: conversation_id.to_string(),
        })
    }

    /// Whether a conversation currently holds a slot
    pub fn is_active(&self, conversation_id: &str) -> bool {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(conversation_id)
    }
}

impl InFlight {
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        active.remove(&self.conversation_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails() {
        let registry = InFlightRegistry::new();
        let token = registry.try_acquire("c1").unwrap();
        assert_eq!(token.conversation_id(), "c1");
        assert!(registry.try_acquire("c1").is_none());
    }

    #[test]
    fn test_released_on_drop() {
        let registry = InFlightRegistry::new();
        {
            let _token = registry.try_acquire("c1").unwrap();
            assert!(registry.is_active("c1"));
        }
        assert!(!registry.is_active("c1"));
        assert!(registry.try_acquire("c1").is_some());
    }

    #[test]
    fn test_conversations_are_independent() {
        let registry = InFlightRegistry::new();
        let _a = registry.try_acquire("a").unwrap();
        let _b = registry.try_acquire("b").unwrap();
        assert!(registry.is_active("a"));
        assert!(registry.is_active("b"));
    }

    #[test]
    fn test_clones_share_state() {
        let registry = InFlightRegistry::new();
        let other = registry.clone();
        let _token = registry.try_acquire("c1").unwrap();
        assert!(other.try_acquire("c1").is_none());
    }

    #[test]
    fn test_released_after_panic() {
        let registry = InFlightRegistry::new();
        let inner = registry.clone();
        let result = std::thread::spawn(move || {
            let _token = inner.try_acquire("c1").unwrap();
            panic!("boom");
        })
        .join();
        assert!(result.is_err());
        assert!(!registry.is_active("c1"));
    }
}
