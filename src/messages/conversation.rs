//! Conversation storage
//!
//! Append-only list of entries for a single session. An entry is either a
//! finished message or a pending typing-indicator marker keyed by the
//! backend request id it is waiting on. The welcome placeholder is rendered
//! whenever the list is empty, so the placeholder invariant holds by
//! construction.

use super::types::Message;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum ConversationEntry {
    Message(Message),
    /// Typing indicator shown while the request with this id is in flight
    Pending(Uuid),
}

impl ConversationEntry {
    pub fn as_message(&self) -> Option<&Message> {
        match self {
            ConversationEntry::Message(m) => Some(m),
            ConversationEntry::Pending(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ConversationEntry::Pending(_))
    }
}

#[derive(Debug, Clone)]
pub struct Conversation {
    entries: Arc<RwLock<Vec<ConversationEntry>>>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn push(&self, message: Message) {
        self.entries
            .write()
            .push(ConversationEntry::Message(message));
    }

    pub fn push_pending(&self, request_id: Uuid) {
        self.entries
            .write()
            .push(ConversationEntry::Pending(request_id));
    }

    /// Remove the pending marker for the given request, if it is still
    /// present. A reset may already have cleared it; that is fine.
    pub fn resolve_pending(&self, request_id: Uuid) {
        self.entries.write().retain(|entry| {
            !matches!(entry, ConversationEntry::Pending(id) if *id == request_id)
        });
    }

    pub fn entries(&self) -> Vec<ConversationEntry> {
        self.entries.read().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .read()
            .iter()
            .filter_map(|e| e.as_message().cloned())
            .collect()
    }

    pub fn has_pending(&self) -> bool {
        self.entries.read().iter().any(|e| e.is_pending())
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
