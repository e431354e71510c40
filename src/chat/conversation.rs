//! Conversation view state
//!
//! Pure, append-only message list plus the viewport bookkeeping the chat
//! screen needs: while the user is scrolled away from the bottom,
//! incoming messages bump an unseen counter instead of auto-scrolling;
//! reaching the bottom (by scroll or by tapping the counter) resets it.

use crate::models::ChatMessage;

/// A single group conversation's view state
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    at_bottom: bool,
    unseen: u32,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            at_bottom: true,
            unseen: 0,
        }
    }

    /// Replace the message list with fetched history
    pub fn replay(&mut self, history: Vec<ChatMessage>) {
        self.messages = history;
    }

    /// Append one live message. Returns true when the viewport should
    /// auto-scroll; otherwise the unseen counter was incremented.
    pub fn append(&mut self, message: ChatMessage) -> bool {
        self.messages.push(message);
        if self.at_bottom {
            true
        } else {
            self.unseen += 1;
            false
        }
    }

    /// Viewport position update from the scroll handler. Reaching the
    /// bottom resets the unseen counter.
    pub fn set_at_bottom(&mut self, at_bottom: bool) {
        self.at_bottom = at_bottom;
        if at_bottom {
            self.unseen = 0;
        }
    }

    /// Tap on the unseen-message badge: jump to bottom and reset
    pub fn jump_to_bottom(&mut self) {
        self.set_at_bottom(true);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn unseen_count(&self) -> u32 {
        self.unseen
    }

    pub fn is_at_bottom(&self) -> bool {
        self.at_bottom
    }
}
