#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub content: String,
}

/// Conversation with the assistant. At most one prompt is in flight; its
/// request id is the id of the user message that asked it.
#[derive(Debug, Clone)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pending: Option<u64>,
    next_message_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            pending: None,
            next_message_id: 1,
        }
    }
}

impl ChatState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    fn alloc_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id = self.next_message_id.saturating_add(1);
        id
    }

    /// Records the user's prompt and returns the request id to send it under.
    /// Blank prompts, and prompts sent while a reply is outstanding, are dropped.
    pub fn submit(&mut self, prompt: &str) -> Option<u64> {
        if prompt.trim().is_empty() || self.pending.is_some() {
            return None;
        }

        let id = self.alloc_message_id();
        self.messages.push(ChatMessage {
            id,
            role: ChatRole::User,
            content: prompt.to_string(),
        });
        self.pending = Some(id);
        Some(id)
    }

    pub fn apply_reply(&mut self, request_id: u64, reply: String) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }

        let id = self.alloc_message_id();
        self.messages.push(ChatMessage {
            id,
            role: ChatRole::Assistant,
            content: reply,
        });
        self.pending = None;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/chat.rs"]
mod tests;
