use crate::domain::{ChatId, MessageId, MessageRef};

/// Inbound text message, stripped of messenger-specific fields.
#[derive(Clone, Debug)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
    pub text: String,
}

impl TextMessage {
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            chat_id: self.chat_id,
            message_id: self.message_id,
        }
    }
}

/// Capabilities / feature flags of a messenger implementation.
#[derive(Clone, Copy, Debug)]
pub struct MessagingCapabilities {
    pub supports_replies: bool,
}
