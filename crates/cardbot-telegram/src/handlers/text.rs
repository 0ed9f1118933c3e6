use std::sync::Arc;

use teloxide::prelude::*;
use tracing::warn;

use cardbot_core::{
    domain::{ChatId, MessageId},
    messaging::types::TextMessage,
};

use crate::router::AppState;

/// Core view of a plain text message. Captions on media are not text.
pub fn text_message(msg: &Message) -> Option<TextMessage> {
    let text = msg.text()?;
    Some(TextMessage {
        chat_id: ChatId(msg.chat.id.0),
        message_id: MessageId(msg.id.0),
        text: text.to_string(),
    })
}

pub async fn handle_text(incoming: TextMessage, state: Arc<AppState>) -> ResponseResult<()> {
    if let Err(e) = state
        .handler
        .respond(state.messenger.as_ref(), &incoming)
        .await
    {
        warn!(chat_id = incoming.chat_id.0, "failed to send card reply: {e}");
    }

    Ok(())
}
