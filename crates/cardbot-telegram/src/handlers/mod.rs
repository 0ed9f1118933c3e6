//! Telegram update handlers.
//!
//! Handlers convert teloxide types into `cardbot-core` messages and hand them to the
//! core card query handler. They never fail the dispatcher: errors are logged.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use crate::router::AppState;

mod text;

pub use text::text_message;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    // Captions, stickers, media etc. are ignored.
    let Some(incoming) = text_message(&msg) else {
        return Ok(());
    };

    text::handle_text(incoming, state).await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use cardbot_core::{
        domain::{ChatId, MessageId, MessageRef},
        handler::CardQueryHandler,
        messaging::{port::MessagingPort, types::MessagingCapabilities},
        ports::{CardInfo, CardLookup},
        Result,
    };

    use super::*;

    #[derive(Default)]
    struct FakeLookup {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CardLookup for FakeLookup {
        async fn lookup(&self, card_no: &str) -> Result<Option<CardInfo>> {
            self.calls.lock().unwrap().push(card_no.to_string());
            Ok(None)
        }
    }

    #[derive(Default)]
    struct RecordingMessenger {
        sent: Mutex<Vec<(ChatId, Option<MessageId>)>>,
    }

    #[async_trait]
    impl MessagingPort for RecordingMessenger {
        fn capabilities(&self) -> MessagingCapabilities {
            MessagingCapabilities {
                supports_replies: true,
            }
        }

        async fn send_html(
            &self,
            chat_id: ChatId,
            _html: &str,
            reply_to: Option<MessageId>,
        ) -> Result<MessageRef> {
            self.sent.lock().unwrap().push((chat_id, reply_to));
            Ok(MessageRef {
                chat_id,
                message_id: MessageId(1000),
            })
        }
    }

    fn message(extra: serde_json::Value) -> Message {
        let mut v = serde_json::json!({
            "message_id": 17,
            "from": {
                "id": 250918540,
                "is_bot": false,
                "first_name": "Li",
                "username": "li_card",
                "language_code": "zh"
            },
            "chat": {
                "id": 250918540,
                "first_name": "Li",
                "username": "li_card",
                "type": "private"
            },
            "date": 1567927221
        });
        if let (Some(obj), Some(extra)) = (v.as_object_mut(), extra.as_object()) {
            for (k, val) in extra {
                obj.insert(k.clone(), val.clone());
            }
        }
        serde_json::from_value(v).unwrap()
    }

    fn text(body: &str) -> Message {
        message(serde_json::json!({ "text": body }))
    }

    fn photo_with_caption(caption: &str) -> Message {
        message(serde_json::json!({
            "photo": [{
                "file_id": "AgADAgADs6kxG",
                "file_unique_id": "AQADs6kxGwAE",
                "file_size": 1234,
                "width": 90,
                "height": 51
            }],
            "caption": caption
        }))
    }

    fn state(lookup: Arc<FakeLookup>, messenger: Arc<RecordingMessenger>) -> Arc<AppState> {
        Arc::new(AppState {
            handler: CardQueryHandler::new(lookup),
            messenger,
        })
    }

    #[test]
    fn selects_text_but_not_captions() {
        let incoming = text_message(&text("4111 1111 1111 1111")).unwrap();
        assert_eq!(incoming.chat_id, ChatId(250918540));
        assert_eq!(incoming.message_id, MessageId(17));
        assert_eq!(incoming.text, "4111 1111 1111 1111");

        assert!(text_message(&photo_with_caption("4111111111111111")).is_none());
    }

    #[tokio::test]
    async fn text_message_is_looked_up_and_answered() {
        let lookup = Arc::new(FakeLookup::default());
        let messenger = Arc::new(RecordingMessenger::default());

        handle_message(
            text("4111 1111 1111 1111"),
            state(lookup.clone(), messenger.clone()),
        )
        .await
        .unwrap();

        assert_eq!(
            *lookup.calls.lock().unwrap(),
            vec!["4111111111111111".to_string()]
        );
        assert_eq!(
            *messenger.sent.lock().unwrap(),
            vec![(ChatId(250918540), Some(MessageId(17)))]
        );
    }

    #[tokio::test]
    async fn caption_is_ignored() {
        let lookup = Arc::new(FakeLookup::default());
        let messenger = Arc::new(RecordingMessenger::default());

        handle_message(
            photo_with_caption("4111111111111111"),
            state(lookup.clone(), messenger.clone()),
        )
        .await
        .unwrap();

        assert!(lookup.calls.lock().unwrap().is_empty());
        assert!(messenger.sent.lock().unwrap().is_empty());
    }
}
