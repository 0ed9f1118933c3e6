//! Extract → validate → look up → format.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    config::DEFAULT_MIN_CARD_DIGITS,
    formatting::{format_card_report, format_unmatched},
    logging::mask_card,
    luhn::luhn_check,
    messaging::{port::MessagingPort, types::TextMessage},
    ports::CardLookup,
    Result,
};

/// Keep only the decimal digits of `text`, in order, normalized to ASCII.
///
/// Full-width digits (`０`-`９`, produced by CJK input methods) count as digits.
pub fn extract_digits(text: &str) -> String {
    text.chars().filter_map(ascii_digit).collect()
}

fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '\u{FF10}'..='\u{FF19}' => char::from_u32(c as u32 - 0xFF10 + '0' as u32),
        _ => None,
    }
}

/// Stateless per-message card query handler.
#[derive(Clone)]
pub struct CardQueryHandler {
    lookup: Arc<dyn CardLookup>,
    min_card_digits: usize,
}

impl CardQueryHandler {
    pub fn new(lookup: Arc<dyn CardLookup>) -> Self {
        Self {
            lookup,
            min_card_digits: DEFAULT_MIN_CARD_DIGITS,
        }
    }

    pub fn with_min_card_digits(mut self, min_card_digits: usize) -> Self {
        self.min_card_digits = min_card_digits;
        self
    }

    /// Build the reply for `text`, or `None` when the message should be ignored.
    ///
    /// Lookup failures are logged and swallowed.
    pub async fn handle(&self, text: &str) -> Option<String> {
        let card_no = extract_digits(text);
        if card_no.len() < self.min_card_digits {
            return None;
        }

        let masked = mask_card(&card_no);
        let luhn_passed = luhn_check(&card_no);

        match self.lookup.lookup(&card_no).await {
            Ok(Some(info)) => {
                info!(card = %masked, bank = ?info.bank, card_type = ?info.card_type, "card lookup matched");
                Some(format_card_report(&card_no, &info, luhn_passed))
            }
            Ok(None) if luhn_passed => {
                info!(card = %masked, "card lookup unmatched, checksum ok");
                Some(format_unmatched(&card_no, luhn_passed))
            }
            Ok(None) => {
                debug!(card = %masked, "card lookup unmatched, checksum failed");
                None
            }
            Err(e) => {
                warn!(card = %masked, "card lookup failed: {e}");
                None
            }
        }
    }

    /// Handle an inbound message and reply to it through `messenger`.
    ///
    /// Returns whether a reply was sent.
    pub async fn respond(&self, messenger: &dyn MessagingPort, msg: &TextMessage) -> Result<bool> {
        let Some(reply) = self.handle(&msg.text).await else {
            return Ok(false);
        };

        let reply_to = messenger
            .capabilities()
            .supports_replies
            .then_some(msg.message_id);
        let sent = messenger.send_html(msg.chat_id, &reply, reply_to).await?;
        debug!(source = ?msg.message_ref(), reply = ?sent, "card reply sent");
        Ok(true)
    }
}
