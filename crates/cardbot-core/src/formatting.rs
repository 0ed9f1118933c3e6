//! Reply formatting (Telegram HTML parse mode).

use crate::{
    banks::{display_bank_name, website, CardKind, DEFAULT_REGION},
    ports::CardInfo,
};

pub const LUHN_PASS: &str = "本卡校验为正确";
pub const LUHN_FAIL: &str = "校验不通过(可能是无效卡)";

/// Escape HTML special characters for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn luhn_line(passed: bool) -> &'static str {
    if passed {
        LUHN_PASS
    } else {
        LUHN_FAIL
    }
}

/// Full report for a number the lookup API recognized.
pub fn format_card_report(card_no: &str, info: &CardInfo, luhn_passed: bool) -> String {
    let bank = info.bank.as_deref();
    let kind = CardKind::from_code(info.card_type.as_deref());

    format!(
        "银行卡查询成功：\n\
         卡号： <code>{card}</code>\n\
         银行： {bank_name}\n\
         卡种： {kind}\n\
         归属： {region}\n\
         官网： {site}\n\
         验证： {luhn}",
        card = escape_html(card_no),
        bank_name = escape_html(&display_bank_name(bank)),
        kind = kind.label(),
        region = DEFAULT_REGION,
        site = website(bank),
        luhn = luhn_line(luhn_passed),
    )
}

/// Short reply for a checksum-valid number with no domestic bank match.
pub fn format_unmatched(card_no: &str, luhn_passed: bool) -> String {
    format!(
        "卡号：<code>{}</code>\n状态：未匹配到国内银行信息\n验证：{}",
        escape_html(card_no),
        luhn_line(luhn_passed)
    )
}
