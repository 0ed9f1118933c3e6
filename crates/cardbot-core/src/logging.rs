use crate::{errors::Error, Result};

/// Initialize tracing for the bot.
///
/// Default: info for our crates. Can be overridden with `RUST_LOG`.
pub fn init(service_name: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "info,cardbot_core=info,cardbot_alipay=info,cardbot_telegram=info,{service_name}=info"
        ))
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .try_init()
        .map_err(|e| Error::Config(format!("failed to install tracing subscriber: {e}")))?;

    Ok(())
}

/// Mask a card number for logs: keep the BIN prefix and the last four digits.
pub fn mask_card(card_no: &str) -> String {
    let len = card_no.chars().count();
    if len <= 10 {
        return "*".repeat(len);
    }
    let head: String = card_no.chars().take(6).collect();
    let tail: String = card_no.chars().skip(len - 4).collect();
    format!("{head}{}{tail}", "*".repeat(len - 10))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_middle_digits() {
        assert_eq!(mask_card("6222021234567890123"), "622202*********0123");
    }

    #[test]
    fn masks_short_numbers_entirely() {
        assert_eq!(mask_card("1234567890"), "**********");
        assert_eq!(mask_card(""), "");
    }
}
