use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use teloxide::{
    dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    update_listeners::webhooks,
};
use tracing::{info, warn};

use cardbot_core::{
    config::Config, handler::CardQueryHandler, messaging::port::MessagingPort, ports::CardLookup,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub handler: CardQueryHandler,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Listener options: bind address plus the public URL registered with Telegram.
pub fn webhook_options(cfg: &Config) -> anyhow::Result<webhooks::Options> {
    let addr: SocketAddr = cfg
        .listen_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", cfg.listen_addr()))?;
    let url: url::Url = cfg
        .webhook_url()
        .parse()
        .with_context(|| format!("invalid webhook url {}", cfg.webhook_url()))?;
    Ok(webhooks::Options::new(addr, url))
}

/// Register the webhook with Telegram, then serve updates until Ctrl-C.
pub async fn run_webhook(cfg: Arc<Config>, lookup: Arc<dyn CardLookup>) -> anyhow::Result<()> {
    let messenger = TelegramMessenger::new(Bot::new(cfg.telegram_token.clone()));
    let bot = messenger.bot();

    match bot.get_me().await {
        Ok(me) => info!(username = %me.username(), "cardbot started"),
        Err(e) => warn!("get_me failed: {e}"),
    }

    let options = webhook_options(&cfg)?;
    info!(url = %options.url, addr = %options.address, "setting webhook");
    let listener = webhooks::axum(bot.clone(), options)
        .await
        .context("failed to register webhook")?;

    let state = Arc::new(AppState {
        handler: CardQueryHandler::new(lookup).with_min_card_digits(cfg.min_card_digits),
        messenger: Arc::new(messenger),
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the webhook listener"),
        )
        .await;

    info!("cardbot stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn cfg(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|k| map.get(k).cloned()).unwrap()
    }

    #[test]
    fn builds_webhook_options_from_config() {
        let c = cfg(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("RENDER_EXTERNAL_URL", "https://cardbot.onrender.com/"),
            ("PORT", "10000"),
        ]);
        let opts = webhook_options(&c).unwrap();

        assert_eq!(opts.address, "0.0.0.0:10000".parse::<SocketAddr>().unwrap());
        assert_eq!(opts.url.as_str(), "https://cardbot.onrender.com/webhook");
    }

    #[test]
    fn rejects_unparseable_public_url() {
        let c = cfg(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("RENDER_EXTERNAL_URL", "not a url"),
        ]);
        let err = webhook_options(&c).err().unwrap();
        assert!(err.to_string().contains("invalid webhook url"));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let c = cfg(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("RENDER_EXTERNAL_URL", "https://cardbot.onrender.com"),
            ("BIND_ADDR", "localhost"),
        ]);
        let err = webhook_options(&c).err().unwrap();
        assert!(err.to_string().contains("invalid listen address"));
    }
}
