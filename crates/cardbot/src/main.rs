use std::sync::Arc;

use cardbot_alipay::AlipayClient;

use cardbot_core::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), cardbot_core::Error> {
    cardbot_core::logging::init("cardbot")?;

    let cfg = Arc::new(Config::load()?);
    info!(
        webhook = %cfg.webhook_url(),
        listen = %cfg.listen_addr(),
        lookup = %cfg.lookup_url,
        timeout_ms = cfg.lookup_timeout.as_millis() as u64,
        "configuration loaded"
    );

    let lookup = Arc::new(AlipayClient::new(cfg.lookup_url.clone(), cfg.lookup_timeout)?);

    cardbot_telegram::router::run_webhook(cfg, lookup)
        .await
        .map_err(|e| cardbot_core::Error::External(format!("telegram bot failed: {e:#}")))?;

    Ok(())
}
