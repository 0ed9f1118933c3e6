//! Alipay card-BIN lookup adapter.
//!
//! Implements the `cardbot-core` [`CardLookup`] port over Alipay's
//! `validateAndCacheCardInfo.json` endpoint, which resolves domestic (CN) card numbers
//! to an issuing bank code and card type.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use cardbot_core::{
    errors::Error,
    logging::mask_card,
    ports::{CardInfo, CardLookup},
    Result,
};

#[derive(Clone, Debug)]
pub struct AlipayClient {
    pub endpoint: String,
    http: reqwest::Client,
}

impl AlipayClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::External(format!("reqwest client build error: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Query the endpoint once. No retries.
    pub async fn fetch(&self, card_no: &str) -> Result<CardInfo> {
        let resp = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("_input_charset", "utf-8"),
                ("cardNo", card_no),
                ("cardBinCheck", "true"),
            ])
            .send()
            .await
            .map_err(|e| Error::Lookup(format!("request error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Lookup(format!(
                "unexpected status: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| Error::Lookup(format!("read body error: {e}")))?;

        Ok(serde_json::from_str::<CardInfo>(&body)?)
    }
}

#[async_trait]
impl CardLookup for AlipayClient {
    async fn lookup(&self, card_no: &str) -> Result<Option<CardInfo>> {
        let info = self.fetch(card_no).await?;
        if info.validated {
            return Ok(Some(info));
        }

        debug!(
            card = %mask_card(card_no),
            reason = %rejection_reason(&info),
            "card not validated by lookup API"
        );
        Ok(None)
    }
}

/// `stat=<stat> <field>:<code>,...` summary of a non-validated response.
fn rejection_reason(info: &CardInfo) -> String {
    let codes = info
        .messages
        .iter()
        .map(|m| format!("{}:{}", m.name, m.error_codes))
        .collect::<Vec<_>>()
        .join(",");
    format!("stat={} {codes}", info.stat.as_deref().unwrap_or("-"))
}
