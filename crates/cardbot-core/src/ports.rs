use async_trait::async_trait;
use serde::Deserialize;

use crate::Result;

/// Card metadata returned by the BIN lookup API.
///
/// Every field is optional on the wire; a missing `validated` means "not validated".
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    #[serde(default)]
    pub bank: Option<String>,
    #[serde(default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub stat: Option<String>,
    #[serde(default)]
    pub messages: Vec<LookupMessage>,
}

/// Diagnostic attached to a non-validated lookup (e.g. `CARD_BIN_NOT_MATCH`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct LookupMessage {
    #[serde(default, rename = "errorCodes")]
    pub error_codes: String,
    #[serde(default)]
    pub name: String,
}

/// Port for the third-party card lookup.
///
/// `Ok(None)` means the API answered but did not recognize the number. Transport
/// failures, timeouts and malformed responses are `Err`.
#[async_trait]
pub trait CardLookup: Send + Sync {
    async fn lookup(&self, card_no: &str) -> Result<Option<CardInfo>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_validated_response() {
        let raw = r#"{"cardType":"DC","bank":"ICBC","key":"6217001234567890122","messages":[],"validated":true,"stat":"ok"}"#;
        let info: CardInfo = serde_json::from_str(raw).unwrap();
        assert!(info.validated);
        assert_eq!(info.bank.as_deref(), Some("ICBC"));
        assert_eq!(info.card_type.as_deref(), Some("DC"));
    }

    #[test]
    fn decodes_rejected_response() {
        let raw = r#"{"messages":[{"errorCodes":"CARD_BIN_NOT_MATCH","name":"cardNo"}],"validated":false,"stat":"ok","key":"1234567890"}"#;
        let info: CardInfo = serde_json::from_str(raw).unwrap();
        assert!(!info.validated);
        assert_eq!(info.bank, None);
        assert_eq!(info.messages[0].error_codes, "CARD_BIN_NOT_MATCH");
    }
}
