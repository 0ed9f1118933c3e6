//! Static bank / card-type tables for domestic (CN) cards.

/// Shown when the lookup API omits the bank code entirely.
pub const UNKNOWN_BANK: &str = "未知银行";

/// Fallback website for banks without an entry in [`WEBSITES`].
pub const DEFAULT_WEBSITE: &str = "https://www.unionpay.com";

/// Region line. The free lookup API does not resolve issuing cities.
pub const DEFAULT_REGION: &str = "中国 / 全国通用";

const BANK_NAMES: &[(&str, &str)] = &[
    ("ABC", "农业银行"),
    ("ICBC", "工商银行"),
    ("CCB", "建设银行"),
    ("BOC", "中国银行"),
    ("CMB", "招商银行"),
    ("BCOM", "交通银行"),
    ("COMM", "交通银行"),
    ("GDB", "广发银行"),
    ("CITIC", "中信银行"),
    ("SPDB", "浦发银行"),
    ("CMBC", "民生银行"),
    ("CIB", "兴业银行"),
    ("CEB", "光大银行"),
    ("PSBC", "邮储银行"),
];

const WEBSITES: &[(&str, &str)] = &[
    ("ABC", "http://www.abchina.com"),
    ("ICBC", "http://www.icbc.com.cn"),
    ("CCB", "http://www.ccb.com"),
    ("CMB", "http://www.cmbchina.com"),
    ("BOC", "http://www.boc.cn"),
];

fn find(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, v)| *v)
}

/// Chinese display name for a bank code, if the code is known.
pub fn bank_name(code: &str) -> Option<&'static str> {
    find(BANK_NAMES, code)
}

/// Display name with fallbacks: unknown codes are shown as-is, missing codes as [`UNKNOWN_BANK`].
pub fn display_bank_name(code: Option<&str>) -> String {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => bank_name(c).unwrap_or(c).to_string(),
        None => UNKNOWN_BANK.to_string(),
    }
}

/// Official website for a bank code, falling back to UnionPay.
pub fn website(code: Option<&str>) -> &'static str {
    code.and_then(|c| find(WEBSITES, c.trim()))
        .unwrap_or(DEFAULT_WEBSITE)
}

/// Card kind as reported by the lookup API's `cardType` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Debit,
    Credit,
    SemiCredit,
    Prepaid,
}

impl CardKind {
    /// `DC` and anything unrecognized map to [`CardKind::Debit`].
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("CC") => Self::Credit,
            Some("SCC") => Self::SemiCredit,
            Some("PC") => Self::Prepaid,
            _ => Self::Debit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Debit => "借记卡",
            Self::Credit => "信用卡",
            Self::SemiCredit => "准贷记卡",
            Self::Prepaid => "预付费卡",
        }
    }
}
