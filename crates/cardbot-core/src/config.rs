use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";
pub const DEFAULT_LOOKUP_URL: &str = "https://ccdcapi.alipay.com/validateAndCacheCardInfo.json";
pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MIN_CARD_DIGITS: usize = 10;

/// Typed configuration, read from the process environment.
#[derive(Clone, Debug)]
pub struct Config {
    // Telegram
    pub telegram_token: String,
    pub public_url: String,
    pub webhook_path: String,

    // HTTP listener
    pub bind_addr: String,
    pub port: u16,

    // Card lookup
    pub lookup_url: String,
    pub lookup_timeout: Duration,
    pub min_card_digits: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let env_str = |key: &str| get(key).and_then(non_empty);

        // Required env vars
        let telegram_token = env_str("TELEGRAM_TOKEN").ok_or_else(|| {
            Error::Config("TELEGRAM_TOKEN environment variable is not set".to_string())
        })?;
        let public_url = env_str("RENDER_EXTERNAL_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .ok_or_else(|| {
                Error::Config("RENDER_EXTERNAL_URL environment variable is not set".to_string())
            })?;

        let port = match env_str("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("invalid PORT {raw:?}: {e}")))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = env_str("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let webhook_path = normalize_path(
            env_str("WEBHOOK_PATH")
                .as_deref()
                .unwrap_or(DEFAULT_WEBHOOK_PATH),
        );

        let lookup_url = env_str("CARD_LOOKUP_URL").unwrap_or_else(|| DEFAULT_LOOKUP_URL.to_string());
        let lookup_timeout = Duration::from_millis(
            parse_or(env_str("LOOKUP_TIMEOUT_MS"), DEFAULT_LOOKUP_TIMEOUT_MS).max(1),
        );
        let min_card_digits =
            parse_or(env_str("MIN_CARD_DIGITS"), DEFAULT_MIN_CARD_DIGITS).max(1);

        Ok(Self {
            telegram_token,
            public_url,
            webhook_path,
            bind_addr,
            port,
            lookup_url,
            lookup_timeout,
            min_card_digits,
        })
    }

    /// Public URL Telegram should deliver updates to.
    pub fn webhook_url(&self) -> String {
        format!("{}{}", self.public_url, self.webhook_path)
    }

    /// `host:port` the webhook listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_or<T: std::str::FromStr>(v: Option<String>, default: T) -> T {
    v.and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        env::set_var(key, unquote(v.trim()));
    }
}

fn unquote(val: &str) -> &str {
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        &val[1..val.len() - 1]
    } else {
        val
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
