/// Core error type for the card bot.
///
/// Adapter crates map their specific errors (reqwest, teloxide) into this type so
/// the handler can treat every upstream failure the same way: log it, send nothing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card lookup failed: {0}")]
    Lookup(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
