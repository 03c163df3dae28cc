use std::fmt;

/// Centralized error type for the bot
#[derive(Debug)]
pub enum BotError {
    /// Missing or empty credentials at startup
    Config(String),
    /// Search request failed (transport, non-2xx status or malformed payload)
    Search(String),
    /// yt-dlp failed to download or convert the audio
    Fetch(String),
    /// Telegram API errors
    Telegram(teloxide::RequestError),
    /// Filesystem errors
    FileSystem(std::io::Error),
    /// Data parsing errors
    Parse(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BotError::Search(msg) => write!(f, "Search error: {}", msg),
            BotError::Fetch(msg) => write!(f, "Fetch error: {}", msg),
            BotError::Telegram(e) => write!(f, "Telegram API error: {}", e),
            BotError::FileSystem(e) => write!(f, "Filesystem error: {}", e),
            BotError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Telegram(e) => Some(e),
            BotError::FileSystem(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::FileSystem(err)
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::Telegram(err)
    }
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Search(err.to_string())
    }
}

impl From<serde_json::Error> for BotError {
    fn from(err: serde_json::Error) -> Self {
        BotError::Parse(format!("JSON parsing error: {}", err))
    }
}

impl From<strum::ParseError> for BotError {
    fn from(err: strum::ParseError) -> Self {
        BotError::Parse(format!("Enum parsing error: {}", err))
    }
}

impl BotError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn search_error(msg: impl Into<String>) -> Self {
        Self::Search(msg.into())
    }

    pub fn fetch_error(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }
}

/// Result of bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Result for handlers
pub type HandlerResult = BotResult<()>;
