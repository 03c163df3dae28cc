use std::env;

use crate::errors::{BotError, BotResult};

pub const BOT_TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";

/// Secrets loaded once at startup and passed into the handlers
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub youtube_api_key: String,
}

impl Config {
    /// Load both secrets from the environment. Missing or blank values are
    /// fatal: the caller exits before opening any network connection.
    pub fn from_env() -> BotResult<Self> {
        let bot_token = require_var(BOT_TOKEN_VAR)?;
        let youtube_api_key = require_var(YOUTUBE_API_KEY_VAR)?;

        Ok(Self {
            bot_token,
            youtube_api_key,
        })
    }
}

fn require_var(name: &str) -> BotResult<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(BotError::config_error(format!(
            "missing credentials: {} is not set",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_var_is_config_error() {
        let result = require_var("TG_MUSIC_BOT_TEST_ABSENT_VAR");
        assert!(matches!(result, Err(BotError::Config(_))));
    }

    #[test]
    fn blank_var_is_config_error() {
        unsafe { env::set_var("TG_MUSIC_BOT_TEST_BLANK_VAR", "   ") };
        let result = require_var("TG_MUSIC_BOT_TEST_BLANK_VAR");
        assert!(matches!(result, Err(BotError::Config(_))));
    }

    #[test]
    fn present_var_is_returned() {
        unsafe { env::set_var("TG_MUSIC_BOT_TEST_PRESENT_VAR", "secret") };
        let value = require_var("TG_MUSIC_BOT_TEST_PRESENT_VAR").unwrap();
        assert_eq!(value, "secret");
    }
}
