use std::str::FromStr;

use teloxide::{
    prelude::*,
    types::{MaybeInaccessibleMessage, ParseMode},
};

use crate::{errors::HandlerResult, utils::MenuAction};

const PLAY_MUSIC_TEXT: &str = "To play a song, type: <code>/play &lt;song name&gt;</code>\n\
                               Example: <code>/play Shape of You</code>";

pub async fn menu_received(bot: Bot, query: CallbackQuery) -> HandlerResult {
    // Answer first so the client stops its spinner, whatever the payload is
    bot.answer_callback_query(&query.id).await?;

    let (Some(data), Some(message)) = (query.data.as_deref(), query.message) else {
        return Ok(());
    };

    let chat_id = match &message {
        MaybeInaccessibleMessage::Inaccessible(m) => m.chat.id,
        MaybeInaccessibleMessage::Regular(m) => m.chat.id,
    };

    match MenuAction::from_str(data) {
        Ok(MenuAction::PlayMusic) => {
            bot.send_message(chat_id, PLAY_MUSIC_TEXT)
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Ok(MenuAction::Help) => {
            bot.send_message(chat_id, help_text())
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Err(_) => {
            // Acknowledged above, nothing to send
            log::warn!("Unrecognized menu callback: {}", data);
        }
    }

    Ok(())
}

fn help_text() -> &'static str {
    "ℹ️ <b>Help Menu</b>\n\n\
     1. Use <code>/play &lt;song name&gt;</code> to download and play music.\n\
     2. Ensure to provide a valid song name.\n\
     3. For issues, contact the developer.\n\n\
     Enjoy!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_is_static_and_mentions_play() {
        assert_eq!(help_text(), help_text());
        assert!(help_text().contains("/play"));
        assert!(help_text().starts_with("ℹ️ <b>Help Menu</b>"));
    }

    #[test]
    fn instruction_text_shows_the_example_query() {
        assert!(PLAY_MUSIC_TEXT.contains("/play Shape of You"));
    }
}
