use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup},
};

use crate::{errors::HandlerResult, utils::MenuAction};

pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "🎵 Welcome to the Music Bot! 🎵\nChoose an option below:",
    )
    .reply_markup(main_menu())
    .await?;
    Ok(())
}

fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::default().append_row([
        InlineKeyboardButton::callback("🎶 Play Music", MenuAction::PlayMusic.to_string()),
        InlineKeyboardButton::callback("ℹ️ Help", MenuAction::Help.to_string()),
    ])
}
