use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode},
    utils::html,
};

use crate::{audio, errors::HandlerResult, search::SearchClient, temp_file::TempFile};

/// The whole delivery pipeline for one `/play` command: search, download,
/// send, clean up. Per-request failures end with a notification to the chat,
/// never with a crash.
pub async fn play(
    bot: Bot,
    msg: Message,
    query: String,
    search: Arc<SearchClient>,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let query = query.trim();

    if query.is_empty() {
        bot.send_message(chat_id, "Type a song name after the command: /play Shape of You")
            .await?;
        return Ok(());
    }

    bot.send_message(chat_id, format!("🔍 Searching for \"{}\" on YouTube...", query))
        .await?;

    let candidate = match search.resolve(query).await {
        Ok(Some(candidate)) => candidate,
        Ok(None) => {
            bot.send_message(chat_id, "❌ No results found for your query.")
                .await?;
            return Ok(());
        }
        Err(e) => {
            log::error!("Search failed for {:?}: {}", query, e);
            bot.send_message(chat_id, "❌ An error occurred. Please try again later.")
                .await?;
            return Ok(());
        }
    };

    bot.send_message(
        chat_id,
        format!("🎧 Downloading and converting \"{}\"...", candidate.title),
    )
    .await?;

    // The guard removes the staged file on every exit path below, including
    // a failed send
    let song = TempFile::new(audio::unique_song_path());

    if let Err(e) = audio::fetch_audio(&candidate.watch_url(), song.path()).await {
        log::error!("Fetch failed for {}: {}", candidate.video_id, e);
        bot.send_message(chat_id, "❌ Failed to download the song. Please try again later.")
            .await?;
        return Ok(());
    }

    let sent = bot
        .send_audio(chat_id, InputFile::file(song.path()))
        .caption(format!(
            "🎶 Here's your song: <b>{}</b>",
            html::escape(&candidate.title)
        ))
        .parse_mode(ParseMode::Html)
        .await;

    if let Err(e) = sent {
        log::error!("Failed to send audio to {}: {}", chat_id, e);
        bot.send_message(chat_id, "❌ Failed to download the song. Please try again later.")
            .await?;
    }

    Ok(())
}
