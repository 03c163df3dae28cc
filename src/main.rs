mod audio;
mod commands;
mod config;
mod errors;
mod handlers;
mod schema;
mod search;
mod temp_file;
mod utils;

use std::sync::Arc;

use teloxide::prelude::*;

use crate::{
    audio::SONGS_DIR, config::Config, schema::schema, search::SearchClient, utils::clear_dir,
};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    pretty_env_logger::init();
    log::info!("Starting music bot...");

    // Both secrets must be present before we open any connection
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let bot = Bot::new(config.bot_token);
    let search = Arc::new(SearchClient::new(config.youtube_api_key));

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![search])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    if let Err(e) = clear_dir(SONGS_DIR).await {
        log::warn!("Failed to clear staging dir: {}", e);
    }
}
