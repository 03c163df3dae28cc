use teloxide::{dispatching::UpdateHandler, prelude::*, utils::command::BotCommands};

use crate::{
    commands::{play, start},
    errors::BotError,
    handlers::menu_received,
};

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    /// Show the main menu
    Start,
    /// Find a song by name and send it as audio
    Play(String),
}

pub fn schema() -> UpdateHandler<BotError> {
    use dptree::case;

    dptree::entry()
        .branch(
            // Filter for messages
            Update::filter_message().branch(
                // Filter for commands
                teloxide::filter_command::<Command, _>()
                    .branch(case![Command::Start].endpoint(start))
                    .branch(case![Command::Play(query)].endpoint(play)),
            ),
        )
        .branch(Update::filter_callback_query().endpoint(menu_received))
}
