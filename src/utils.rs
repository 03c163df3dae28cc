use strum::{Display, EnumString};
use tokio::fs;

/// Actions behind the main menu inline buttons. The strum strings are the
/// callback payloads sent back by Telegram.
#[derive(Display, EnumString, Debug, Clone, PartialEq)]
pub enum MenuAction {
    #[strum(to_string = "play_music")]
    PlayMusic,
    #[strum(to_string = "help")]
    Help,
}

/// Best-effort removal of everything inside `dir`. Used to drop leftover
/// staged files at shutdown; a missing directory is fine.
pub async fn clear_dir(dir: &str) -> std::io::Result<()> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            if let Err(e) = fs::remove_file(entry.path()).await {
                log::warn!("Failed to remove {:?}: {}", entry.path(), e);
            }
        }
    }

    Ok(())
}
