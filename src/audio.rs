use std::path::{Path, PathBuf};

use tokio::{fs, process};

use crate::errors::{BotError, BotResult};

/// Staging directory for downloaded songs
pub const SONGS_DIR: &str = "songs";

/// Destination path for one download. Uuid v4 keeps concurrent commands from
/// colliding even when they start in the same instant.
pub fn unique_song_path() -> PathBuf {
    PathBuf::from(SONGS_DIR).join(format!("song_{}.mp3", uuid::Uuid::new_v4()))
}

fn build_fetch_command(url: &str, dest: &str) -> process::Command {
    let mut cmd = process::Command::new("yt-dlp");
    cmd.arg("--no-playlist")
        .args(["--socket-timeout", "5", "--retries", "3"])
        .args(["-f", "bestaudio/best"])
        // Extract the audio track and convert to mp3
        .args(["-x", "--audio-format", "mp3"])
        .args(["-o", dest])
        .arg(url);
    cmd
}

/// Download the audio track of `url` and transcode it to mp3 at `dest`.
/// A failed run discards whatever partial output yt-dlp left behind, so the
/// caller never has to clean up after an error.
pub async fn fetch_audio(url: &str, dest: &Path) -> BotResult<()> {
    fs::create_dir_all(SONGS_DIR).await?;

    let dest_str = dest
        .to_str()
        .ok_or_else(|| BotError::Parse(format!("non-utf8 destination path: {:?}", dest)))?;

    let output = build_fetch_command(url, dest_str)
        .output()
        .await
        .map_err(|e| BotError::fetch_error(format!("failed to run yt-dlp: {}", e)))?;

    log::info!("yt-dlp exit code: {:?}", output.status.code());

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        log::error!("yt-dlp failed: {}", stderr);
        discard_partial(dest).await;
        Err(BotError::fetch_error(stderr))
    }
}

/// Remove the staged file and the .part fragment yt-dlp leaves on abort.
async fn discard_partial(dest: &Path) {
    let mut leftovers = vec![dest.to_path_buf()];
    if let Some(name) = dest.file_name() {
        let mut part = name.to_os_string();
        part.push(".part");
        leftovers.push(dest.with_file_name(part));
    }

    for path in leftovers {
        if fs::try_exists(&path).await.unwrap_or(false) {
            if let Err(e) = fs::remove_file(&path).await {
                log::warn!("Failed to discard partial file {:?}: {}", path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::ffi::OsString;

    use super::*;

    #[test]
    fn song_paths_are_unique_per_invocation() {
        let paths: HashSet<PathBuf> = (0..100).map(|_| unique_song_path()).collect();
        assert_eq!(paths.len(), 100);
    }

    #[test]
    fn song_paths_stage_mp3_under_songs_dir() {
        let path = unique_song_path();
        assert!(path.starts_with(SONGS_DIR));
        assert_eq!(path.extension().unwrap(), "mp3");
    }

    #[test]
    fn fetch_command_extracts_mp3_audio_to_destination() {
        let cmd = build_fetch_command("https://www.youtube.com/watch?v=abc123", "songs/out.mp3");
        let args: Vec<OsString> = cmd.as_std().get_args().map(|a| a.to_os_string()).collect();

        assert_eq!(cmd.as_std().get_program(), "yt-dlp");
        assert!(args.contains(&OsString::from("--no-playlist")));
        assert!(args.contains(&OsString::from("-x")));
        assert!(args.contains(&OsString::from("--audio-format")));
        assert!(args.contains(&OsString::from("mp3")));
        assert!(args.contains(&OsString::from("songs/out.mp3")));
        // The url goes last
        assert_eq!(
            args.last().unwrap(),
            &OsString::from("https://www.youtube.com/watch?v=abc123")
        );
    }

    #[tokio::test]
    async fn discard_partial_removes_staged_file_and_fragment() {
        let dir = std::env::temp_dir();
        let dest = dir.join(format!("song_{}.mp3", uuid::Uuid::new_v4()));
        let fragment = dir.join(format!("{}.part", dest.file_name().unwrap().to_str().unwrap()));
        fs::write(&dest, b"half a song").await.unwrap();
        fs::write(&fragment, b"fragment").await.unwrap();

        discard_partial(&dest).await;

        assert!(!dest.exists());
        assert!(!fragment.exists());
    }

    #[tokio::test]
    async fn discard_partial_tolerates_nothing_written() {
        let dest = std::env::temp_dir().join(format!("song_{}.mp3", uuid::Uuid::new_v4()));
        discard_partial(&dest).await;
    }
}
