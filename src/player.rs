use std::process::ExitStatus;

use crate::tools;

#[derive(thiserror::Error, Debug)]
pub enum PlayerError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Arguments for one playback: mpv resolves the target itself via its
/// ytdl hook, audio-only unless video was requested.
pub fn play_args(target: &str, video: bool) -> Vec<String> {
    let mut args = vec!["--ytdl=yes".to_string()];
    if !video {
        args.push("--no-video".to_string());
    }
    args.push(target.to_string());
    args
}

/// Play one target with mpv. The child inherits the terminal; the caller
/// decides what to do with its exit status.
pub async fn play(target: &str, video: bool) -> Result<ExitStatus, PlayerError> {
    run_player(tools::MPV, target, video).await
}

async fn run_player(bin: &str, target: &str, video: bool) -> Result<ExitStatus, PlayerError> {
    let args = play_args(target, video);
    debug!("Running {} {:?}", bin, args);

    let status = tokio::process::Command::new(bin)
        .args(&args)
        .spawn()
        .map_err(PlayerError::IoError)?
        .wait()
        .await?;

    Ok(status)
}
