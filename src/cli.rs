use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ytp-rs",
    version,
    about = "Terminal YouTube music/video player (yt-dlp + mpv)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search YouTube and print the results
    Search {
        /// Search query
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Max results
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Play a URL or the first search hit
    Play(PlayArgs),

    /// Interactive search and play
    Interactive,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PlayArgs {
    /// Search query; the first hit is played audio-only
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// URL to play as video
    #[arg(long, value_name = "URL")]
    pub video: Option<String>,
}
