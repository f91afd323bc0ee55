//! # ytp-rs
//!
//! Terminal YouTube audio/video player. Searching is delegated to `yt-dlp`
//! and playback to `mpv`; this crate only builds argument lists, parses the
//! extractor's flat JSON listing and wires the two tools together.
//!
//! ## Usage
//!
//! The binary fronts the library with three modes (interactive, `search`,
//! `play`). The library itself is small enough to drive directly:
//!
//! ```no_run
//! use ytp_rs::{player, ytdlp};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Ask yt-dlp for the top five hits, one JSON record per line
//!     let results = ytdlp::search("molchat doma", 5).await.unwrap();
//!
//!     for hit in &results {
//!         println!("{}", hit.display_title());
//!     }
//!
//!     // Hand the first hit to mpv, audio only
//!     if let Some(hit) = results.first() {
//!         player::play(&hit.watch_url(), false).await.unwrap();
//!     }
//! }
//! ```
//!
//! Both tools are looked up on the executable search path; nothing is
//! downloaded, cached or persisted by this crate itself.

#[forbid(unsafe_code)]
#[macro_use]
extern crate log;

pub mod cli;
pub mod interactive;
pub mod player;
pub mod search;
pub mod tools;
pub mod ytdlp;
