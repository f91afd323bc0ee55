use std::io::{IsTerminal, Write};

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::player::{self, PlayerError};
use crate::search::SearchResult;
use crate::tools::{self, MissingTool};
use crate::ytdlp::{self, ExtractorError};

const SEARCH_LIMIT: usize = 10;

#[derive(thiserror::Error, Debug)]
pub enum InteractiveError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    MissingTool(#[from] MissingTool),
}

/// Line-based prompt loop: search, pick a result, choose audio or video,
/// then autoplay the rest of the listing. Runs until EOF or a quit token.
pub async fn run() -> Result<(), InteractiveError> {
    tools::require(tools::YTDLP)?;
    tools::require(tools::MPV)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type 'q' at any prompt to quit.");

    loop {
        let Some(query) = prompt(&mut lines, "Search YouTube: ").await? else {
            break;
        };
        if is_quit(&query) {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let results = ytdlp::search(&query, SEARCH_LIMIT).await?;
        if results.is_empty() {
            println!("No results.");
            continue;
        }
        print!("{}", crate::search::format_listing(&results));

        let Some(choice) = prompt(&mut lines, "Pick a number to play (or blank to exit): ").await?
        else {
            break;
        };
        if is_quit(&choice) {
            break;
        }
        if choice.is_empty() {
            continue;
        }
        let idx: usize = match choice.parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Invalid number.");
                continue;
            }
        };
        if idx < 1 || idx > results.len() {
            println!("Out of range.");
            continue;
        }

        let Some(mode) = prompt(&mut lines, "Play as (a)udio or (v)ideo? [a]: ").await? else {
            break;
        };
        if is_quit(&mode) {
            break;
        }
        let video = mode.eq_ignore_ascii_case("v");

        play_from(&results, idx - 1, video).await?;
    }

    Ok(())
}

/// Play the chosen entry and then every following entry in listing order.
pub async fn play_from(
    results: &[SearchResult],
    start: usize,
    video: bool,
) -> Result<(), PlayerError> {
    if start >= results.len() {
        return Ok(());
    }

    println!("Autoplay is on: the remaining results play in order. Press Ctrl+C to stop.");
    for entry in &results[start..] {
        clear_screen();
        println!("Now playing: {}", entry.display_title());
        player::play(&entry.watch_url(), video).await?;
    }

    Ok(())
}

async fn prompt(
    lines: &mut Lines<BufReader<Stdin>>,
    text: &str,
) -> Result<Option<String>, std::io::Error> {
    print!("{}", text);
    let _ = std::io::stdout().lock().flush();

    Ok(lines.next_line().await?.map(|l| l.trim().to_string()))
}

fn is_quit(input: &str) -> bool {
    matches!(
        input.to_ascii_lowercase().as_str(),
        "q" | "quit" | "exit"
    )
}

fn clear_screen() {
    if std::io::stdout().is_terminal() {
        print!("\x1b[2J\x1b[H");
        let _ = std::io::stdout().lock().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_tokens() {
        assert!(is_quit("q"));
        assert!(is_quit("quit"));
        assert!(is_quit("EXIT"));
        assert!(!is_quit(""));
        assert!(!is_quit("queen"));
    }
}
