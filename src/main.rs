use clap::Parser;
use ytp_rs::cli::{Cli, Commands, PlayArgs};
use ytp_rs::{interactive, player, search, tools, ytdlp};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    match cli.command {
        None | Some(Commands::Interactive) => {
            interactive::run().await?;
            Ok(0)
        }
        Some(Commands::Search { query, limit }) => {
            tools::require(tools::YTDLP)?;

            let results = ytdlp::search(&query.join(" "), limit).await?;
            if results.is_empty() {
                println!("No results.");
            } else {
                print!("{}", search::format_listing(&results));
            }
            Ok(0)
        }
        Some(Commands::Play(args)) => play(args).await,
    }
}

async fn play(args: PlayArgs) -> Result<i32, Box<dyn std::error::Error>> {
    tools::require(tools::MPV)?;

    let (target, video) = match (args.search, args.video) {
        (Some(query), None) => {
            tools::require(tools::YTDLP)?;

            let results = ytdlp::search(&query, 1).await?;
            match results.into_iter().next() {
                Some(hit) => (hit.watch_url(), false),
                None => {
                    println!("No results.");
                    return Ok(0);
                }
            }
        }
        (None, Some(url)) => (url, true),
        // clap's arg group guarantees exactly one target
        _ => unreachable!(),
    };

    let status = player::play(&target, video).await?;
    Ok(status.code().unwrap_or(1))
}
