//! # Headline Feed CLI
//!
//! Prints translated top headlines, search results or a single article as
//! Markdown or JSON.
//!
//! ```sh
//! NEWS_API_KEY=... headline_feed headlines --category science
//! ```
//!
//! Logs go to stderr (`RUST_LOG` controls the level), results to stdout or
//! to `--output`.

use clap::Parser;
use headline_feed::outputs::{Format, json, markdown, write_output};
use headline_feed::{Article, Config, LiveDesk};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args.command, ?args.format, "Parsed CLI arguments");

    let mut config = Config::load(args.config.as_deref()).await?;
    if let Some(key) = args.api_key.clone() {
        config.news_api.api_key = key;
    }
    if config.news_api.api_key.trim().is_empty() {
        error!("No NewsAPI key; pass --api-key, set NEWS_API_KEY or add news_api.api_key to the config");
        return Err("missing NewsAPI key".into());
    }

    let mut desk = LiveDesk::from_config(&config)?;
    let rendered = run(&mut desk, &args.command, args.format).await?;

    match &args.output {
        Some(path) => write_output(path, &rendered).await?,
        None => println!("{rendered}"),
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

#[instrument(level = "info", skip(desk))]
async fn run(desk: &mut LiveDesk, command: &Command, format: Format) -> Result<String, Box<dyn Error>> {
    match command {
        Command::Headlines { category } => {
            let articles = desk.select_category(*category).await;
            render_list(category.label(), articles, format)
        }
        Command::Search { query, category } => {
            // A blank query falls back to headlines, which must be loaded first.
            if query.trim().is_empty() {
                desk.select_category(*category).await;
            }
            let heading = format!("Búsqueda: {query}");
            let articles = desk.search(query).await;
            render_list(&heading, articles, format)
        }
        Command::Show { index, category } => {
            desk.select_category(*category).await;
            let found = match index.checked_sub(1) {
                Some(i) => desk.article(i),
                None => None,
            };
            let Some(article) = found else {
                let have = desk.shown().len();
                return Err(format!("no headline at position {index} (have {have})").into());
            };
            match format {
                Format::Markdown => Ok(markdown::article_to_markdown(article)),
                Format::Json => Ok(serde_json::to_string_pretty(article)?),
            }
        }
    }
}

fn render_list(heading: &str, articles: &[Article], format: Format) -> Result<String, Box<dyn Error>> {
    Ok(match format {
        Format::Markdown => markdown::articles_to_markdown(heading, articles),
        Format::Json => json::articles_to_json(articles)?,
    })
}
