//! Command-line interface definitions for Headline Feed.
//!
//! Options can come from flags or environment variables; the API key is
//! usually provided through `NEWS_API_KEY`.

use clap::{Parser, Subcommand};
use headline_feed::Category;
use headline_feed::outputs::Format;
use std::path::PathBuf;

/// Command-line arguments for the Headline Feed application.
///
/// # Examples
///
/// ```sh
/// # Translated top headlines for a category
/// headline_feed headlines --category technology
///
/// # Search, as JSON written to a file
/// headline_feed --format json --output ./out/search.json search "inteligencia artificial"
///
/// # Detail view of the third headline
/// headline_feed show 3
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// NewsAPI key (overrides the config file)
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Markdown, global = true)]
    pub format: Format,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to fetch and render.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Translated top headlines for a category
    Headlines {
        /// Headline category
        #[arg(long, value_enum, default_value_t = Category::General)]
        category: Category,
    },
    /// Search all articles; a blank query shows the category's headlines
    Search {
        /// Free-text query
        query: String,
        /// Category whose headlines a blank query shows
        #[arg(long, value_enum, default_value_t = Category::General)]
        category: Category,
    },
    /// Show one headline in full (1-based position)
    Show {
        /// Position in the headline list, starting at 1
        index: usize,
        /// Headline category
        #[arg(long, value_enum, default_value_t = Category::General)]
        category: Category,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_headlines_defaults() {
        let cli = Cli::parse_from(["headline_feed", "headlines"]);
        assert_eq!(
            cli.command,
            Command::Headlines {
                category: Category::General
            }
        );
        assert_eq!(cli.format, Format::Markdown);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_search_with_globals_after_subcommand() {
        let cli = Cli::parse_from([
            "headline_feed",
            "search",
            "copa del mundo",
            "--category",
            "sports",
            "--format",
            "json",
            "-o",
            "/tmp/out.json",
            "--api-key",
            "k",
        ]);

        assert_eq!(
            cli.command,
            Command::Search {
                query: "copa del mundo".to_string(),
                category: Category::Sports
            }
        );
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/out.json")));
        assert_eq!(cli.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_cli_show_index() {
        let cli = Cli::parse_from(["headline_feed", "show", "3", "--category", "health"]);
        assert_eq!(
            cli.command,
            Command::Show {
                index: 3,
                category: Category::Health
            }
        );
    }

    #[test]
    fn test_cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["headline_feed", "headlines", "--category", "weather"]).is_err());
    }
}
