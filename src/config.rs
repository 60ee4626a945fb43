use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::analysis::ErrorPolicy;

pub const BASE_URL: &str = "https://www.imdb.com";
pub const DISNEY_LIST_URL: &str = "https://www.imdb.com/list/ls056117732/";
pub const DEFAULT_TABLE_FILE: &str = "imdb.json";
pub const MAX_MOVIES_PER_ACTOR: usize = 50;
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

#[derive(Debug, Parser)]
#[command(name = "filmography_stats", about = "Scrape actor filmographies and chart their careers")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Aggregate a scraped table, write chart data and print the top earner
    Analyze {
        #[arg(long, default_value = DEFAULT_TABLE_FILE)]
        input: PathBuf,

        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Keep going when an actor's data cannot be aggregated
        #[arg(long)]
        skip_errors: bool,
    },
    /// Scrape every actor of an IMDb list into a JSON table
    Scrape {
        #[arg(long, default_value = DISNEY_LIST_URL)]
        list_url: String,

        #[arg(long, default_value = DEFAULT_TABLE_FILE)]
        output: PathBuf,

        #[arg(long, default_value_t = MAX_MOVIES_PER_ACTOR)]
        max_movies: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub policy: ErrorPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            input: PathBuf::from(DEFAULT_TABLE_FILE),
            output_dir: PathBuf::from("."),
            policy: ErrorPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeConfig {
    pub list_url: String,
    pub output: PathBuf,
    pub max_movies: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            list_url: DISNEY_LIST_URL.to_string(),
            output: PathBuf::from(DEFAULT_TABLE_FILE),
            max_movies: MAX_MOVIES_PER_ACTOR,
        }
    }
}
