use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "brook")]
#[command(about = "Manage the Brook article store from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to local database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add or update an article
    Add(AddArgs),
    /// Import articles from a JSON array
    Import {
        /// JSON file containing an array of articles
        path: PathBuf,
    },
    /// List recent articles
    List {
        /// Number of articles to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only show starred articles
        #[arg(long)]
        starred: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show an article as the reader displays it
    Show {
        /// Article URL
        url: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Star an article
    Star {
        /// Article URL
        url: String,
    },
    /// Remove the star from an article
    Unstar {
        /// Article URL
        url: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct AddArgs {
    /// Canonical article URL
    #[arg(long)]
    pub url: String,
    /// Article title
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: Option<String>,
    /// Publish timestamp as given by the feed
    #[arg(long)]
    pub published: Option<String>,
    /// HTML body
    #[arg(long)]
    pub content: Option<String>,
    /// HTML summary, shown when there is no body
    #[arg(long)]
    pub description: Option<String>,
    /// Hero image URL
    #[arg(long)]
    pub image: Option<String>,
    /// Feed title
    #[arg(long)]
    pub feed: Option<String>,
}
