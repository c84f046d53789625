//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Load and list the markdown posts of a personal website", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List published posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only posts carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Show at most this many posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show the homepage listing (the configured number of recent posts)
        #[arg(long, conflicts_with = "limit")]
        recent: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List tags with post counts
    Tags {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post slug (file name without extension)
        slug: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            tag,
            limit,
            recent,
            json,
        } => {
            let site = folio::Site::new(&base_dir)?;
            let limit = if recent {
                Some(site.config.recent_posts)
            } else {
                limit
            };
            folio::commands::list::posts(&site, tag.as_deref(), limit, json).await?;
        }

        Commands::Tags { json } => {
            let site = folio::Site::new(&base_dir)?;
            folio::commands::list::tags(&site, json).await?;
        }

        Commands::Show { slug, json } => {
            let site = folio::Site::new(&base_dir)?;
            folio::commands::show::run(&site, &slug, json).await?;
        }

        Commands::Version => {
            println!("folio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
