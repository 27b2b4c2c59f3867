//! CLI entry point for blog-index

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-index")]
#[command(version)]
#[command(about = "Renders the post-list front page of a statically generated blog", long_about = None)]
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
    /// Generate the front page
    #[command(alias = "g")]
    Generate {
        /// Render the unsupported-browser notice instead of the post list
        #[arg(long)]
        legacy: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Clean the public folder
    Clean,

    /// List the posts shown on the front page
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_index=debug,info"
    } else {
        "blog_index=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Generate { legacy } => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Generating front page...");
            blog_index::commands::generate::run(&blog, legacy || blog.config.legacy_browser)?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip } => {
            let blog = blog_index::Blog::new(&base_dir)?;

            tracing::info!("Generating front page...");
            blog.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog_index::server::start(&blog, &ip, port).await?;
        }

        Commands::Clean => {
            let blog = blog_index::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List => {
            let blog = blog_index::Blog::new(&base_dir)?;
            blog_index::commands::list::run(&blog)?;
        }

        Commands::Version => {
            println!("blog-index version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
