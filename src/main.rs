//! CLI entry point for blogfront

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogfront::commands::list::ListingOptions;

#[derive(Parser)]
#[command(name = "blogfront")]
#[command(version)]
#[command(about = "Load, search, filter and paginate a markdown blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryArgs {
    /// Only show posts with this tag ("all" for every post)
    #[arg(short, long)]
    tag: Option<String>,

    /// Case-insensitive text to look for in titles, excerpts and tags
    #[arg(short, long)]
    search: Option<String>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value = "1")]
    page: usize,

    /// Load posts from this base URL instead of the site directory
    #[arg(long)]
    url: Option<String>,
}

impl From<QueryArgs> for ListingOptions {
    fn from(args: QueryArgs) -> Self {
        Self {
            tag: args.tag,
            search: args.search,
            page: args.page,
            url: args.url,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post and add it to the manifest
    New {
        /// Title of the new post
        title: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Author (defaults to the configured author)
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Print one page of the post listing
    #[command(alias = "ls")]
    List(QueryArgs),

    /// Print every tag with its post count
    Tags {
        /// Load posts from this base URL instead of the site directory
        #[arg(long)]
        url: Option<String>,
    },

    /// Print the listing containers as HTML fragments
    Render(QueryArgs),

    /// Serve the site directory over HTTP
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogfront=debug,info"
    } else {
        "blogfront=info"
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
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            blogfront::commands::init::init_site(&target_dir)?;
            println!("Initialized blog in {:?}", target_dir);
        }

        Commands::New {
            title,
            tags,
            author,
        } => {
            let blog = blogfront::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = blogfront::commands::new::create_post(&blog, &title, &tags, author.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List(args) => {
            let blog = blogfront::Blog::new(&base_dir)?;
            blogfront::commands::list::run(&blog, &args.into()).await?;
        }

        Commands::Tags { url } => {
            let blog = blogfront::Blog::new(&base_dir)?;
            blogfront::commands::tags::run(&blog, url.as_deref()).await?;
        }

        Commands::Render(args) => {
            let blog = blogfront::Blog::new(&base_dir)?;
            blogfront::commands::render::run(&blog, &args.into()).await?;
        }

        Commands::Serve { port, ip, open } => {
            let blog = blogfront::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogfront::server::start(&blog, &ip, port, open).await?;
        }

        Commands::Version => {
            println!("blogfront version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
