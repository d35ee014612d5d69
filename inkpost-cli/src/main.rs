//! # inkpost CLI
//!
//! Command-line interface for the inkpost blog.

mod agent;
mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inkpost")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = inkpost_core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new inkpost blog
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Print the plain-text excerpt of a markdown document
    Excerpt {
        /// Markdown file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Maximum excerpt length in characters (overrides config)
        #[arg(long)]
        max_length: Option<usize>,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Print the URL slug for a post title or tag name
    Slug {
        /// Title or tag name
        text: String,

        /// Generate a tag slug instead of a post slug
        #[arg(long)]
        tag: bool,
    },

    /// List posts, newest first
    Posts {
        /// Maximum posts to return
        #[arg(long, default_value_t = 100)]
        limit: usize,

        /// Number of posts to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,

        /// Include unpublished posts
        #[arg(long)]
        drafts: bool,

        /// Only posts carrying this tag (name or slug)
        #[arg(long)]
        tag: Option<String>,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Post {
        /// Post slug or /blog/ URL
        slug: String,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Create a new post file from a title
    New {
        /// Post title
        title: String,

        /// Tags for the post (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Create the post unpublished
        #[arg(long)]
        draft: bool,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// List tags with post counts
    Tags {
        /// Count unpublished posts too
        #[arg(long)]
        drafts: bool,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Generate sitemap XML for published posts
    Sitemap {
        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_blog(path.as_deref()),
        Commands::Excerpt {
            file,
            max_length,
            json,
        } => commands::show_excerpt(&cli.config, file.as_deref(), max_length, json),
        Commands::Slug { text, tag } => commands::show_slug(&text, tag),
        Commands::Posts {
            limit,
            offset,
            drafts,
            tag,
            json,
        } => {
            let opts = commands::ListOptions {
                limit,
                offset,
                drafts,
                tag,
                json,
            };
            commands::list_posts(&cli.config, opts)
        }
        Commands::Post { slug, json } => commands::show_post(&cli.config, &slug, json),
        Commands::New {
            title,
            tags,
            draft,
            json,
        } => commands::new_post(&cli.config, &title, &tags, draft, json),
        Commands::Tags { drafts, json } => commands::list_tags(&cli.config, drafts, json),
        Commands::Sitemap { output } => commands::write_sitemap(&cli.config, output.as_deref()),
    }
}
