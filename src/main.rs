//! CLI entry point for article-content

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use article_content::{commands, Blog};

#[derive(Parser)]
#[command(name = "articles")]
#[command(version)]
#[command(about = "Validate and query the markdown articles of a static blog", long_about = None)]
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
    /// Load and validate every article
    Check,

    /// List articles, newest first
    #[command(alias = "ls")]
    List {
        /// Which articles to list (published, featured, drafts, all)
        #[arg(default_value = "published")]
        r#type: String,

        /// Only articles carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List tags of published articles
    Tags {
        /// Include tags of draft articles
        #[arg(short, long)]
        all: bool,

        /// Show how many articles carry each tag
        #[arg(long)]
        count: bool,
    },

    /// Print the rendered HTML body of an article
    Render {
        /// Article id
        id: String,
    },

    /// Create a new draft article
    New {
        /// Title of the new article
        title: String,

        /// Author (defaults to the site author)
        #[arg(short, long)]
        author: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "article_content=debug,info"
    } else {
        "article_content=info"
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
    let blog = Blog::new(&base_dir)?;

    match cli.command {
        Commands::Check => commands::check::run(&blog)?,

        Commands::List { r#type, tag, json } => {
            commands::list::run(&blog, &r#type, tag.as_deref(), json)?;
        }

        Commands::Tags { all, count } => commands::tags::run(&blog, all, count)?,

        Commands::Render { id } => commands::render::run(&blog, &id)?,

        Commands::New { title, author } => {
            let path = blog.new_article(&title, author.as_deref())?;
            println!("Created: {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list_with_tag() {
        let cli = Cli::parse_from(["articles", "--cwd", "site", "list", "featured", "-t", "rust"]);
        assert_eq!(cli.cwd, Some(PathBuf::from("site")));
        match cli.command {
            Commands::List { r#type, tag, json } => {
                assert_eq!(r#type, "featured");
                assert_eq!(tag.as_deref(), Some("rust"));
                assert!(!json);
            }
            _ => panic!("expected list"),
        }
    }
}
