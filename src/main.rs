//! storyform - story submission client
//!
//! CLI binary for uploading stories to an admin API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storyform::config::Config;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "storyform")]
#[command(about = "Submit stories with tags and media to an admin API")]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a story
    Submit {
        /// Story title
        #[arg(long)]
        title: Option<String>,

        /// Author name or alias
        #[arg(long)]
        author: Option<String>,

        /// Story text
        #[arg(long, group = "body_source")]
        body: Option<String>,

        /// Read the story text from a file
        #[arg(long, group = "body_source")]
        body_file: Option<PathBuf>,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Image or video to upload
        #[arg(long)]
        media: Option<PathBuf>,

        /// Fail instead of prompting for missing fields
        #[arg(long)]
        no_input: bool,
    },

    /// List stories saved locally after submission
    Stories {
        /// Show at most this many stories
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Remove all saved stories
        #[arg(long, conflicts_with = "limit")]
        clear: bool,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthCommand,
    },
}

#[derive(Subcommand)]
enum AuthCommand {
    /// Store an API token
    Login {
        /// Token value (prompted when omitted)
        token: Option<String>,
    },
    /// Remove the stored token
    Logout,
    /// Show which token would be used
    Status,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "storyform=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Submit {
            title,
            author,
            body,
            body_file,
            tags,
            media,
            no_input,
        } => {
            cli::run_submit(
                &config,
                cli::SubmitOptions {
                    title,
                    author,
                    body,
                    body_file,
                    tags,
                    media,
                    no_input,
                },
            )
            .await?;
        }
        Commands::Stories { limit, clear } => {
            cli::run_stories(&config, cli::StoriesOptions { limit, clear })?;
        }
        Commands::Auth { action } => {
            let action = match action {
                AuthCommand::Login { token } => cli::AuthAction::Login(token),
                AuthCommand::Logout => cli::AuthAction::Logout,
                AuthCommand::Status => cli::AuthAction::Status,
            };
            cli::run_auth(&config, action)?;
        }
    }

    Ok(())
}
