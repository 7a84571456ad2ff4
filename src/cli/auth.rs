//! Auth command - manage the stored API token

use crate::cli::style::{Stylize, check, cross};
use anstream::println;
use dialoguer::Password;
use storyform::auth::{
    AuthSource, TOKEN_ENV_VAR, clear_auth_token, get_auth_token, save_auth_token,
};
use storyform::config::Config;
use storyform::error::{Error, Result};
use storyform::storage::FileStore;

/// Auth subcommand
#[derive(Debug, Clone)]
pub enum AuthAction {
    /// Store a token, prompting when `None`
    Login(Option<String>),
    /// Remove the stored token
    Logout,
    /// Show where the token comes from
    Status,
}

/// Run the auth command
pub fn run_auth(config: &Config, action: AuthAction) -> Result<()> {
    let store = FileStore::new(&config.storage_path);

    match action {
        AuthAction::Login(token) => {
            let token = match token {
                Some(t) => t,
                None => Password::new()
                    .with_prompt("API token")
                    .interact()
                    .map_err(|e| Error::Internal(format!("Failed to read token: {e}")))?,
            };
            save_auth_token(&store, &config.token_key, &token)?;
            println!("{} Token saved to {}", check(), store.path().display());
        }
        AuthAction::Logout => {
            clear_auth_token(&store, &config.token_key)?;
            println!("{} Token removed", check());
        }
        AuthAction::Status => match get_auth_token(&store, &config.token_key)? {
            Some(token) => {
                let source = match token.source {
                    AuthSource::EnvVar => format!("{TOKEN_ENV_VAR} environment variable"),
                    AuthSource::Store => store.path().display().to_string(),
                };
                println!("{} Token found", check());
                println!("  {} {}", "Token source:".muted(), source.accent());
            }
            None => {
                println!("{} No token found", cross());
                println!(
                    "  Run {} or set {}",
                    "storyform auth login".accent(),
                    TOKEN_ENV_VAR.accent()
                );
            }
        },
    }
    Ok(())
}
