//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use apricot::config::{DEFAULT_API_BASE, DEFAULT_TOKEN_URL};
use apricot::{ApiConfig, Credentials, FallbackPolicy};

use crate::commands::{accounts::AccountsArgs, contacts::ContactsArgs, token::TokenArgs};

/// Wild Apricot CLI tool for account exploration.
#[derive(Parser, Debug)]
#[command(name = "apricot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain an access token and print it
    Token(TokenArgs),

    /// List the accounts reachable with the credentials
    Accounts(AccountsArgs),

    /// Fetch all contacts of an account
    Contacts(ContactsArgs),
}

/// Connection and credential options shared by every command.
#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Application API key
    #[arg(long, env = "APRICOT_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Application client secret (omit to authenticate with the API key only)
    #[arg(long, env = "APRICOT_CLIENT_SECRET", hide_env_values = true, global = true)]
    pub client_secret: Option<String>,

    /// OAuth token endpoint
    #[arg(long, env = "APRICOT_TOKEN_URL", default_value = DEFAULT_TOKEN_URL, global = true)]
    pub token_url: String,

    /// API base URL
    #[arg(long, env = "APRICOT_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Only fall back to the API key when the client secret is rejected
    #[arg(long, global = true)]
    pub strict_fallback: bool,
}

impl ApiArgs {
    pub fn config(&self) -> Result<ApiConfig> {
        let fallback = if self.strict_fallback {
            FallbackPolicy::CredentialRejection
        } else {
            FallbackPolicy::AnyFailure
        };

        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));

        Ok(ApiConfig::from_urls(&self.token_url, &self.api_base)
            .context("Invalid endpoint URL")?
            .with_request_timeout(timeout)
            .with_fallback(fallback))
    }

    pub fn credentials(&self) -> Result<Credentials> {
        let api_key = self
            .api_key
            .as_deref()
            .context("No API key. Pass --api-key or set APRICOT_API_KEY.")?;
        Ok(Credentials::new(api_key, self.client_secret.as_deref()))
    }
}
