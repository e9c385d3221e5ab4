//! Command implementations.

pub mod accounts;
pub mod contacts;
pub mod token;

use anyhow::{Context, Result};

use apricot::{ApiConfig, Session};

use crate::cli::ApiArgs;
use crate::output;

/// Authenticate and open a session with the given configuration.
pub async fn login(api: &ApiArgs, config: ApiConfig) -> Result<Session> {
    let credentials = api.credentials()?;

    output::status("Authenticating...");

    Session::login(config, &credentials)
        .await
        .context("Failed to authenticate")
}
