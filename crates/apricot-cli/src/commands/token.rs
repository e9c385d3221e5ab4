//! Token command implementation.

use anyhow::{Context, Result};
use clap::Args;

use apricot::AuthProvider;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct TokenArgs {}

pub async fn run(api: &ApiArgs, _args: TokenArgs) -> Result<()> {
    let provider = AuthProvider::new(api.config()?)?;
    let credentials = api.credentials()?;

    output::status("Authenticating...");

    let grant = provider
        .grant(&credentials)
        .await
        .context("Failed to authenticate")?;

    output::success(&format!("Authenticated with {} credentials", grant.scheme));
    if let Some(expires_in) = grant.expires_in {
        output::status(&format!("Expires in {}s", expires_in));
    }
    println!("{}", grant.access_token.as_str());

    Ok(())
}
