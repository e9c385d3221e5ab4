//! Accounts command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AccountsArgs {
    /// Print the accounts as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(api: &ApiArgs, args: AccountsArgs) -> Result<()> {
    let session = super::login(api, api.config()?).await?;

    let accounts = session
        .accounts()
        .await
        .context("Failed to fetch accounts")?;

    if args.json {
        return output::json_pretty(&accounts);
    }

    if accounts.is_empty() {
        output::status("No accounts found.");
        return Ok(());
    }

    println!("Available accounts:");
    for account in &accounts {
        println!("ID: {}, Name: {}, URL: {}", account.id, account.name, account.url);
    }

    Ok(())
}
