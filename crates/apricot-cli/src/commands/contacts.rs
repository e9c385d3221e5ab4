//! Contacts command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use apricot::{AccountId, Contact, PageLimit, ResourceQuery};

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ContactsArgs {
    /// Account id (see `apricot accounts`)
    #[arg(long)]
    pub account: String,

    /// Fields to select, comma separated
    #[arg(long)]
    pub select: Option<String>,

    /// Filter expression (defaults to non-archived contacts)
    #[arg(long, conflicts_with = "all")]
    pub filter: Option<String>,

    /// Include archived contacts (no filter)
    #[arg(long)]
    pub all: bool,

    /// Stop with an error after this many pages
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// Print the contacts as JSON
    #[arg(long)]
    pub json: bool,
}

impl ContactsArgs {
    fn query(&self) -> ResourceQuery {
        let mut query = ResourceQuery::contacts();
        if let Some(select) = &self.select {
            query = query.with_select(select);
        }
        if self.all {
            query = query.without_filter();
        } else if let Some(filter) = &self.filter {
            query = query.with_filter(filter);
        }
        query
    }
}

pub async fn run(api: &ApiArgs, args: ContactsArgs) -> Result<()> {
    let account = AccountId::new(&args.account).context("Invalid account id")?;
    let query = args.query();

    let mut config = api.config()?;
    if let Some(max_pages) = args.max_pages {
        config = config.with_page_limit(PageLimit::pages(max_pages));
    }
    debug!(
        account = %account,
        resource = %query.resource(),
        page_limit = ?config.page_limit,
        "Fetching contacts"
    );
    let session = super::login(api, config).await?;

    let contacts: Vec<Contact> = session
        .fetch_all(&account, &query)
        .await
        .context("Failed to fetch contacts")?;

    if args.json {
        return output::json_pretty(&contacts);
    }

    output::status(&format!("Retrieved {} contacts", contacts.len()));
    for contact in &contacts {
        println!(
            "{} - {}",
            contact.display_name(),
            contact.email.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
