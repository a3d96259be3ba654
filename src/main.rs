mod client;
mod credentials;
mod errors;
mod models;
mod request;

use std::env;
use std::process;

use anyhow::Context;
use dotenv::dotenv;
use tokio::sync::oneshot;
use tracing::{error, info};

use crate::client::SearchClient;
use crate::credentials::{ConfigError, Credentials};
use crate::errors::ApiError;
use crate::models::SearchResponse;
use crate::request::RequestSpec;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let term = env::args().nth(1).context("usage: gitsearch <search term>")?;

    // A broken credentials file is a deployment defect, not something a
    // retry can fix; bail out before doing anything else.
    let creds_path = env::var("GITSEARCH_CREDS").unwrap_or_else(|_| "creds.json".to_owned());
    let creds = Credentials::load(&creds_path).unwrap_or_else(fatal_config_error);
    info!(user = %creds.name, "loaded credentials from '{creds_path}'");

    let mut client = SearchClient::new(creds).unwrap_or_else(fatal_config_error);

    let (tx, rx) = oneshot::channel::<Result<SearchResponse, ApiError>>();
    client.perform(RequestSpec::Search(term.clone()), move |outcome| {
        let _ = tx.send(outcome);
    });

    let response = rx
        .await
        .context("search was cancelled before completing")?
        .with_context(|| format!("search for '{term}' failed"))?;

    println!("Found {} repositories:", response.items.len());
    for repo in response.items {
        println!("- {} (id {})", repo.full_name, repo.id);
    }

    Ok(())
}

fn fatal_config_error<T>(err: ConfigError) -> T {
    error!("unusable configuration: {err}");
    process::exit(1);
}
