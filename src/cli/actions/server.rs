use crate::api::{self, storage::Accounts};
use anyhow::{Context, Result};
use std::{net::IpAddr, path::PathBuf};
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub address: IpAddr,
    pub port: u16,
    pub database: PathBuf,
    pub debug: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database cannot be opened or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Server args: {:?}", args);

    if args.debug {
        info!("Running in debug mode");
    }

    // storage failures are fatal at startup
    let accounts = Accounts::open(&args.database)
        .await
        .context("Could not initialize storage")?;

    api::new(args.address, args.port, accounts).await
}
