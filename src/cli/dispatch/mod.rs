//! Map parsed command-line arguments to the action to run.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_ADDRESS, ARG_DATABASE, ARG_PORT, logging::ARG_DEBUG};
use anyhow::{Context, Result};
use std::{net::IpAddr, path::PathBuf};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let address = matches
        .get_one::<IpAddr>(ARG_ADDRESS)
        .copied()
        .context("missing required argument: --address")?;
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(5000);
    let database = matches
        .get_one::<PathBuf>(ARG_DATABASE)
        .cloned()
        .context("missing required argument: --database")?;

    Ok(Action::Server(Args {
        address,
        port,
        database,
        debug: matches.get_flag(ARG_DEBUG),
    }))
}
