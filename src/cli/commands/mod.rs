pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::{net::IpAddr, path::PathBuf};

pub const ARG_ADDRESS: &str = "address";
pub const ARG_PORT: &str = "port";
pub const ARG_DATABASE: &str = "database";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("smartsubmit")
        .about("Account registration and login service")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_ADDRESS)
                .short('a')
                .long("address")
                .help("Address to bind to")
                .default_value("127.0.0.1")
                .env("SMARTSUBMIT_ADDRESS")
                .value_parser(clap::value_parser!(IpAddr)),
        )
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("5000")
                .env("SMARTSUBMIT_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DATABASE)
                .short('d')
                .long("database")
                .help("Path to the SQLite database file, created if missing")
                .default_value("database.db")
                .env("SMARTSUBMIT_DATABASE")
                .value_parser(clap::value_parser!(PathBuf)),
        );

    logging::with_args(command)
}
