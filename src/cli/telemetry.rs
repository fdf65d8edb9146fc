use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Default level when no verbosity was requested.
const fn default_level(verbosity_level: Option<Level>, debug: bool) -> Level {
    match (verbosity_level, debug) {
        (Some(level), _) => level,
        (None, true) => Level::DEBUG,
        (None, false) => Level::ERROR,
    }
}

fn filter(level: Level) -> Result<EnvFilter> {
    // RUST_LOG=
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?)
        .add_directive("sqlx=warn".parse()?);

    Ok(filter)
}

/// Initialize logging
/// Debug mode prints human readable output, otherwise one JSON object per line.
///
/// # Errors
///
/// Returns an error if the subscriber cannot be installed
pub fn init(verbosity_level: Option<Level>, debug: bool) -> Result<()> {
    let filter = filter(default_level(verbosity_level, debug))?;

    if debug {
        let fmt_layer = fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(false)
            .with_target(false)
            .pretty();

        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(false);

        let subscriber = Registry::default().with(fmt_layer).with(filter);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
