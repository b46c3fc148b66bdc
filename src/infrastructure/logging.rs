use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global subscriber, appending to `path`.
///
/// Logs cannot go to stdout or stderr while the terminal UI is running.
pub fn init_logging(path: &Path, level: Level) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing::subscriber::set_global_default(build_subscriber(level, Mutex::new(file)))
        .map_err(io::Error::other)
}

/// Builds the subscriber without installing it.
pub fn build_subscriber<W>(level: Level, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(layer)
}

/// RUST_LOG overrides the configured level. Dependencies stay at warn.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,shelfscan={}",
            level.as_str().to_lowercase()
        ))
    })
}
