use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system
///
/// Logs go to stderr so the report on stdout stays clean. `RUST_LOG` is
/// honored unless `verbose` forces the `debug` level; the default is `warn`.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = if verbose {
        EnvFilter::try_new("debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
