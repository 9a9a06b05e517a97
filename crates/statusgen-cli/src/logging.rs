use tracing_subscriber::{EnvFilter, fmt, prelude::*};

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Initialize a tracing subscriber writing to stderr.
///
/// `RUST_LOG` selects the level, defaulting to "warn". Verbose mode forces
/// "debug" regardless of the environment.
pub fn init(verbose: bool) -> Result<(), InitError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter(verbose)?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn filter(verbose: bool) -> Result<EnvFilter, InitError> {
    if verbose {
        Ok(EnvFilter::try_new("debug")?)
    } else {
        Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?)
    }
}
