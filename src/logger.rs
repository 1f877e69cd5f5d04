use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global tracing subscriber for hosts that have not set one.
///
/// Filtering follows `HISTSINK_LOG`, then `RUST_LOG`, then the `verbose`
/// flag. Safe to call more than once; later calls leave the existing
/// subscriber in place.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = std::env::var("HISTSINK_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("Global tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_is_idempotent() {
        init_logging(false);
        init_logging(false);
    }
}
