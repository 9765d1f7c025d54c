//! Tracing

use std::io::IsTerminal;

use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

/// Returns the trace filter for a verbosity level
pub fn filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 | 2 => "warn,thunderpush_client=debug,thunderpush_cli=debug",
        _ => "warn,thunderpush_client=trace,thunderpush_cli=trace",
    }
}

/// Initializes the tracer
///
/// Traces go to stderr. `RUST_LOG` takes precedence over the verbosity.
pub fn init_tracer(verbose: u8) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| filter(verbose).to_string());

    let layer_stderr = tracing_subscriber::fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());
    let layer_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(directives);

    let trc_subscriber = tracing_subscriber::Registry::default()
        .with(layer_stderr)
        .with(layer_filter);
    tracing::subscriber::set_global_default(trc_subscriber)
}
