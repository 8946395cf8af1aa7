//! Log setup for the `wdb` binary.
//!
//! The library only emits `tracing` events. Database loading reports skipped
//! descriptors at debug level and duplicate styli at warn level, so the
//! default filter shows warnings and `-v`/`-vv` reveal the per-file detail.

use std::io::{self, IsTerminal};

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Returns the default filter directive for a verbosity setting.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "wdb=error"
    } else {
        match verbose {
            0 => "wdb=warn",
            1 => "wdb=info",
            2 => "wdb=debug",
            _ => "wdb=trace",
        }
    }
}

/// Installs the stderr subscriber for the CLI.
///
/// `RUST_LOG` replaces the directive picked from `verbose`/`quiet`. JSON
/// mode writes one object per event so robot output on stdout stays clean.
pub fn init_logging(json: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    // Keeps an already installed subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer(json, io::stderr().is_terminal()))
        .try_init();
}

fn stderr_layer<S>(json: bool, terminal: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let base = fmt::layer()
        .with_writer(io::stderr)
        .with_file(false)
        .with_line_number(false);

    if json {
        base.json().with_target(true).boxed()
    } else if terminal {
        base.with_target(false).boxed()
    } else {
        base.with_ansi(false).with_target(false).compact().boxed()
    }
}
