//! Logging infrastructure for the takin CLI.
//!
//! Structured logging via the `tracing` ecosystem with verbosity flags and
//! environment-based overrides.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for takin crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for takin crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("takin_cli=debug,takin_config=debug,takin_compiler=debug")
    } else if quiet {
        EnvFilter::new("takin_cli=error,takin_config=error,takin_compiler=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("takin_cli=info,takin_config=info,takin_compiler=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // tracing is global and can only be initialized once per process, so
    // these only verify that the filters construct.

    #[test]
    fn verbose_filter_constructs() {
        let _filter = EnvFilter::new("takin_cli=debug,takin_config=debug,takin_compiler=debug");
    }

    #[test]
    fn quiet_filter_constructs() {
        let _filter = EnvFilter::new("takin_cli=error,takin_config=error,takin_compiler=error");
    }
}
