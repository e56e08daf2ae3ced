//! Logging setup for the CLI.
//!
//! The level is chosen in this order:
//! 1. `--verbose`: debug for the actiongraph crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for the actiongraph crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 4] = [
    "actiongraph_analysis",
    "actiongraph_dot",
    "actiongraph_config",
    "actiongraph_cli",
];

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(directives("debug"))
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives("info")))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// `warn` for everything else, `level` for our crates.
fn directives(level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_every_crate() {
        let verbose = directives("debug");
        assert!(verbose.starts_with("warn,"));
        for krate in CRATES {
            assert!(verbose.contains(&format!("{krate}=debug")));
        }
    }

    #[test]
    fn test_directives_build_a_filter() {
        let _filter = EnvFilter::new(directives("info"));
    }
}
