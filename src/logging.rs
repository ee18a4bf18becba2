//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Level used for this crate's events
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }

    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global stderr subscriber. `RUST_LOG` takes precedence over
/// the verbosity flags when set.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tfc_spec={}", level_for(verbose, quiet))));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, false), "warn");
        assert_eq!(level_for(1, false), "info");
        assert_eq!(level_for(2, false), "debug");
        assert_eq!(level_for(7, false), "trace");
        assert_eq!(level_for(3, true), "error");
    }
}
