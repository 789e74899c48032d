//! Log output setup.
//!
//! Logs go to stderr so stdout only carries results and prompts.
//! `RUST_LOG` overrides the level picked from `-v` flags:
//! ```bash
//! RUST_LOG=keycalc=debug keycalc --gui
//! ```

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default filter for a `-v` count.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Only the first call has an effect.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(level_for(verbosity))
        };

        // try_init: a subscriber may already be set by a test harness
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn test_init_installs_global_subscriber() {
        init(0);
        assert!(tracing::dispatcher::has_been_set());

        // Second call is a no-op and must not panic
        init(3);
        assert!(INIT.is_completed());
    }
}
