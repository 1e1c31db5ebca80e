pub mod build_info;
pub mod persistence;

use std::sync::Once;

use tracing_subscriber::filter::{Directive, LevelFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` is honoured; the crate itself defaults to `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let crate_directive: Directive = "campaign_calendar=info"
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::from_default_env().add_directive(crate_directive);

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
