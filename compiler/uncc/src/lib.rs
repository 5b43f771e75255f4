//! Driver for the unc source analyzer.
//!
//! Glues the pipeline together for a single source ([`analyze_source`]),
//! reads configuration files, renders the chunk dump, and implements the
//! `unc` command line.

mod analyze;
pub mod cli;
mod config;
mod dump;
mod error;

pub use analyze::{analyze_source, Analysis, FatalError};
pub use cli::{run, EXIT_ERRORS, EXIT_FATAL, EXIT_OK};
pub use config::{apply_config, load_config};
pub use dump::dump_chunks;
pub use error::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set, e.g.
/// `RUST_LOG=unc_resolve=trace unc file.c`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
