//! lintrc core
//!
//! Loading, validation and rule resolution for ESLint-style lint
//! configuration documents. The linting engine itself lives elsewhere; this
//! crate answers "what severity and options does rule X run with?".

pub mod config;
pub mod environment;
pub mod error;
pub mod presets;
pub mod result;

// Re-export commonly used types
pub use config::{
    ConfigDocument, ConfigFormat, ConfigLoader, Extends, LintConfiguration, ResolvedRule,
    RuleEntry, RuleOrigin, RuleSeverity,
};
pub use error::{ErrorKind, LintrcError};
pub use presets::{Preset, PresetRegistry};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintrc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
