// SPDX-License-Identifier: MPL-2.0
//! Tracing setup and panic reporting.
//!
//! `RUST_LOG` wins when set; otherwise the level passed on the command line
//! (default `info`) applies to this crate and `warn` to everything else.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Builds the fallback filter directive for `level`.
#[must_use]
pub fn default_directive(level: &str) -> String {
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level.trim())
}

/// Resolves the filter from `RUST_LOG`, falling back to `level`.
pub fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_directive(level)).unwrap_or_else(|err| {
            eprintln!("invalid log level {level:?}: {err}");
            EnvFilter::new(default_directive(DEFAULT_LOG_LEVEL))
        })
    })
}

/// Installs the global subscriber and the panic hook.
///
/// Calling it again is harmless; only the first subscriber is kept.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_target(false)
        .try_init();
    install_panic_hook();
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!("Application error: {info}");
            previous(info);
        }));
    });
}
