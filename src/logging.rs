//! Tracing subscriber setup.
//!
//! The engine emits `tracing` events only; installing a subscriber is the
//! host application's choice. These helpers cover the common cases.
//!
//! | Level | Events |
//! |-------|--------|
//! | `info` | One summary per guard run |
//! | `warn` | Slots left unfilled |
//! | `debug` | Accepted guards, manual overrides |
//! | `trace` | Rejected candidates with the failing rule |

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable: run summaries and
/// unfilled-slot warnings from this crate, warnings from everything else.
const DEFAULT_FILTER: &str = "warn,u_proctor=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs a global fmt subscriber.
///
/// Does nothing if a global subscriber is already set.
///
/// # Environment
/// - `RUST_LOG`: filter directives (default: `warn,u_proctor=info`),
///   e.g. `RUST_LOG=u_proctor=trace` to see every rejected candidate.
///
/// # Example
/// ```no_run
/// u_proctor::logging::init();
/// ```
pub fn init() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_line_number(true)
        .try_init();
}

/// Installs a `debug` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("u_proctor=debug"))
        .with_test_writer()
        .try_init();
}
