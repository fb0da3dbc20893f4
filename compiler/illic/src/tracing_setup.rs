//! Opt-in tracing output.
//!
//! ```bash
//! ILLI_LOG=debug illi script.illi
//! ILLI_LOG=illi_parse=trace illi
//! ```
//!
//! `RUST_LOG` is honoured when `ILLI_LOG` is unset. With neither set no
//! subscriber is installed, so stderr carries nothing but diagnostics.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variables consulted for a filter, in priority order.
const FILTER_VARS: [&str; 2] = ["ILLI_LOG", "RUST_LOG"];

/// Install a hierarchical stderr subscriber if a filter variable is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = filter_directives(|var| std::env::var(var).ok()) else {
            return;
        };

        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);

        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(tree)
            .init();
    });
}

/// First non-empty filter among [`FILTER_VARS`].
fn filter_directives(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    FILTER_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.trim().is_empty())
}
