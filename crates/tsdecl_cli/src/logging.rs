//! Tracing setup for the command line.
//!
//! The subscriber is only installed when `TSDECL_LOG` or `RUST_LOG` is set.
//! `TSDECL_LOG` wins when both are present; both use `RUST_LOG` syntax, e.g.
//! `TSDECL_LOG=tsdecl_parser=trace`. Output goes to stderr so it never mixes
//! with the JSON written to stdout.

use tracing_subscriber::EnvFilter;

/// Name of the filter variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "TSDECL_LOG";

fn build_filter() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

pub fn init_tracing() {
    if std::env::var(LOG_ENV).is_err() && std::env::var("RUST_LOG").is_err() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
