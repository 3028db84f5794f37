//! Diagnostics for `create-service`, written to stderr.
//!
//! Progress lines and the JSON report own stdout; everything logged here
//! lands on stderr so a redirected stdout stays clean. One level applies
//! to the binary and both library crates:
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | warn  |
//! | `-v`      | info  |
//! | `-vv`     | debug |
//! | `-vvv`    | trace |
//! | `--quiet` | error |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the stderr subscriber for this run.
///
/// Lines carry no target, file or thread id. ANSI styling is used only
/// when stderr is a terminal and colour was not turned off.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise every crate of ours gets the same level.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// `create_service`, `svcgen_core` and `svcgen_adapters` at `level`.
fn directives(level: &str) -> String {
    format!("create_service={level},svcgen_core={level},svcgen_adapters={level}")
}

/// `--quiet` beats any number of `-v`.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
