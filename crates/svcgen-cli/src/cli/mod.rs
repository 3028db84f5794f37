//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "create-service",
    bin_name = "create-service",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a new microservice in the workspace",
    long_about = "create-service generates a starter Express microservice \
                  (package.json, .env, entry point, routes, README) under \
                  the workspace's services/ directory.",
    after_help = "EXAMPLES:\n\
        \x20 create-service order 3003\n\
        \x20 create-service user-profile 3010 --dry-run\n\
        \x20 create-service billing 3020 --services-root ./services --output-format json",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Logging, colour, config and output-format flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to create.
    #[command(flatten)]
    pub create: CreateArgs,
}

/// Arguments describing the service to create.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Service name; becomes `services/<name>` and the `<name>-service` package.
    #[arg(value_name = "SERVICE_NAME", help = "Name of the new service")]
    pub name: String,

    /// Port the service listens on. Kept as text so that a non-numeric value
    /// is reported as an invalid port rather than a usage error.
    #[arg(
        value_name = "PORT",
        allow_negative_numbers = true,
        help = "Port the service listens on"
    )]
    pub port: String,

    /// Override the directory services are created in.
    #[arg(
        long = "services-root",
        value_name = "DIR",
        env = "SVCGEN_SERVICES_ROOT",
        help = "Services directory (default: <workspace>/services next to this binary's scripts/ directory)"
    )]
    pub services_root: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}
