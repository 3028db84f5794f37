//! Implementation of the `create-service` command.
//!
//! Responsibility: turn CLI arguments into a `ScaffoldRequest`, locate the
//! services directory, call the core scaffold service, and display results.
//! No business logic lives here.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use svcgen_adapters::LocalFilesystem;
use svcgen_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{ScaffoldRequest, WorkspaceLayout},
    error::SvcgenError,
};

use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the command.
///
/// Dispatch sequence:
/// 1. Validate the service name and port
/// 2. Resolve the services directory
/// 3. Refuse an existing service
/// 4. Early-exit with the plan if `--dry-run`
/// 5. Scaffold via `ScaffoldService`, printing each created path
/// 6. Print next-steps guidance (or the JSON report)
#[instrument(skip_all, fields(service = %args.name))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Validate
    let request = ScaffoldRequest::parse(&args.name, &args.port).map_err(SvcgenError::Domain)?;

    // 2. Locate services/
    let layout = resolve_layout(args.services_root.as_deref(), &config, std::env::current_exe)?;
    debug!(services_root = %layout.services_root().display(), "Workspace resolved");

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), layout)
        .with_rollback(config.scaffold.rollback_on_failure);

    // 3. Refuse an existing service before announcing anything.
    let structure = service.preview(&request)?;

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let report = ScaffoldReport::planned(&request, &structure);
        return show_plan(&report, &output);
    }

    // 5. Scaffold
    output.header(&format!(
        "Creating service: {} on port {}",
        request.service_name(),
        request.port()
    ))?;
    info!(request = %request, "Scaffold started");

    let services_root = service.layout().services_root();
    if !services_root.is_dir() {
        output.warning(&format!(
            "Services directory {} does not exist yet and will be created",
            services_root.display()
        ))?;
    }

    let report = service.scaffold(&request, &output)?;

    // 6. Result
    if output.is_json() {
        output.json(&report)?;
        return Ok(());
    }

    let name = request.service_name();
    output.print("")?;
    output.success(&format!("Service '{name}' created successfully!"))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!(
        "1. cd '{}'",
        service.layout().workspace_root().display()
    ))?;
    output.print("2. pnpm install")?;
    output.print(&format!("3. pnpm --filter {} dev", name.package_name()))?;

    Ok(())
}

// ── Workspace resolution ──────────────────────────────────────────────────────

/// Pick the services directory.
///
/// The flag (or its env var) wins, then `workspace.services_root` from the
/// config file, then the directory next to the one holding the executable.
pub fn resolve_layout<F>(
    flag: Option<&Path>,
    config: &AppConfig,
    current_exe: F,
) -> CliResult<WorkspaceLayout>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    if let Some(root) = flag {
        debug!("Services root taken from --services-root");
        return Ok(WorkspaceLayout::new(root));
    }

    if let Some(root) = &config.workspace.services_root {
        debug!("Services root taken from configuration");
        return Ok(WorkspaceLayout::new(root));
    }

    let exe = current_exe().map_err(|e| CliError::WorkspaceUnresolved {
        reason: format!("cannot determine executable path: {e}"),
    })?;

    WorkspaceLayout::from_executable(&exe).ok_or_else(|| CliError::WorkspaceUnresolved {
        reason: format!("'{}' has no workspace directory above it", exe.display()),
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_plan(report: &ScaffoldReport, out: &OutputManager) -> CliResult<()> {
    if out.is_json() {
        out.json(report)?;
        return Ok(());
    }

    out.info(&format!(
        "Dry run: would create service '{}' on port {} at {}",
        report.service_name,
        report.port,
        report.root.display()
    ))?;
    for dir in &report.directories {
        out.print(&format!("  {}/", dir.display()))?;
    }
    for file in &report.files {
        out.print(&format!("  {}", file.display()))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn no_exe() -> io::Result<PathBuf> {
        Err(io::Error::other("not available"))
    }

    #[test]
    fn flag_wins_over_everything() {
        let mut config = AppConfig::default();
        config.workspace.services_root = Some(PathBuf::from("/from/config"));

        let layout = resolve_layout(Some(Path::new("/from/flag")), &config, no_exe).unwrap();
        assert_eq!(layout.services_root(), Path::new("/from/flag"));
    }

    #[test]
    fn config_wins_over_executable() {
        let mut config = AppConfig::default();
        config.workspace.services_root = Some(PathBuf::from("/from/config"));

        let layout = resolve_layout(None, &config, || {
            Ok(PathBuf::from("/ws/scripts/create-service"))
        })
        .unwrap();
        assert_eq!(layout.services_root(), Path::new("/from/config"));
    }

    #[test]
    fn executable_location_is_the_default() {
        let layout = resolve_layout(None, &AppConfig::default(), || {
            Ok(PathBuf::from("/ws/scripts/create-service"))
        })
        .unwrap();
        assert_eq!(layout.services_root(), Path::new("/ws/services"));
        assert_eq!(layout.workspace_root(), Path::new("/ws"));
    }

    #[test]
    fn missing_executable_is_unresolved() {
        let err = resolve_layout(None, &AppConfig::default(), no_exe).unwrap_err();
        assert!(matches!(err, CliError::WorkspaceUnresolved { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn shallow_executable_is_unresolved() {
        let err = resolve_layout(None, &AppConfig::default(), || {
            Ok(PathBuf::from("/create-service"))
        })
        .unwrap_err();
        assert!(matches!(err, CliError::WorkspaceUnresolved { .. }));
    }
}
