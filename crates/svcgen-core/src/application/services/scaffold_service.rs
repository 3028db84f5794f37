//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Plan the service structure from the request
//! 2. Refuse if the service directory already exists
//! 3. Create directories and write files, reporting each step
//! 4. Roll back the new service directory if a write fails
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter, ScaffoldEvent},
    },
    domain::{FsEntry, Port, ScaffoldRequest, ServiceName, ServiceStructure, WorkspaceLayout},
    error::{SvcgenError, SvcgenResult},
};

/// Summary of a scaffold run (or of a dry run's plan).
///
/// `directories` are full paths, starting with the service root; `files` are
/// relative to the service root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub service_name: ServiceName,
    pub port: Port,
    pub root: PathBuf,
    pub dry_run: bool,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn empty(request: &ScaffoldRequest, root: &Path, dry_run: bool) -> Self {
        Self {
            service_name: request.service_name().clone(),
            port: request.port().clone(),
            root: root.to_path_buf(),
            dry_run,
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Everything `structure` would create, without creating it.
    pub fn planned(request: &ScaffoldRequest, structure: &ServiceStructure) -> Self {
        let root = structure.root();
        let mut report = Self::empty(request, root, true);
        report.directories.push(root.to_path_buf());
        report
            .directories
            .extend(structure.directories().map(|d| root.join(&d.path)));
        report
            .files
            .extend(structure.files().map(|f| f.path.clone()));
        report
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    layout: WorkspaceLayout,
    rollback_on_failure: bool,
}

impl ScaffoldService {
    /// Create a new scaffold service writing under `layout`'s services root.
    ///
    /// Rollback of partially written services is enabled by default.
    pub fn new(filesystem: Box<dyn Filesystem>, layout: WorkspaceLayout) -> Self {
        Self {
            filesystem,
            layout,
            rollback_on_failure: true,
        }
    }

    /// Enable or disable removal of the service directory after a failed write.
    pub fn with_rollback(mut self, enabled: bool) -> Self {
        self.rollback_on_failure = enabled;
        self
    }

    pub fn layout(&self) -> &WorkspaceLayout {
        &self.layout
    }

    /// Build and validate the structure for `request` without any I/O.
    pub fn plan(&self, request: &ScaffoldRequest) -> SvcgenResult<ServiceStructure> {
        let root = self.layout.service_dir(request.service_name().as_str());
        let structure = ServiceStructure::for_request(request, root);
        structure.validate().map_err(SvcgenError::Domain)?;
        Ok(structure)
    }

    /// Plan `request` and check that its directory is free. Writes nothing.
    #[instrument(skip_all, fields(service = %request.service_name()))]
    pub fn preview(&self, request: &ScaffoldRequest) -> SvcgenResult<ServiceStructure> {
        let structure = self.plan(request)?;
        self.ensure_absent(request, &structure)?;
        Ok(structure)
    }

    /// Scaffold a new service.
    ///
    /// This is the main use case. The service directory is claimed with a
    /// single non-recursive create; losing that claim is `ServiceExists`.
    /// Rollback only ever touches a directory this run created.
    #[instrument(
        skip_all,
        fields(
            service = %request.service_name(),
            port = %request.port(),
            services_root = %self.layout.services_root().display()
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        reporter: &dyn ProgressReporter,
    ) -> SvcgenResult<ScaffoldReport> {
        info!("Scaffolding service {}", request);

        // 1. Plan
        let structure = self.plan(request)?;
        debug!(entries = structure.entry_count(), "Service planned");

        // 2. Check destination
        self.ensure_absent(request, &structure)?;

        // 3. Claim the service directory
        self.claim_root(request, structure.root())?;
        let mut report = ScaffoldReport::empty(request, structure.root(), false);
        report.directories.push(structure.root().to_path_buf());
        reporter.report(&ScaffoldEvent::DirectoryCreated(
            structure.root().to_path_buf(),
        ));

        // 4. Write, rolling back on failure
        match self.write_all(&structure, reporter, &mut report) {
            Ok(()) => {
                info!(
                    directories = report.directories.len(),
                    files = report.files.len(),
                    "Scaffold completed successfully"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "Write failed");
                if self.rollback_on_failure {
                    self.rollback(structure.root());
                }
                Err(e)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_absent(
        &self,
        request: &ScaffoldRequest,
        structure: &ServiceStructure,
    ) -> SvcgenResult<()> {
        if self.filesystem.exists(structure.root()) {
            return Err(ApplicationError::ServiceExists {
                name: request.service_name().to_string(),
                path: structure.root().to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    /// Create the services root if needed, then the service directory itself.
    fn claim_root(&self, request: &ScaffoldRequest, root: &Path) -> SvcgenResult<()> {
        if let Some(parent) = root.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        match self.filesystem.create_dir(root) {
            Err(SvcgenError::Application(ApplicationError::PathExists { path })) => {
                debug!(path = %path.display(), "Service directory claimed by someone else");
                Err(ApplicationError::ServiceExists {
                    name: request.service_name().to_string(),
                    path,
                }
                .into())
            }
            other => other,
        }
    }

    /// Write all entries under the claimed root.
    fn write_all(
        &self,
        structure: &ServiceStructure,
        reporter: &dyn ProgressReporter,
        report: &mut ScaffoldReport,
    ) -> SvcgenResult<()> {
        let root = structure.root();

        for entry in structure.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    let path = root.join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                    report.directories.push(path.clone());
                    reporter.report(&ScaffoldEvent::DirectoryCreated(path));
                }
                FsEntry::File(file) => {
                    let path = root.join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %file.path.display(), bytes = file.size(), "File written");
                    report.files.push(file.path.clone());
                    reporter.report(&ScaffoldEvent::FileWritten(file.path.clone()));
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure. Only called after `claim_root`
    /// succeeded, so the directory belongs to this run.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            let err = ApplicationError::RollbackFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
            };
            warn!(error = %err, "Rollback failed");
        } else {
            info!(path = %root.display(), "Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::{MockFilesystem, SilentReporter};

    #[derive(Default)]
    struct RecordingReporter {
        events: RefCell<Vec<ScaffoldEvent>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, event: &ScaffoldEvent) {
            self.events.borrow_mut().push(event.clone());
        }
    }

    fn order() -> ScaffoldRequest {
        ScaffoldRequest::parse("order", "3003").unwrap()
    }

    fn layout() -> WorkspaceLayout {
        WorkspaceLayout::new("/ws/services")
    }

    fn write_error(path: &Path) -> SvcgenError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "disk full".into(),
        }
        .into()
    }

    #[test]
    fn existing_service_is_rejected_before_any_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/ws/services/order")))
            .times(1)
            .return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_create_dir().never();
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let service = ScaffoldService::new(Box::new(fs), layout());
        let err = service.scaffold(&order(), &SilentReporter).unwrap_err();

        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::ServiceExists { ref name, .. }) if name == "order"
        ));
    }

    #[test]
    fn successful_scaffold_reports_every_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir()
            .with(eq(Path::new("/ws/services/order")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(7).returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().never();

        let reporter = RecordingReporter::default();
        let service = ScaffoldService::new(Box::new(fs), layout());
        let report = service.scaffold(&order(), &reporter).unwrap();

        assert_eq!(report.directories.len(), 5);
        assert_eq!(report.directories[0], PathBuf::from("/ws/services/order"));
        assert_eq!(report.files.len(), 7);
        assert!(!report.dry_run);

        let events = reporter.events.borrow();
        assert_eq!(events.len(), 12);
        assert_eq!(
            events[0],
            ScaffoldEvent::DirectoryCreated(PathBuf::from("/ws/services/order"))
        );
        assert_eq!(
            events[11],
            ScaffoldEvent::FileWritten(PathBuf::from("README.md"))
        );
    }

    #[test]
    fn lost_claim_is_service_exists_and_skips_rollback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .with(eq(Path::new("/ws/services")))
            .returning(|_| Ok(()));
        fs.expect_create_dir().times(1).returning(|path| {
            Err(ApplicationError::PathExists {
                path: path.to_path_buf(),
            }
            .into())
        });
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();

        let reporter = RecordingReporter::default();
        let service = ScaffoldService::new(Box::new(fs), layout());
        let err = service.scaffold(&order(), &reporter).unwrap_err();

        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::ServiceExists { ref name, .. }) if name == "order"
        ));
        assert!(reporter.events.borrow().is_empty());
    }

    #[test]
    fn failure_before_claim_skips_rollback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .returning(|path| Err(write_error(path)));
        fs.expect_create_dir().never();
        fs.expect_remove_dir_all().never();

        let service = ScaffoldService::new(Box::new(fs), layout());
        assert!(service.scaffold(&order(), &SilentReporter).is_err());
    }

    #[test]
    fn failed_write_rolls_back_service_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir()
            .with(eq(Path::new("/ws/services/order")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .returning(|path, _| Err(write_error(path)));
        fs.expect_remove_dir_all()
            .with(eq(Path::new("/ws/services/order")))
            .times(1)
            .returning(|_| Ok(()));

        let service = ScaffoldService::new(Box::new(fs), layout());
        let err = service.scaffold(&order(), &SilentReporter).unwrap_err();

        assert!(matches!(
            err,
            SvcgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn rollback_can_be_disabled() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir()
            .with(eq(Path::new("/ws/services/order")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .returning(|path, _| Err(write_error(path)));
        fs.expect_remove_dir_all().never();

        let service = ScaffoldService::new(Box::new(fs), layout()).with_rollback(false);
        assert!(service.scaffold(&order(), &SilentReporter).is_err());
    }

    #[test]
    fn failed_rollback_returns_original_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_create_dir()
            .with(eq(Path::new("/ws/services/order")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .returning(|path, _| Err(write_error(path)));
        fs.expect_remove_dir_all()
            .times(1)
            .returning(|path| Err(write_error(path)));

        let service = ScaffoldService::new(Box::new(fs), layout());
        let err = service.scaffold(&order(), &SilentReporter).unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn preview_checks_destination_without_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(fs), layout());
        let structure = service.preview(&order()).unwrap();
        let report = ScaffoldReport::planned(&order(), &structure);

        assert!(report.dry_run);
        assert_eq!(report.directories.len(), 5);
        assert_eq!(report.files.len(), 7);
        assert_eq!(
            report.directories[4],
            PathBuf::from("/ws/services/order/scripts")
        );
    }

    #[test]
    fn report_serialises_to_json() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        let service = ScaffoldService::new(Box::new(fs), layout());
        let structure = service.preview(&order()).unwrap();
        let json = serde_json::to_value(ScaffoldReport::planned(&order(), &structure)).unwrap();

        assert_eq!(json["service_name"], "order");
        assert_eq!(json["port"], 3003);
        assert_eq!(json["files"][0], "package.json");
    }
}
