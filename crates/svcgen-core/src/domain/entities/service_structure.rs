use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::ScaffoldRequest, error::DomainError, layout::SERVICE_DIRECTORIES,
    templates::render_all,
};

/// Planned service directory, ready for materialization.
///
/// This is the output of template rendering. It contains no business logic,
/// only data. Entry paths are relative to `root` and kept in write order.
#[derive(Debug, Clone)]
pub struct ServiceStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ServiceStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Plan a complete service: the skeleton directories followed by every
    /// rendered template.
    pub fn for_request(request: &ScaffoldRequest, root: impl Into<PathBuf>) -> Self {
        let mut structure = Self::new(root);
        for dir in SERVICE_DIRECTORIES {
            structure.add_directory(dir);
        }
        for file in render_all(request) {
            structure.add_file(file.path.into_path_buf(), file.content);
        }
        structure
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Content planned for `path`, if it is a file of this structure.
    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            FsEntry::File(f) => &f.path,
            FsEntry::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
