//! Storage disks that resolve relative paths to absolute ones for upload.
//!
//! The builder resolves `photo`/`document` paths on the default disk without checking them;
//! media group entries are resolved on the `public` disk and must exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A storage root on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    root: PathBuf,
}

impl Disk {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-ish path of `relative` under this disk. Leading `/` is ignored so
    /// `"/images/a.jpg"` and `"images/a.jpg"` resolve the same.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative.trim_start_matches('/'))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Writes `contents`, creating parent directories.
    pub fn put(&self, relative: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn make_directory(&self, relative: &str) -> Result<()> {
        fs::create_dir_all(self.path(relative))?;
        Ok(())
    }

    /// Removes a directory recursively; a missing directory is not an error.
    pub fn delete_directory(&self, relative: &str) -> Result<()> {
        match fs::remove_dir_all(self.path(relative)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The default disk and the `public` disk.
#[derive(Debug, Clone)]
pub struct Storage {
    local: Disk,
    public: Disk,
}

impl Storage {
    pub fn new(default_root: impl Into<PathBuf>, public_root: impl Into<PathBuf>) -> Self {
        Self {
            local: Disk::new(default_root),
            public: Disk::new(public_root),
        }
    }

    pub fn default_disk(&self) -> &Disk {
        &self.local
    }

    pub fn public(&self) -> &Disk {
        &self.public
    }

    /// Path on the default disk.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.local.path(relative)
    }
}
