//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add `count` files named `file_<i>.txt` under `dir`.
    pub fn add_many(&self, dir: &str, count: usize) {
        for i in 0..count {
            self.add_file(&format!("{}/file_{}.txt", dir, i), "");
        }
    }

    /// Remove all permissions from `path` until the returned guard is dropped.
    #[cfg(unix)]
    pub fn lock(&self, path: &str) -> Locked {
        Locked::new(self.dir.path().join(path))
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that restores permissions on drop so `TempDir` can clean up.
#[cfg(unix)]
pub struct Locked {
    path: PathBuf,
    mode: u32,
}

#[cfg(unix)]
impl Locked {
    fn new(path: PathBuf) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path)
            .expect("Failed to read metadata")
            .permissions();
        let mode = perms.mode();
        perms.set_mode(0o000);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
        Self { path, mode }
    }

    /// Whether the lock actually denies access. Root ignores permission bits.
    pub fn is_enforced(&self) -> bool {
        if self.path.is_dir() {
            fs::read_dir(&self.path).is_err()
        } else {
            fs::File::open(&self.path).is_err()
        }
    }
}

#[cfg(unix)]
impl Drop for Locked {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(self.mode));
    }
}
