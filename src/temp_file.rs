use std::{
    fs,
    path::{Path, PathBuf},
};

/// Guard around the staged audio file. Dropping it removes the file, so the
/// song is cleaned up on every exit path of a handler, including a failed
/// send. Removal failures are logged, never surfaced to the user.
pub struct TempFile {
    path: PathBuf,
}

impl TempFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                log::warn!("Failed to remove file {:?}: {}", self.path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}_{}", name, uuid::Uuid::new_v4()))
    }

    #[test]
    fn drop_removes_existing_file() {
        let path = scratch_path("temp_file_drop");
        fs::write(&path, b"audio bytes").unwrap();

        {
            let _guard = TempFile::new(&path);
            assert!(path.exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn drop_tolerates_missing_file() {
        let path = scratch_path("temp_file_missing");
        let guard = TempFile::new(&path);
        assert_eq!(guard.path(), path.as_path());
        drop(guard);
    }
}
