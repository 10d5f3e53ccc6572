use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Root directory of uploaded image files.
///
/// Image paths of photos are relative to this directory.
#[derive(Debug, Clone)]
pub struct MediaDir(PathBuf);

impl MediaDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self(root.into())
    }

    pub fn root(&self) -> &Path {
        &self.0
    }

    pub fn file_path(&self, image: &str) -> PathBuf {
        self.0.join(image)
    }

    pub(crate) fn store(&self, image: &str, data: &[u8]) -> io::Result<PathBuf> {
        let path = self.file_path(image);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, data)?;
        debug!("Stored {} bytes in {}", data.len(), path.display());
        Ok(path)
    }

    /// Files that are already gone are ignored.
    pub(crate) fn remove(&self, image: &str) {
        let path = self.file_path(image);
        match fs::remove_file(&path) {
            Ok(()) => debug!("Removed {}", path.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => warn!("Failed to remove {}: {err}", path.display()),
        }
    }
}
