//! Page writers - where rendered pages end up

use crate::error::{Result, SpotgenError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Destination for rendered pages, keyed by output id
pub trait PageWriter {
    /// Persist one page and return where it was written
    fn write_page(&mut self, output_id: &str, text: &str) -> Result<PathBuf>;
}

/// Writes `<dir>/<output_id>.<extension>` on the local filesystem
///
/// Each page is written to a temp file in the target directory and then
/// renamed over the destination, so a reader never sees a half-written page.
#[derive(Debug, Clone)]
pub struct FsWriter {
    dir: PathBuf,
    extension: String,
}

impl FsWriter {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Destination path for an output id
    pub fn path_for(&self, output_id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", output_id, self.extension))
    }
}

/// Mode for a page about to replace `path`
///
/// An existing page keeps its mode; a new page gets 0o644.
#[cfg(unix)]
fn page_permissions(path: &std::path::Path) -> std::fs::Permissions {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => Permissions::from_mode(0o644),
    }
}

impl PageWriter for FsWriter {
    fn write_page(&mut self, output_id: &str, text: &str) -> Result<PathBuf> {
        let path = self.path_for(output_id);
        let write_failed = |source| SpotgenError::WriteFailed {
            path: path.clone(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(write_failed)?;

        let mut temp = NamedTempFile::new_in(&self.dir).map_err(write_failed)?;
        temp.write_all(text.as_bytes()).map_err(write_failed)?;
        temp.flush().map_err(write_failed)?;
        #[cfg(unix)]
        temp.as_file()
            .set_permissions(page_permissions(&path))
            .map_err(write_failed)?;
        temp.persist(&path).map_err(|e| write_failed(e.error))?;

        Ok(path)
    }
}

/// Keeps pages in memory, in write order
///
/// Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    pages: Vec<(String, String)>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, output_id: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|(id, _)| id == output_id)
            .map(|(_, text)| text.as_str())
    }

    /// Output ids in the order they were written
    pub fn output_ids(&self) -> Vec<&str> {
        self.pages.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageWriter for MemoryWriter {
    fn write_page(&mut self, output_id: &str, text: &str) -> Result<PathBuf> {
        match self.pages.iter_mut().find(|(id, _)| id == output_id) {
            Some((_, existing)) => *existing = text.to_string(),
            None => self
                .pages
                .push((output_id.to_string(), text.to_string())),
        }
        Ok(PathBuf::from(output_id))
    }
}
