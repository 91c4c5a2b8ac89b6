use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use super::saved_kernel::KernelInfo;

/// Persists the last kernel selection per notebook as one JSON file each.
#[derive(Debug, Clone)]
pub struct KernelInfoStore {
    dir: PathBuf,
}

impl KernelInfoStore {
    /// `~/.config/notebook_contexts/kernels` on Linux,
    /// `%APPDATA%\notebook_contexts\kernels` on Windows, etc.
    pub fn new() -> io::Result<Self> {
        let proj = ProjectDirs::from("", "", "notebook_contexts")
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Unable to locate config dir"))?;
        let dir = proj.config_dir().join("kernels");
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Store under an explicit directory instead of the platform default.
    pub fn with_dir(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn file_for(&self, notebook: &str) -> PathBuf {
        // Notebook ids may be URIs; keep the file name flat.
        let safe: String = notebook
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    /// Create or overwrite the saved selection for a notebook.
    pub fn save(&self, notebook: &str, info: &KernelInfo) -> io::Result<()> {
        let file = fs::File::create(self.file_for(notebook))?;
        serde_json::to_writer_pretty(file, info).map_err(SerdeError::into)
    }

    /// The saved selection, or `None` when absent or malformed.
    pub fn load(&self, notebook: &str) -> io::Result<Option<KernelInfo>> {
        let path = self.file_for(notebook);
        let file = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        match serde_json::from_reader(file) {
            Ok(info) => Ok(Some(info)),
            Err(e) => {
                eprintln!("Warning: could not read {:?}: {e}", path);
                Ok(None)
            }
        }
    }

    /// Delete a saved selection (`Ok(true)` if removed, `Ok(false)` if it
    /// didn't exist).
    pub fn delete(&self, notebook: &str) -> io::Result<bool> {
        match fs::remove_file(self.file_for(notebook)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
