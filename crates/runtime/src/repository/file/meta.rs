//! File-based MetaRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::progression::{META_VERSION, MetaProgress};
use crate::repository::{MetaRepository, RepositoryError, Result};

pub const SAVE_FILE: &str = "meta.json";

/// Stores meta progress as pretty-printed JSON in `{dir}/meta.json`.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-save leaves the previous record intact.
pub struct FileMetaRepository {
    base_dir: PathBuf,
}

impl FileMetaRepository {
    /// Create the repository, making `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn save_path(&self) -> PathBuf {
        self.base_dir.join(SAVE_FILE)
    }

    fn read_record(&self, path: &Path) -> Result<MetaProgress> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl MetaRepository for FileMetaRepository {
    fn load(&self) -> Result<MetaProgress> {
        let path = self.save_path();
        if !path.exists() {
            tracing::debug!("No save at {}, starting fresh", path.display());
            return Ok(MetaProgress::initial());
        }

        let meta = match self.read_record(&path) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}. Using initial progress", path.display(), e);
                return Ok(MetaProgress::initial());
            }
        };

        if meta.version != META_VERSION {
            tracing::warn!(
                "Unknown save version {} in {}. Using initial progress",
                meta.version,
                path.display()
            );
            return Ok(MetaProgress::initial());
        }

        tracing::debug!("Loaded meta progress from {}", path.display());
        Ok(meta)
    }

    fn save(&self, meta: &MetaProgress) -> Result<()> {
        let path = self.save_path();
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(meta)?;
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved meta progress to {}", path.display());
        Ok(())
    }

    fn has_save(&self) -> bool {
        self.save_path().exists()
    }

    fn delete(&self) -> Result<()> {
        let path = self.save_path();
        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted {}", path.display());
        }
        Ok(())
    }
}
