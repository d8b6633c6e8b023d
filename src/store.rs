//! JSON file persistence for [`BookData`].

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::contact::BookData;
use crate::error::BookError;

/// Handle on one data file. Created per invocation and passed to whoever needs it.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the data file. A missing file is an empty book.
    pub async fn load(&self) -> Result<BookData, BookError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(BookData::default());
            }
            Err(e) => return Err(e.into()),
        };
        let data: BookData = serde_json::from_slice(&bytes)?;
        info!(path = %self.path.display(), records = data.records.len(), "data loaded");
        Ok(data)
    }

    /// Writes the whole document to a sibling temp file, then renames it over the old one.
    pub async fn save(&self, data: &BookData) -> Result<(), BookError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(data)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        info!(path = %self.path.display(), records = data.records.len(), "data saved");
        Ok(())
    }
}
